use base64::{engine::general_purpose, Engine as _};
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::info;

use crate::database::{profiles_repo, referrals_repo};
use crate::error::AppError;
use crate::services::now_timestamp;

pub const INVITER_BONUS: i64 = 50;
pub const INVITEE_BONUS: i64 = 25;

/// Código determinístico por usuario, derivado del id. No se decodifica
/// nunca: la búsqueda inversa va por la tabla `referrals`.
pub fn referral_code_for(user_id: &str) -> String {
    let encoded = general_purpose::URL_SAFE_NO_PAD.encode(user_id.as_bytes());
    let tail: String = encoded.chars().take(8).collect();
    format!("ECO-{}", tail)
}

#[derive(Debug, Serialize)]
pub struct ReferralView {
    pub code: String,
    pub referred_count: i64,
}

#[derive(Debug, Serialize)]
pub struct ClaimView {
    pub code: String,
    pub points_awarded: i64,
}

pub async fn load_or_create(pool: &SqlitePool, user_id: &str) -> Result<ReferralView, AppError> {
    if let Some(row) = referrals_repo::find_by_user(pool, user_id).await? {
        return Ok(ReferralView {
            code: row.code,
            referred_count: row.referred_count,
        });
    }

    let code = referral_code_for(user_id);
    referrals_repo::insert_referral(pool, user_id, &code).await?;
    Ok(ReferralView {
        code,
        referred_count: 0,
    })
}

/// Un invitado canjea un código: se acreditan puntos a ambos lados. Cada
/// usuario puede canjear un solo código y nunca el propio.
pub async fn claim(pool: &SqlitePool, user_id: &str, code: &str) -> Result<ClaimView, AppError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(AppError::Validation(
            "Ingresa un código de referido".to_string(),
        ));
    }

    let Some(referral) = referrals_repo::find_by_code(pool, code).await? else {
        return Err(AppError::Validation(
            "Código de referido no válido".to_string(),
        ));
    };
    if referral.user_id == user_id {
        return Err(AppError::Validation(
            "No puedes usar tu propio código".to_string(),
        ));
    }
    if referrals_repo::has_claimed(pool, user_id).await? {
        return Err(AppError::Validation(
            "Ya usaste un código de referido".to_string(),
        ));
    }

    profiles_repo::ensure_profile(pool, user_id).await?;
    profiles_repo::ensure_profile(pool, &referral.user_id).await?;
    profiles_repo::credit(pool, &referral.user_id, INVITER_BONUS, 0, 0).await?;
    profiles_repo::credit(pool, user_id, INVITEE_BONUS, 0, 0).await?;
    referrals_repo::increment_referred(pool, &referral.user_id).await?;
    referrals_repo::insert_claim(pool, user_id, code, &now_timestamp()).await?;

    info!(
        "🤝 Referido canjeado: invitado={} anfitrión={}",
        user_id, referral.user_id
    );

    Ok(ClaimView {
        code: code.to_string(),
        points_awarded: INVITEE_BONUS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{self, profiles_repo};

    #[test]
    fn codes_are_deterministic_and_prefixed() {
        let a = referral_code_for("usr-demo");
        let b = referral_code_for("usr-demo");
        assert_eq!(a, b);
        assert!(a.starts_with("ECO-"));
        assert_ne!(a, referral_code_for("usr-otra"));
    }

    #[tokio::test]
    async fn claim_credits_both_sides() {
        let pool = database::test_pool().await;
        let referral = load_or_create(&pool, "usr-demo").await.unwrap();

        let view = claim(&pool, "usr-invitada", &referral.code).await.unwrap();
        assert_eq!(view.points_awarded, INVITEE_BONUS);

        let inviter = profiles_repo::load_profile(&pool, "usr-demo")
            .await
            .unwrap()
            .unwrap();
        let invitee = profiles_repo::load_profile(&pool, "usr-invitada")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(inviter.points, INVITER_BONUS);
        assert_eq!(invitee.points, INVITEE_BONUS);

        let updated = load_or_create(&pool, "usr-demo").await.unwrap();
        assert_eq!(updated.referred_count, 1);
    }

    #[tokio::test]
    async fn own_code_and_double_claim_are_rejected() {
        let pool = database::test_pool().await;
        let referral = load_or_create(&pool, "usr-demo").await.unwrap();

        let err = claim(&pool, "usr-demo", &referral.code).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        claim(&pool, "usr-invitada", &referral.code).await.unwrap();
        let err = claim(&pool, "usr-invitada", &referral.code).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn unknown_code_is_rejected() {
        let pool = database::test_pool().await;
        let err = claim(&pool, "usr-invitada", "ECO-NOPE").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
