use serde::Serialize;
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use crate::database::profiles_repo;
use crate::database::redemptions_repo::{self, NewRedemption};
use crate::error::AppError;
use crate::models::Reward;
use crate::services::now_timestamp;

#[derive(Debug, Serialize)]
pub struct RewardView {
    pub id: String,
    pub title: String,
    pub ally_name: String,
    pub cost_points: i64,
    pub description: String,
    pub affordable: bool,
}

#[derive(Debug, Serialize)]
pub struct RedemptionView {
    pub redemption_id: String,
    pub reward_id: String,
    pub code: String,
    pub points_left: i64,
}

pub async fn list_rewards(
    pool: &SqlitePool,
    rewards: &[Reward],
    user_id: &str,
) -> Result<Vec<RewardView>, AppError> {
    profiles_repo::ensure_profile(pool, user_id).await?;
    let points = profiles_repo::load_profile(pool, user_id)
        .await?
        .map(|p| p.points)
        .unwrap_or(0);

    Ok(rewards
        .iter()
        .map(|r| RewardView {
            id: r.id.clone(),
            title: r.title.clone(),
            ally_name: r.ally_name.clone(),
            cost_points: r.cost_points,
            description: r.description.clone(),
            affordable: points >= r.cost_points,
        })
        .collect())
}

pub async fn redeem(
    pool: &SqlitePool,
    rewards: &[Reward],
    user_id: &str,
    reward_id: &str,
) -> Result<RedemptionView, AppError> {
    let reward = rewards
        .iter()
        .find(|r| r.id == reward_id)
        .ok_or(AppError::NotFound)?;

    profiles_repo::ensure_profile(pool, user_id).await?;
    if profiles_repo::deduct_points(pool, user_id, reward.cost_points).await? == 0 {
        return Err(AppError::Validation(
            "Puntos insuficientes para este canje".to_string(),
        ));
    }

    let redemption_id = Uuid::new_v4().to_string();
    let code = voucher_code();
    let created_at = now_timestamp();
    redemptions_repo::insert_redemption(
        pool,
        NewRedemption {
            redemption_id: &redemption_id,
            user_id,
            reward_id: &reward.id,
            cost_points: reward.cost_points,
            code: &code,
            created_at: &created_at,
        },
    )
    .await?;

    let points_left = profiles_repo::load_profile(pool, user_id)
        .await?
        .map(|p| p.points)
        .unwrap_or(0);

    info!(
        "🎁 Canje: user={} reward={} costo={} saldo={}",
        user_id, reward.id, reward.cost_points, points_left
    );

    Ok(RedemptionView {
        redemption_id,
        reward_id: reward.id.clone(),
        code,
        points_left,
    })
}

fn voucher_code() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_uppercase()
}
