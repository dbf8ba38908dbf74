use sqlx::SqlitePool;

use crate::models::ReferralRow;

const SQL_FIND_BY_USER: &str = r#"
SELECT user_id, code, referred_count
FROM referrals
WHERE user_id = ?
"#;

const SQL_FIND_BY_CODE: &str = r#"
SELECT user_id, code, referred_count
FROM referrals
WHERE code = ?
"#;

const SQL_INSERT_REFERRAL: &str = r#"
INSERT OR IGNORE INTO referrals (user_id, code, referred_count)
VALUES (?, ?, 0)
"#;

const SQL_INCREMENT_REFERRED: &str = r#"
UPDATE referrals
SET referred_count = referred_count + 1
WHERE user_id = ?
"#;

const SQL_HAS_CLAIMED: &str = r#"
SELECT COUNT(*)
FROM referral_claims
WHERE user_id = ?
"#;

const SQL_INSERT_CLAIM: &str = r#"
INSERT INTO referral_claims (user_id, code, created_at)
VALUES (?, ?, ?)
"#;

pub async fn find_by_user(pool: &SqlitePool, user_id: &str) -> sqlx::Result<Option<ReferralRow>> {
    sqlx::query_as::<_, ReferralRow>(SQL_FIND_BY_USER)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_code(pool: &SqlitePool, code: &str) -> sqlx::Result<Option<ReferralRow>> {
    sqlx::query_as::<_, ReferralRow>(SQL_FIND_BY_CODE)
        .bind(code)
        .fetch_optional(pool)
        .await
}

pub async fn insert_referral(pool: &SqlitePool, user_id: &str, code: &str) -> sqlx::Result<()> {
    sqlx::query(SQL_INSERT_REFERRAL)
        .bind(user_id)
        .bind(code)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn increment_referred(pool: &SqlitePool, user_id: &str) -> sqlx::Result<()> {
    sqlx::query(SQL_INCREMENT_REFERRED)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn has_claimed(pool: &SqlitePool, user_id: &str) -> sqlx::Result<bool> {
    let count = sqlx::query_scalar::<_, i64>(SQL_HAS_CLAIMED)
        .bind(user_id)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

pub async fn insert_claim(
    pool: &SqlitePool,
    user_id: &str,
    code: &str,
    created_at: &str,
) -> sqlx::Result<()> {
    sqlx::query(SQL_INSERT_CLAIM)
        .bind(user_id)
        .bind(code)
        .bind(created_at)
        .execute(pool)
        .await?;
    Ok(())
}
