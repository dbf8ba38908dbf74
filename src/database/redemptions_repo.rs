use sqlx::SqlitePool;

use crate::models::RedemptionRow;

const SQL_INSERT_REDEMPTION: &str = r#"
INSERT INTO redemptions (
  redemption_id,
  user_id,
  reward_id,
  cost_points,
  code,
  created_at
) VALUES (?, ?, ?, ?, ?, ?)
"#;

const SQL_LIST_FOR_USER: &str = r#"
SELECT redemption_id, user_id, reward_id, cost_points, code, created_at
FROM redemptions
WHERE user_id = ?
ORDER BY created_at DESC
"#;

pub struct NewRedemption<'a> {
    pub redemption_id: &'a str,
    pub user_id: &'a str,
    pub reward_id: &'a str,
    pub cost_points: i64,
    pub code: &'a str,
    pub created_at: &'a str,
}

pub async fn insert_redemption(pool: &SqlitePool, red: NewRedemption<'_>) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_REDEMPTION)
        .bind(red.redemption_id)
        .bind(red.user_id)
        .bind(red.reward_id)
        .bind(red.cost_points)
        .bind(red.code)
        .bind(red.created_at)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

pub async fn list_for_user(pool: &SqlitePool, user_id: &str) -> sqlx::Result<Vec<RedemptionRow>> {
    sqlx::query_as::<_, RedemptionRow>(SQL_LIST_FOR_USER)
        .bind(user_id)
        .fetch_all(pool)
        .await
}
