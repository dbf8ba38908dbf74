#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RedemptionRow {
    pub redemption_id: String,
    pub user_id: String,
    pub reward_id: String,
    pub cost_points: i64,
    pub code: String,
    pub created_at: String,
}
