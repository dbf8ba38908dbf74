#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReferralRow {
    pub user_id: String,
    pub code: String,
    pub referred_count: i64,
}
