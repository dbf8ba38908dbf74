#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProfileRow {
    pub user_id: String,
    pub points: i64,
    pub volunteer_hours: i64,
    pub cleanups_attended: i64,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BadgeRow {
    pub badge_id: String,
    pub awarded_at: String,
}
