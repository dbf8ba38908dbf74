#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReminderRow {
    pub user_id: String,
    pub event_id: String,
    pub remind_at: String,
    pub created_at: String,
}
