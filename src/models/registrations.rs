#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RegistrationRow {
    pub registration_id: String,
    pub user_id: String,
    pub event_id: String,
    pub status: String, // join|cancelled|completed
    pub created_at: String,
}
