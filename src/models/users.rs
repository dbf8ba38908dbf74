#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub user_id: String,
    pub email: String,
    pub password: String, // demo: texto plano, el login es un chequeo trivial
    pub name: String,
    pub district: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
pub struct CurrentUserRow {
    pub user_id: String,
}
