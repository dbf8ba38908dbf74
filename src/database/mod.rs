pub mod current_user_repo;
pub mod profiles_repo;
pub mod redemptions_repo;
pub mod referrals_repo;
pub mod registrations_repo;
pub mod reminders_repo;
pub mod schema;
pub mod users_repo;

#[cfg(test)]
pub(crate) async fn test_pool() -> sqlx::SqlitePool {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("pool en memoria");
    schema::init(&pool).await.expect("esquema");
    pool
}
