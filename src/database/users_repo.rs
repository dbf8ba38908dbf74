use sqlx::SqlitePool;

use crate::models::UserRow;

const SQL_FIND_BY_EMAIL: &str = r#"
SELECT user_id, email, password, name, district
FROM users
WHERE lower(email) = lower(?)
"#;

const SQL_FIND_BY_ID: &str = r#"
SELECT user_id, email, password, name, district
FROM users
WHERE user_id = ?
"#;

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> sqlx::Result<Option<UserRow>> {
    sqlx::query_as::<_, UserRow>(SQL_FIND_BY_EMAIL)
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_id(pool: &SqlitePool, user_id: &str) -> sqlx::Result<Option<UserRow>> {
    sqlx::query_as::<_, UserRow>(SQL_FIND_BY_ID)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}
