use sqlx::SqlitePool;

use crate::models::CurrentUserRow;

pub const SQL_LOAD_CURRENT_USER_ID: &str = r#"
SELECT user_id
FROM current_user
LIMIT 1
"#;

const SQL_SET_CURRENT_USER: &str = r#"
INSERT OR REPLACE INTO current_user (user_id) VALUES (?)
"#;

const SQL_CLEAR_CURRENT_USER: &str = r#"
DELETE FROM current_user
"#;

pub async fn load_current_user_id(pool: &SqlitePool) -> sqlx::Result<Option<String>> {
    let row = sqlx::query_as::<_, CurrentUserRow>(SQL_LOAD_CURRENT_USER_ID)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|r| r.user_id))
}

pub async fn set_current_user(pool: &SqlitePool, user_id: &str) -> sqlx::Result<()> {
    sqlx::query(SQL_CLEAR_CURRENT_USER).execute(pool).await?;
    sqlx::query(SQL_SET_CURRENT_USER)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn clear_current_user(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::query(SQL_CLEAR_CURRENT_USER).execute(pool).await?;
    Ok(())
}
