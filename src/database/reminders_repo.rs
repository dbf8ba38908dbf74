use sqlx::SqlitePool;

use crate::models::ReminderRow;

const SQL_UPSERT_REMINDER: &str = r#"
INSERT OR REPLACE INTO reminders (user_id, event_id, remind_at, created_at)
VALUES (?, ?, ?, ?)
"#;

const SQL_LIST_FOR_USER: &str = r#"
SELECT user_id, event_id, remind_at, created_at
FROM reminders
WHERE user_id = ?
ORDER BY remind_at ASC
"#;

const SQL_DELETE_REMINDER: &str = r#"
DELETE FROM reminders
WHERE user_id = ?
  AND event_id = ?
"#;

pub async fn upsert_reminder(
    pool: &SqlitePool,
    user_id: &str,
    event_id: &str,
    remind_at: &str,
    created_at: &str,
) -> sqlx::Result<()> {
    sqlx::query(SQL_UPSERT_REMINDER)
        .bind(user_id)
        .bind(event_id)
        .bind(remind_at)
        .bind(created_at)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn list_for_user(pool: &SqlitePool, user_id: &str) -> sqlx::Result<Vec<ReminderRow>> {
    sqlx::query_as::<_, ReminderRow>(SQL_LIST_FOR_USER)
        .bind(user_id)
        .fetch_all(pool)
        .await
}

pub async fn delete_reminder(pool: &SqlitePool, user_id: &str, event_id: &str) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_REMINDER)
        .bind(user_id)
        .bind(event_id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
