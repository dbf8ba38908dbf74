use sqlx::SqlitePool;

use crate::models::{BadgeRow, ProfileRow};

const SQL_ENSURE_PROFILE: &str = r#"
INSERT OR IGNORE INTO profiles (user_id, points, volunteer_hours, cleanups_attended)
VALUES (?, 0, 0, 0)
"#;

const SQL_LOAD_PROFILE: &str = r#"
SELECT user_id, points, volunteer_hours, cleanups_attended
FROM profiles
WHERE user_id = ?
"#;

const SQL_CREDIT: &str = r#"
UPDATE profiles
SET points = points + ?,
    volunteer_hours = volunteer_hours + ?,
    cleanups_attended = cleanups_attended + ?
WHERE user_id = ?
"#;

// El saldo nunca baja de cero: el descuento es condicional.
const SQL_DEDUCT_POINTS: &str = r#"
UPDATE profiles
SET points = points - ?
WHERE user_id = ?
  AND points >= ?
"#;

const SQL_LIST_BADGES: &str = r#"
SELECT badge_id, awarded_at
FROM badges
WHERE user_id = ?
ORDER BY awarded_at ASC
"#;

const SQL_INSERT_BADGE: &str = r#"
INSERT OR IGNORE INTO badges (user_id, badge_id, awarded_at)
VALUES (?, ?, ?)
"#;

pub async fn ensure_profile(pool: &SqlitePool, user_id: &str) -> sqlx::Result<()> {
    sqlx::query(SQL_ENSURE_PROFILE)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn load_profile(pool: &SqlitePool, user_id: &str) -> sqlx::Result<Option<ProfileRow>> {
    sqlx::query_as::<_, ProfileRow>(SQL_LOAD_PROFILE)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn credit(
    pool: &SqlitePool,
    user_id: &str,
    points: i64,
    volunteer_hours: i64,
    cleanups: i64,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_CREDIT)
        .bind(points)
        .bind(volunteer_hours)
        .bind(cleanups)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

/// Devuelve 0 filas afectadas cuando el saldo no alcanza.
pub async fn deduct_points(pool: &SqlitePool, user_id: &str, points: i64) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DEDUCT_POINTS)
        .bind(points)
        .bind(user_id)
        .bind(points)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

pub async fn list_badges(pool: &SqlitePool, user_id: &str) -> sqlx::Result<Vec<BadgeRow>> {
    sqlx::query_as::<_, BadgeRow>(SQL_LIST_BADGES)
        .bind(user_id)
        .fetch_all(pool)
        .await
}

/// Idempotente: volver a otorgar una insignia existente no hace nada.
pub async fn insert_badge(
    pool: &SqlitePool,
    user_id: &str,
    badge_id: &str,
    awarded_at: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_BADGE)
        .bind(user_id)
        .bind(badge_id)
        .bind(awarded_at)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
