use sqlx::SqlitePool;

use crate::models::RegistrationRow;

// El chequeo de cupo y el INSERT van en una sola sentencia: dos inscripciones
// simultáneas no pueden sobrevender el evento.
const SQL_INSERT_REGISTRATION: &str = r#"
INSERT INTO registrations (
  registration_id,
  user_id,
  event_id,
  status,
  created_at
)
SELECT ?, ?, ?, 'join', ?
WHERE (
  SELECT COUNT(*) FROM registrations
  WHERE event_id = ? AND status = 'join'
) < ?
"#;

const SQL_FIND_ACTIVE: &str = r#"
SELECT registration_id, user_id, event_id, status, created_at
FROM registrations
WHERE user_id = ?
  AND event_id = ?
  AND status = 'join'
"#;

const SQL_FIND_BLOCKING: &str = r#"
SELECT registration_id, user_id, event_id, status, created_at
FROM registrations
WHERE user_id = ?
  AND event_id = ?
  AND status IN ('join', 'completed')
ORDER BY created_at DESC
LIMIT 1
"#;

const SQL_COUNT_ACTIVE_FOR_EVENT: &str = r#"
SELECT COUNT(*)
FROM registrations
WHERE event_id = ?
  AND status = 'join'
"#;

const SQL_LIST_ACTIVE_FOR_USER: &str = r#"
SELECT registration_id, user_id, event_id, status, created_at
FROM registrations
WHERE user_id = ?
  AND status = 'join'
ORDER BY created_at ASC
"#;

const SQL_UPDATE_STATUS: &str = r#"
UPDATE registrations
SET status = ?
WHERE registration_id = ?
  AND status = 'join'
"#;

pub struct NewRegistration<'a> {
    pub registration_id: &'a str,
    pub user_id: &'a str,
    pub event_id: &'a str,
    pub created_at: &'a str,
}

/// Inserta la inscripción solo si quedan cupos; devuelve 0 filas si el evento
/// ya está lleno.
pub async fn insert_registration(
    pool: &SqlitePool,
    reg: NewRegistration<'_>,
    capacity: i64,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_REGISTRATION)
        .bind(reg.registration_id)
        .bind(reg.user_id)
        .bind(reg.event_id)
        .bind(reg.created_at)
        .bind(reg.event_id)
        .bind(capacity)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

pub async fn find_active(
    pool: &SqlitePool,
    user_id: &str,
    event_id: &str,
) -> sqlx::Result<Option<RegistrationRow>> {
    sqlx::query_as::<_, RegistrationRow>(SQL_FIND_ACTIVE)
        .bind(user_id)
        .bind(event_id)
        .fetch_optional(pool)
        .await
}

/// Como `find_active`, pero también devuelve inscripciones ya completadas:
/// un evento completado no se vuelve a tomar.
pub async fn find_blocking(
    pool: &SqlitePool,
    user_id: &str,
    event_id: &str,
) -> sqlx::Result<Option<RegistrationRow>> {
    sqlx::query_as::<_, RegistrationRow>(SQL_FIND_BLOCKING)
        .bind(user_id)
        .bind(event_id)
        .fetch_optional(pool)
        .await
}

pub async fn count_active_for_event(pool: &SqlitePool, event_id: &str) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>(SQL_COUNT_ACTIVE_FOR_EVENT)
        .bind(event_id)
        .fetch_one(pool)
        .await
}

pub async fn list_active_for_user(
    pool: &SqlitePool,
    user_id: &str,
) -> sqlx::Result<Vec<RegistrationRow>> {
    sqlx::query_as::<_, RegistrationRow>(SQL_LIST_ACTIVE_FOR_USER)
        .bind(user_id)
        .fetch_all(pool)
        .await
}

/// Cambia una inscripción activa a `cancelled` o `completed`.
pub async fn update_status(
    pool: &SqlitePool,
    registration_id: &str,
    status: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_UPDATE_STATUS)
        .bind(status)
        .bind(registration_id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database;

    fn reg<'a>(id: &'a str, user: &'a str) -> NewRegistration<'a> {
        NewRegistration {
            registration_id: id,
            user_id: user,
            event_id: "ev-mini",
            created_at: "2026-09-01T10:00:00",
        }
    }

    #[tokio::test]
    async fn guarded_insert_stops_at_capacity() {
        let pool = database::test_pool().await;

        assert_eq!(insert_registration(&pool, reg("r1", "usr-a"), 2).await.unwrap(), 1);
        assert_eq!(insert_registration(&pool, reg("r2", "usr-b"), 2).await.unwrap(), 1);
        // Lleno: la misma sentencia rechaza la tercera.
        assert_eq!(insert_registration(&pool, reg("r3", "usr-c"), 2).await.unwrap(), 0);

        assert_eq!(count_active_for_event(&pool, "ev-mini").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn cancelled_rows_do_not_count_against_capacity() {
        let pool = database::test_pool().await;

        insert_registration(&pool, reg("r1", "usr-a"), 1).await.unwrap();
        update_status(&pool, "r1", "cancelled").await.unwrap();

        assert_eq!(insert_registration(&pool, reg("r2", "usr-b"), 1).await.unwrap(), 1);
    }
}
