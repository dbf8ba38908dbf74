use chrono::{Duration, NaiveDateTime};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::database::reminders_repo;
use crate::error::AppError;
use crate::models::Event;
use crate::services::{now_timestamp, registration_service};

#[derive(Debug, Serialize)]
pub struct ReminderView {
    pub event_id: String,
    pub event_title: String,
    pub remind_at: String,
}

// El recordatorio cae un día antes del inicio del evento.
fn day_before(starts_at: &str) -> Option<String> {
    let dt = NaiveDateTime::parse_from_str(starts_at, "%Y-%m-%dT%H:%M:%S").ok()?;
    Some((dt - Duration::days(1)).format("%Y-%m-%dT%H:%M:%S").to_string())
}

pub async fn set_reminder(
    pool: &SqlitePool,
    events: &[Event],
    user_id: &str,
    event_id: &str,
) -> Result<ReminderView, AppError> {
    let event = registration_service::find_event(events, event_id)?;
    let remind_at = day_before(&event.starts_at).unwrap_or_else(|| event.starts_at.clone());

    reminders_repo::upsert_reminder(pool, user_id, &event.id, &remind_at, &now_timestamp()).await?;

    Ok(ReminderView {
        event_id: event.id.clone(),
        event_title: event.title.clone(),
        remind_at,
    })
}

pub async fn list_reminders(
    pool: &SqlitePool,
    events: &[Event],
    user_id: &str,
) -> Result<Vec<ReminderView>, AppError> {
    let rows = reminders_repo::list_for_user(pool, user_id).await?;
    Ok(rows
        .into_iter()
        .map(|row| {
            let title = events
                .iter()
                .find(|e| e.id == row.event_id)
                .map(|e| e.title.clone())
                .unwrap_or_default();
            ReminderView {
                event_id: row.event_id,
                event_title: title,
                remind_at: row.remind_at,
            }
        })
        .collect())
}

pub async fn remove_reminder(
    pool: &SqlitePool,
    user_id: &str,
    event_id: &str,
) -> Result<(), AppError> {
    let deleted = reminders_repo::delete_reminder(pool, user_id, event_id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound);
    }
    Ok(())
}
