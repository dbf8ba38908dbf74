use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::{json, Value};

use crate::error::AppError;
use crate::services::reminders_service::{self, ReminderView};
use crate::state::AppState;
use crate::web::middleware::auth::AuthenticatedUser;

pub async fn set_reminder_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(event_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ReminderView>, AppError> {
    let view =
        reminders_service::set_reminder(&state.pool, &state.events, &auth_user.id, &event_id)
            .await?;
    Ok(Json(view))
}

pub async fn remove_reminder_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(event_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    reminders_service::remove_reminder(&state.pool, &auth_user.id, &event_id).await?;
    Ok(Json(json!({ "status": "removed", "event_id": event_id })))
}

pub async fn list_reminders_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
) -> Result<Json<Vec<ReminderView>>, AppError> {
    let views =
        reminders_service::list_reminders(&state.pool, &state.events, &auth_user.id).await?;
    Ok(Json(views))
}
