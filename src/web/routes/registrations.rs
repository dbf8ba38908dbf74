use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::{json, Value};

use crate::database::registrations_repo;
use crate::error::AppError;
use crate::services::registration_service::{
    self, CompletionView, RegistrationRequest, RegistrationView,
};
use crate::state::AppState;
use crate::web::middleware::auth::AuthenticatedUser;

pub async fn register_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(event_id): Path<String>,
    State(state): State<AppState>,
    body: Option<Json<RegistrationRequest>>,
) -> Result<Json<RegistrationView>, AppError> {
    let request = body.map(|Json(b)| b).unwrap_or_default();
    let view =
        registration_service::register(&state.pool, &state.events, &auth_user.id, &event_id, &request)
            .await?;
    Ok(Json(view))
}

pub async fn cancel_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(event_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    registration_service::cancel(&state.pool, &auth_user.id, &event_id).await?;
    Ok(Json(json!({ "status": "cancelled", "event_id": event_id })))
}

pub async fn complete_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(event_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<CompletionView>, AppError> {
    let view =
        registration_service::complete(&state.pool, &state.events, &auth_user.id, &event_id).await?;
    Ok(Json(view))
}

pub async fn list_registrations_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let rows = registrations_repo::list_active_for_user(&state.pool, &auth_user.id).await?;

    let registrations: Vec<Value> = rows
        .into_iter()
        .map(|row| {
            let title = state
                .events
                .iter()
                .find(|e| e.id == row.event_id)
                .map(|e| e.title.clone())
                .unwrap_or_default();
            json!({
                "registration_id": row.registration_id,
                "event_id": row.event_id,
                "event_title": title,
                "created_at": row.created_at,
            })
        })
        .collect();

    Ok(Json(json!({ "registrations": registrations })))
}
