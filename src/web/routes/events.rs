use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::registrations_repo;
use crate::error::AppError;
use crate::models::EventStatus;
use crate::services::events_service::{self, EventsPageData, EventsQuery};
use crate::services::share_service::{self, ShareLinks};
use crate::services::{calendar_service, registration_service};
use crate::state::AppState;
use crate::web::middleware::auth::AuthenticatedUser;

pub async fn list_events_handler(
    State(state): State<AppState>,
    Query(query): Query<EventsQuery>,
) -> Json<EventsPageData> {
    Json(events_service::build_events_page(&state.events, &query))
}

pub async fn event_detail_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(event_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let event = registration_service::find_event(&state.events, &event_id)?;

    let taken = registrations_repo::count_active_for_event(&state.pool, &event.id).await?;
    let is_registered = registrations_repo::find_active(&state.pool, &auth_user.id, &event.id)
        .await?
        .is_some();

    Ok(Json(json!({
        "event": event,
        "spots_left": (event.capacity - taken).max(0),
        "is_registered": is_registered,
    })))
}

pub async fn event_share_handler(
    Path(event_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ShareLinks>, AppError> {
    let event = registration_service::find_event(&state.events, &event_id)?;
    let base_url = std::env::var("PUBLIC_BASE_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());
    Ok(Json(share_service::build_share_links(event, &base_url)))
}

#[derive(Debug, Deserialize, Default)]
pub struct CalendarQuery {
    pub month: Option<String>, // "YYYY-MM", por defecto el mes actual
}

pub async fn calendar_handler(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Json<Value> {
    let month = query
        .month
        .unwrap_or_else(|| Local::now().format("%Y-%m").to_string());

    let visible: Vec<_> = state
        .events
        .iter()
        .filter(|e| e.status != EventStatus::Draft)
        .cloned()
        .collect();
    let days = calendar_service::month_view(&visible, &month);

    Json(json!({ "month": month, "days": days }))
}
