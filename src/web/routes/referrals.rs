use axum::{extract::State, Extension, Json};
use serde::Deserialize;

use crate::error::AppError;
use crate::services::referral_service::{self, ClaimView, ReferralView};
use crate::state::AppState;
use crate::web::middleware::auth::AuthenticatedUser;

pub async fn referral_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
) -> Result<Json<ReferralView>, AppError> {
    let view = referral_service::load_or_create(&state.pool, &auth_user.id).await?;
    Ok(Json(view))
}

#[derive(Deserialize)]
pub struct ClaimBody {
    pub code: String,
}

pub async fn claim_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Json(body): Json<ClaimBody>,
) -> Result<Json<ClaimView>, AppError> {
    let view = referral_service::claim(&state.pool, &auth_user.id, &body.code).await?;
    Ok(Json(view))
}
