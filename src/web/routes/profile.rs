use axum::{extract::State, Extension, Json};

use crate::error::AppError;
use crate::services::profile_service::{self, ProfileView};
use crate::state::AppState;
use crate::web::middleware::auth::AuthenticatedUser;

pub async fn profile_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
) -> Result<Json<ProfileView>, AppError> {
    let view = profile_service::load_profile_view(&state.pool, &auth_user.id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(view))
}
