use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use cookie::Cookie;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::database::{current_user_repo, users_repo};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::middleware::auth::SESSION_COOKIE;

#[derive(Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

pub async fn login_handler(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<Response, AppError> {
    let Some(user) = users_repo::find_by_email(&state.pool, &body.email).await? else {
        return Err(AppError::Unauthorized);
    };

    // Chequeo de demostración: comparación directa, sin hashing.
    if user.password != body.password {
        return Err(AppError::Unauthorized);
    }

    current_user_repo::set_current_user(&state.pool, &user.user_id).await?;

    let mut session = Cookie::new(SESSION_COOKIE, user.user_id.clone());
    session.set_path("/");
    session.set_http_only(true);
    session.set_same_site(cookie::SameSite::Lax);

    info!("👤 Login: {}", user.email);

    let mut response =
        Json(json!({ "user_id": user.user_id, "name": user.name })).into_response();
    response
        .headers_mut()
        .append(header::SET_COOKIE, session.to_string().parse().unwrap());
    Ok(response)
}

pub async fn logout_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    current_user_repo::clear_current_user(&state.pool).await?;

    let mut session = Cookie::new(SESSION_COOKIE, "");
    session.set_path("/");
    session.set_http_only(true);
    session.set_same_site(cookie::SameSite::Lax);

    let mut response = Json(json!({ "status": "logged_out" })).into_response();
    response
        .headers_mut()
        .append(header::SET_COOKIE, session.to_string().parse().unwrap());
    Ok(response)
}
