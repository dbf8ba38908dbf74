use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::database::current_user_repo;
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "session_user";

#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub id: String,
}

pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    // Cookie de sesión de la maqueta: lleva el user_id directamente.
    let user_id = request
        .headers()
        .get(header::COOKIE)
        .and_then(|hv| hv.to_str().ok())
        .and_then(|cookies| {
            cookies
                .split("; ")
                .find_map(|c| c.strip_prefix("session_user="))
                .map(|v| v.to_string())
        })
        .filter(|v| !v.is_empty());

    if let Some(user_id) = user_id {
        request.extensions_mut().insert(AuthenticatedUser { id: user_id });
        return next.run(request).await;
    }

    // Fallback para uso local sin cookie: la tabla current_user.
    if let Ok(Some(user_id)) = current_user_repo::load_current_user_id(&state.pool).await {
        request.extensions_mut().insert(AuthenticatedUser { id: user_id });
        return next.run(request).await;
    }

    (
        axum::http::StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "Inicia sesión para continuar" })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{self, current_user_repo};
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::{middleware, Extension, Router};
    use sqlx::SqlitePool;
    use tower::ServiceExt; // for oneshot

    async fn whoami(Extension(user): Extension<AuthenticatedUser>) -> String {
        user.id
    }

    async fn test_app() -> (Router, SqlitePool) {
        let pool = database::test_pool().await;
        let state = AppState::new(pool.clone());
        let app = Router::new()
            .route("/whoami", get(whoami))
            .layer(middleware::from_fn_with_state(state.clone(), require_auth))
            .with_state(state);
        (app, pool)
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("cuerpo de la respuesta");
        String::from_utf8(bytes.to_vec()).expect("utf-8")
    }

    #[tokio::test]
    async fn session_cookie_injects_the_user() {
        let (app, _pool) = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/whoami")
                    .header(header::COOKIE, "session_user=usr-demo")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "usr-demo");
    }

    #[tokio::test]
    async fn cookie_is_found_among_other_cookies() {
        let (app, _pool) = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/whoami")
                    .header(header::COOKIE, "theme=dark; session_user=usr-demo; lang=es")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "usr-demo");
    }

    #[tokio::test]
    async fn current_user_table_is_the_offline_fallback() {
        let (app, pool) = test_app().await;
        current_user_repo::set_current_user(&pool, "usr-demo")
            .await
            .unwrap();

        let response = app
            .oneshot(Request::builder().uri("/whoami").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "usr-demo");
    }

    #[tokio::test]
    async fn without_session_the_request_is_rejected() {
        let (app, _pool) = test_app().await;

        let response = app
            .oneshot(Request::builder().uri("/whoami").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_string(response).await;
        assert!(body.contains("Inicia sesión"));
    }

    #[tokio::test]
    async fn empty_cookie_value_falls_through_to_rejection() {
        let (app, _pool) = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/whoami")
                    .header(header::COOKIE, "session_user=")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
