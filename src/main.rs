use axum::{
    middleware,
    response::Redirect,
    routing::{get, post},
    Router,
};
use dotenvy::dotenv;
use http::header::{HeaderValue, CACHE_CONTROL};
use sqlx::sqlite::SqlitePoolOptions;
use std::env;
use std::net::SocketAddr;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use ecoplaya::database::schema;
use ecoplaya::state::AppState;
use ecoplaya::web::middleware::auth as auth_middleware;
use ecoplaya::web::routes::{auth, events, profile, referrals, registrations, reminders, rewards};

#[tokio::main]
async fn main() {
    // Carga el archivo .env
    dotenv().ok();

    // 1. Arranca el logging
    tracing_subscriber::fmt::init();

    // 2. Conecta con la base de datos (archivo local por defecto)
    let db_url = env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://ecoplaya.db?mode=rwc".to_string());
    println!("Conectando a la base de datos: {}", db_url);

    let pool = SqlitePoolOptions::new()
        .connect(&db_url)
        .await
        .expect("No se pudo conectar a la base de datos");

    schema::init(&pool)
        .await
        .expect("No se pudo inicializar el esquema");

    let state = AppState::new(pool);

    // 3. Rutas protegidas bajo una sola capa de middleware
    let protected_routes = Router::new()
        .route("/events", get(events::list_events_handler))
        .route("/events/calendar", get(events::calendar_handler))
        .route("/events/:event_id", get(events::event_detail_handler))
        .route("/events/:event_id/share", get(events::event_share_handler))
        .route(
            "/events/:event_id/register",
            post(registrations::register_handler),
        )
        .route(
            "/events/:event_id/cancel",
            post(registrations::cancel_handler),
        )
        .route(
            "/events/:event_id/complete",
            post(registrations::complete_handler),
        )
        .route(
            "/events/:event_id/reminder",
            post(reminders::set_reminder_handler).delete(reminders::remove_reminder_handler),
        )
        .route(
            "/registrations",
            get(registrations::list_registrations_handler),
        )
        .route("/reminders", get(reminders::list_reminders_handler))
        .route("/profile", get(profile::profile_handler))
        .route("/rewards", get(rewards::list_rewards_handler))
        .route(
            "/rewards/history",
            get(rewards::redemption_history_handler),
        )
        .route("/rewards/:reward_id/redeem", post(rewards::redeem_handler))
        .route("/referrals", get(referrals::referral_handler))
        .route("/referrals/claim", post(referrals::claim_handler))
        .route("/logout", post(auth::logout_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::require_auth,
        ));

    // 4. Arma la aplicación completa
    let app = Router::new()
        // Rutas públicas
        .route("/", get(|| async { Redirect::to("/events") }))
        .route("/login", post(auth::login_handler))
        // Rutas protegidas
        .merge(protected_routes)
        // Capas
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        // Estado
        .with_state(state);

    // 5. Arranca el servidor (con puerto de respaldo)
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("No se pudo interpretar host/puerto");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!(
                "⚠️  No se pudo escuchar en {}: {}. Probando {}:{}",
                addr,
                e,
                host,
                port + 1
            );
            let fallback: SocketAddr = format!("{}:{}", host, port + 1)
                .parse()
                .expect("No se pudo interpretar el puerto de respaldo");
            tokio::net::TcpListener::bind(fallback)
                .await
                .expect("No se pudo escuchar en el puerto de respaldo")
        }
    };

    let bound_addr = listener.local_addr().unwrap();
    println!("🌊 EcoPlaya corriendo en http://{}", bound_addr);
    println!("📍 POST a http://{}/login para iniciar sesión", bound_addr);

    axum::serve(listener, app).await.unwrap();
}
