use std::sync::Arc;

use sqlx::SqlitePool;

use crate::data;
use crate::models::{Event, Reward};

/// Estado compartido de la aplicación: el pool de SQLite para el estado de
/// los voluntarios y los catálogos inmutables (eventos y recompensas).
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub events: Arc<Vec<Event>>,
    pub rewards: Arc<Vec<Reward>>,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            events: Arc::new(data::events::catalog()),
            rewards: Arc::new(data::rewards::catalog()),
        }
    }
}
