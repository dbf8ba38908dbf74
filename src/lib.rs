pub mod data;
pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod web;

pub use error::AppError;
pub use state::AppState;
