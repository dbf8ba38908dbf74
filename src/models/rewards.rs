use serde::Serialize;

/// Recompensa canjeable del catálogo de aliados.
#[derive(Debug, Clone, Serialize)]
pub struct Reward {
    pub id: String,
    pub title: String,
    pub ally_name: String,
    pub cost_points: i64,
    pub description: String,
}
