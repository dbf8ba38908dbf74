pub mod events;
pub mod rewards;
