pub mod auth;
pub mod events;
pub mod profile;
pub mod referrals;
pub mod registrations;
pub mod reminders;
pub mod rewards;
