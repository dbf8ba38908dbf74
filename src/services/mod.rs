pub mod calendar_service;
pub mod events_service;
pub mod profile_service;
pub mod referral_service;
pub mod registration_service;
pub mod reminders_service;
pub mod rewards_service;
pub mod share_service;

use chrono::Local;

/// Timestamp local "YYYY-MM-DDTHH:MM:SS", el mismo formato del catálogo.
pub(crate) fn now_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}
