pub mod events;
pub mod profiles;
pub mod redemptions;
pub mod referrals;
pub mod registrations;
pub mod reminders;
pub mod rewards;
pub mod users;

pub use events::{
    Ally, BeachLocation, Benefits, Category, Event, EventStatus, Organizer, Requirements,
};
pub use profiles::{BadgeRow, ProfileRow};
pub use redemptions::RedemptionRow;
pub use referrals::ReferralRow;
pub use registrations::RegistrationRow;
pub use reminders::ReminderRow;
pub use rewards::Reward;
pub use users::{CurrentUserRow, UserRow};
