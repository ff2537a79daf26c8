mod error;
mod fire;
mod triggers;

pub use error::ScheduleError;
pub use fire::{FireOutcome, SkipReason};
pub use triggers::ReminderScheduler;
