use chrono::NaiveDate;
use medivault_reminders_domain::ID;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    #[error("Reminder: {reminder_id} has an empty date range: end date {end_date} is before start date {start_date}")]
    EmptyDateRange {
        reminder_id: ID,
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
}
