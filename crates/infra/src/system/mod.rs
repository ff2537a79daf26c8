use chrono::{NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

// Mocking out time so that it is possible to run tests that depend on time.
pub trait ISys: Send + Sync {
    /// The current timestamp in millis
    fn get_timestamp_millis(&self) -> i64;

    /// The current calendar date in the given operational timezone.
    /// Reminder eligibility windows are evaluated against this date.
    fn today(&self, timezone: &Tz) -> NaiveDate {
        timezone
            .timestamp_millis(self.get_timestamp_millis())
            .date()
            .naive_local()
    }
}

/// System that gets the real time and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
