use chrono_tz::Tz;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// Country code prepended to destination phone numbers that do not
    /// already carry an international prefix marker
    pub default_country_code: String,
    /// Operational timezone in which "today" and the next occurrence of a
    /// reminder's daily fire time are resolved. This makes the date range
    /// checks independent of wherever the service happens to be deployed.
    pub timezone: Tz,
}

impl Config {
    pub fn new() -> Self {
        let default_country_code =
            std::env::var("DEFAULT_COUNTRY_CODE").unwrap_or_else(|_| "+91".into());

        let default_timezone = "UTC";
        let timezone =
            std::env::var("REMINDERS_TIMEZONE").unwrap_or_else(|_| default_timezone.into());
        let timezone = match timezone.parse::<Tz>() {
            Ok(timezone) => timezone,
            Err(_) => {
                warn!(
                    "The given REMINDERS_TIMEZONE: {} is not a valid timezone, falling back to the default: {}.",
                    timezone, default_timezone
                );
                Tz::UTC
            }
        };

        Self {
            default_country_code,
            timezone,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
