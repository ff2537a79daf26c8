use chrono::{NaiveTime, Timelike};
use serde::{de::Visitor, Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// A wall-clock time with minute precision, e.g. `08:05`.
///
/// This is the daily fire time of a `Reminder`. A `TimeOfDay` is valid by
/// construction: [`TimeOfDay::new`] and parsing both reject out of range
/// values, so a malformed fire time can never reach the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidTimeOfDay {
    #[error("Time of day: {0} is malformed")]
    Malformed(String),
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Result<Self, InvalidTimeOfDay> {
        if hour > 23 || minute > 59 {
            return Err(InvalidTimeOfDay::Malformed(format!("{}:{}", hour, minute)));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn to_naive(self) -> NaiveTime {
        NaiveTime::from_hms(self.hour, self.minute, 0)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(t: NaiveTime) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
        }
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = InvalidTimeOfDay;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split(':').collect::<Vec<_>>();
        if parts.len() != 2 {
            return Err(InvalidTimeOfDay::Malformed(s.to_string()));
        }
        match (parts[0].parse(), parts[1].parse()) {
            (Ok(hour), Ok(minute)) => {
                Self::new(hour, minute).map_err(|_| InvalidTimeOfDay::Malformed(s.to_string()))
            }
            _ => Err(InvalidTimeOfDay::Malformed(s.to_string())),
        }
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct TimeOfDayVisitor;

        impl<'de> Visitor<'de> for TimeOfDayVisitor {
            type Value = TimeOfDay;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("A time of day on the format HH:MM")
            }

            fn visit_str<E>(self, value: &str) -> Result<TimeOfDay, E>
            where
                E: serde::de::Error,
            {
                value
                    .parse::<TimeOfDay>()
                    .map_err(|_| E::custom(format!("Malformed time of day: {}", value)))
            }
        }

        deserializer.deserialize_str(TimeOfDayVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_accepts_valid_times() {
        let valid_times = vec![(0, 0), (8, 5), (12, 30), (23, 59)];

        for (hour, minute) in valid_times {
            assert!(TimeOfDay::new(hour, minute).is_ok());
        }
    }

    #[test]
    fn it_rejects_invalid_times() {
        let invalid_times = vec![(24, 0), (0, 60), (25, 61), (100, 5)];

        for (hour, minute) in invalid_times {
            assert!(TimeOfDay::new(hour, minute).is_err());
        }
    }

    #[test]
    fn it_parses_and_formats_zero_padded() {
        let t: TimeOfDay = "8:5".parse().unwrap();
        assert_eq!(t.to_string(), "08:05");
        assert_eq!(t, TimeOfDay::new(8, 5).unwrap());

        let t: TimeOfDay = "23:59".parse().unwrap();
        assert_eq!(t.to_string(), "23:59");
    }

    #[test]
    fn it_rejects_malformed_strings() {
        let invalid = vec!["", "8", "8:", ":30", "8:30:00", "24:00", "ten:30"];

        for s in &invalid {
            assert!(s.parse::<TimeOfDay>().is_err());
        }
    }
}
