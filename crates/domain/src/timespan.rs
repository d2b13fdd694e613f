use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::error::Error;

/// Inclusive window `[start_ts, end_ts]` in millis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSpan {
    start_ts: i64,
    end_ts: i64,
}

impl TimeSpan {
    pub fn new(start_ts: i64, end_ts: i64) -> Self {
        Self { start_ts, end_ts }
    }

    pub fn create(start_ts: i64, end_ts: i64) -> Result<Self, InvalidTimeSpanError> {
        if end_ts < start_ts {
            Err(InvalidTimeSpanError(start_ts, end_ts))
        } else {
            Ok(Self { start_ts, end_ts })
        }
    }

    pub fn from_datetimes(start: &DateTime<Tz>, end: &DateTime<Tz>) -> Self {
        Self::new(start.timestamp_millis(), end.timestamp_millis())
    }

    pub fn contains(&self, timestamp: i64) -> bool {
        self.start_ts <= timestamp && timestamp <= self.end_ts
    }

    pub fn duration(&self) -> i64 {
        self.end_ts - self.start_ts
    }

    pub fn greater_than(&self, duration: i64) -> bool {
        self.duration() > duration
    }

    pub fn start(&self) -> i64 {
        self.start_ts
    }

    pub fn end(&self) -> i64 {
        self.end_ts
    }
}

#[derive(Debug, PartialEq)]
pub struct InvalidTimeSpanError(i64, i64);

impl Error for InvalidTimeSpanError {}

impl std::fmt::Display for InvalidTimeSpanError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Provided timespan start_ts: {} and end_ts: {} is invalid. It should not end before it starts.",
            self.0, self.1
        )
    }
}
