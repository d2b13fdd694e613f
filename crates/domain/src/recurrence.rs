use crate::date;
use chrono::prelude::*;
use chrono_tz::Tz;
use serde::{de::Visitor, Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// Frequencies the calendar does not know about step by days
    pub fn parse_lenient(freq: &str) -> Self {
        match freq.trim().to_lowercase().as_str() {
            "weekly" => Self::Weekly,
            "monthly" => Self::Monthly,
            "yearly" => Self::Yearly,
            _ => Self::Daily,
        }
    }
}

impl Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let freq = match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        };
        write!(f, "{}", freq)
    }
}

impl<'de> Deserialize<'de> for Frequency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct FrequencyVisitor;

        impl<'de> Visitor<'de> for FrequencyVisitor {
            type Value = Frequency;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("A string representation of a recurrence frequency")
            }

            fn visit_str<E>(self, value: &str) -> Result<Frequency, E>
            where
                E: serde::de::Error,
            {
                Ok(Frequency::parse_lenient(value))
            }
        }

        deserializer.deserialize_str(FrequencyVisitor)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum EndType {
    #[serde(rename = "never")]
    Never,
    #[serde(rename = "after")]
    After,
    #[serde(rename = "on-date")]
    OnDate,
}

impl Default for EndType {
    fn default() -> Self {
        Self::Never
    }
}

fn default_interval() -> i64 {
    1
}

/// Recurrence as the calendar backend stores it. Nothing is validated here,
/// convert it into a `RecurrenceRule` before expanding.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceOptions {
    pub frequency: Frequency,
    #[serde(default = "default_interval")]
    pub interval: i64,
    /// 0 = Sunday .. 6 = Saturday
    #[serde(default)]
    pub days_of_week: Vec<i64>,
    #[serde(default)]
    pub day_of_month: Option<i64>,
    /// 0 = January .. 11 = December
    #[serde(default)]
    pub month: Option<i64>,
    #[serde(default)]
    pub end_type: EndType,
    #[serde(default)]
    pub occurrences: Option<i64>,
    /// Timestamp in millis
    #[serde(default)]
    pub end_date: Option<i64>,
}

impl Default for RecurrenceOptions {
    fn default() -> Self {
        Self {
            frequency: Frequency::Daily,
            interval: 1,
            days_of_week: Vec::new(),
            day_of_month: None,
            month: None,
            end_type: EndType::Never,
            occurrences: None,
            end_date: None,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidRecurrenceError {
    #[error("Recurrence interval must be at least 1, got: {0}")]
    Interval(i64),
    #[error("Day of week must be between 0 (Sunday) and 6 (Saturday), got: {0}")]
    DayOfWeek(i64),
    #[error("Day of month must be between 1 and 31, got: {0}")]
    DayOfMonth(i64),
    #[error("Month must be between 0 (January) and 11 (December), got: {0}")]
    Month(i64),
    #[error("A recurrence ending after a number of occurrences needs a positive `occurrences`, got: {0:?}")]
    Occurrences(Option<i64>),
    #[error("A recurrence ending on a date needs an `endDate`")]
    MissingEndDate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndCondition {
    Never,
    /// Stop after this many steps of the cadence
    After(u32),
    /// No occurrence starts after this timestamp (millis)
    OnDate(i64),
}

/// Validated recurrence of a `CalendarEvent`.
///
/// The fields are public so callers can describe any cadence, even a
/// degenerate one; expansion never loops more than its iteration cap.
#[derive(Clone, Debug, PartialEq)]
pub struct RecurrenceRule {
    pub frequency: Frequency,
    pub interval: u32,
    /// Only used by weekly rules
    pub days_of_week: Vec<Weekday>,
    /// Falls back to the day of month the event starts on
    pub day_of_month: Option<u32>,
    /// January -> 1. Falls back to the month the event starts in
    pub month: Option<u32>,
    pub end: EndCondition,
}

impl Default for RecurrenceRule {
    fn default() -> Self {
        Self {
            frequency: Frequency::Daily,
            interval: 1,
            days_of_week: Vec::new(),
            day_of_month: None,
            month: None,
            end: EndCondition::Never,
        }
    }
}

fn weekday_from_sunday(day: i64) -> Option<Weekday> {
    match day {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

impl TryFrom<RecurrenceOptions> for RecurrenceRule {
    type Error = InvalidRecurrenceError;

    fn try_from(options: RecurrenceOptions) -> Result<Self, Self::Error> {
        let interval = u32::try_from(options.interval)
            .ok()
            .filter(|interval| *interval >= 1)
            .ok_or(InvalidRecurrenceError::Interval(options.interval))?;

        let mut days_of_week = Vec::with_capacity(options.days_of_week.len());
        for day in &options.days_of_week {
            let weekday = weekday_from_sunday(*day).ok_or(InvalidRecurrenceError::DayOfWeek(*day))?;
            if !days_of_week.contains(&weekday) {
                days_of_week.push(weekday);
            }
        }
        days_of_week.sort_by_key(|d: &Weekday| d.num_days_from_sunday());

        let day_of_month = match options.day_of_month {
            Some(day) if (1..=31).contains(&day) => Some(day as u32),
            Some(day) => return Err(InvalidRecurrenceError::DayOfMonth(day)),
            None => None,
        };
        let month = match options.month {
            Some(month) if (0..=11).contains(&month) => Some(month as u32 + 1),
            Some(month) => return Err(InvalidRecurrenceError::Month(month)),
            None => None,
        };

        let end = match options.end_type {
            EndType::Never => EndCondition::Never,
            EndType::After => options
                .occurrences
                .and_then(|count| u32::try_from(count).ok())
                .filter(|count| *count >= 1)
                .map(EndCondition::After)
                .ok_or(InvalidRecurrenceError::Occurrences(options.occurrences))?,
            EndType::OnDate => options
                .end_date
                .map(EndCondition::OnDate)
                .ok_or(InvalidRecurrenceError::MissingEndDate)?,
        };

        Ok(Self {
            frequency: options.frequency,
            interval,
            days_of_week,
            day_of_month,
            month,
            end,
        })
    }
}

impl From<&RecurrenceRule> for RecurrenceOptions {
    fn from(rule: &RecurrenceRule) -> Self {
        let (end_type, occurrences, end_date) = match rule.end {
            EndCondition::Never => (EndType::Never, None, None),
            EndCondition::After(count) => (EndType::After, Some(i64::from(count)), None),
            EndCondition::OnDate(ts) => (EndType::OnDate, None, Some(ts)),
        };
        Self {
            frequency: rule.frequency,
            interval: i64::from(rule.interval),
            days_of_week: rule
                .days_of_week
                .iter()
                .map(|d| i64::from(d.num_days_from_sunday()))
                .collect(),
            day_of_month: rule.day_of_month.map(i64::from),
            month: rule.month.map(|m| i64::from(m) - 1),
            end_type,
            occurrences,
            end_date,
        }
    }
}

impl RecurrenceRule {
    pub fn weekly_on(interval: u32, days_of_week: Vec<Weekday>) -> Self {
        Self {
            frequency: Frequency::Weekly,
            interval,
            days_of_week,
            ..Default::default()
        }
    }

    /// Weekly rules with days of week only emit on those days
    pub fn filters_days_of_week(&self) -> bool {
        self.frequency == Frequency::Weekly && !self.days_of_week.is_empty()
    }

    /// The candidate date following `current` in this cadence.
    ///
    /// `anchor` is the start of the recurring event and supplies the day of
    /// month and month when the rule does not state them. `None` means the
    /// next date is not representable.
    pub fn next_after(&self, current: &DateTime<Tz>, anchor: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        let interval = i64::from(self.interval);
        match self.frequency {
            Frequency::Daily => date::add_days(current, interval),
            Frequency::Weekly if self.days_of_week.is_empty() => date::add_weeks(current, interval),
            Frequency::Weekly => date::next_weekday_in_set(current, &self.days_of_week, interval),
            Frequency::Monthly => {
                let day = self.day_of_month.unwrap_or_else(|| anchor.day());
                date::add_months_clamped(current, interval, day)
            }
            Frequency::Yearly => {
                let day = self.day_of_month.unwrap_or_else(|| anchor.day());
                let month = self.month.unwrap_or_else(|| anchor.month());
                date::add_years_clamped(current, interval, month, day)
            }
        }
    }
}
