use crate::{calendar::CalendarSettings, date, timespan::TimeSpan};
use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Days added on both sides of a month so the partial weeks of the
/// neighbouring months shown in a month grid are covered
pub const MONTH_VIEW_PADDING_DAYS: i64 = 7;
pub const AGENDA_VIEW_DAYS: i64 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Month,
    Week,
    Day,
    Agenda,
}

#[derive(Error, Debug, PartialEq)]
#[error("Unknown calendar view: {0:?}")]
pub struct InvalidViewModeError(String);

impl FromStr for ViewMode {
    type Err = InvalidViewModeError;

    fn from_str(view: &str) -> Result<Self, Self::Err> {
        match view.to_lowercase().as_str() {
            "month" => Ok(Self::Month),
            "week" => Ok(Self::Week),
            "day" => Ok(Self::Day),
            "agenda" => Ok(Self::Agenda),
            _ => Err(InvalidViewModeError(view.to_string())),
        }
    }
}

impl Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let view = match self {
            Self::Month => "month",
            Self::Week => "week",
            Self::Day => "day",
            Self::Agenda => "agenda",
        };
        write!(f, "{}", view)
    }
}

/// The window a calendar view shows around `current`.
///
/// No view mode (an unrecognized one) means the plain month.
pub fn resolve_range(
    current: &DateTime<Tz>,
    view: Option<ViewMode>,
    calendar_settings: &CalendarSettings,
) -> Option<TimeSpan> {
    let (start, end) = match view {
        Some(ViewMode::Month) => (
            date::add_days(&date::start_of_month(current)?, -MONTH_VIEW_PADDING_DAYS)?,
            date::add_days(&date::end_of_month(current)?, MONTH_VIEW_PADDING_DAYS)?,
        ),
        Some(ViewMode::Week) => (
            date::start_of_week(current, calendar_settings.week_start)?,
            date::end_of_week(current, calendar_settings.week_start)?,
        ),
        Some(ViewMode::Day) => (date::start_of_day(current), date::end_of_day(current)),
        Some(ViewMode::Agenda) => (*current, date::add_days(current, AGENDA_VIEW_DAYS)?),
        None => (date::start_of_month(current)?, date::end_of_month(current)?),
    };
    Some(TimeSpan::from_datetimes(&start, &end))
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::prelude::*;
    use chrono_tz::{Europe::Oslo, UTC};

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> i64 {
        UTC.with_ymd_and_hms(y, m, d, h, min, 0)
            .unwrap()
            .timestamp_millis()
    }

    fn current() -> DateTime<Tz> {
        // Thursday
        UTC.with_ymd_and_hms(2024, 2, 15, 14, 30, 0).unwrap()
    }

    #[test]
    fn parses_view_modes() {
        assert_eq!("month".parse::<ViewMode>(), Ok(ViewMode::Month));
        assert_eq!("Week".parse::<ViewMode>(), Ok(ViewMode::Week));
        assert_eq!("day".parse::<ViewMode>(), Ok(ViewMode::Day));
        assert_eq!("agenda".parse::<ViewMode>(), Ok(ViewMode::Agenda));
        assert!("year".parse::<ViewMode>().is_err());
        assert_eq!(ViewMode::Agenda.to_string(), "agenda");
    }

    #[test]
    fn month_view_is_padded() {
        let range = resolve_range(&current(), Some(ViewMode::Month), &Default::default()).unwrap();
        assert_eq!(range.start(), utc(2024, 1, 25, 0, 0));
        assert_eq!(range.end(), utc(2024, 3, 8, 0, 0) - 1);
        assert!(range.start() <= utc(2024, 2, 1, 0, 0) - 7 * 24 * 60 * 60 * 1000);
        assert!(range.end() >= utc(2024, 2, 29, 0, 0) + 7 * 24 * 60 * 60 * 1000);
    }

    #[test]
    fn week_view_follows_week_start() {
        let sunday = resolve_range(&current(), Some(ViewMode::Week), &Default::default()).unwrap();
        assert_eq!(sunday.start(), utc(2024, 2, 11, 0, 0));
        assert_eq!(sunday.end(), utc(2024, 2, 18, 0, 0) - 1);

        let settings = CalendarSettings {
            week_start: 1,
            timezone: UTC,
        };
        let monday = resolve_range(&current(), Some(ViewMode::Week), &settings).unwrap();
        assert_eq!(monday.start(), utc(2024, 2, 12, 0, 0));
        assert_eq!(monday.end(), utc(2024, 2, 19, 0, 0) - 1);
    }

    #[test]
    fn day_and_agenda_views() {
        let day = resolve_range(&current(), Some(ViewMode::Day), &Default::default()).unwrap();
        assert_eq!(day.start(), utc(2024, 2, 15, 0, 0));
        assert_eq!(day.end(), utc(2024, 2, 16, 0, 0) - 1);

        let agenda = resolve_range(&current(), Some(ViewMode::Agenda), &Default::default()).unwrap();
        assert_eq!(agenda.start(), utc(2024, 2, 15, 14, 30));
        assert_eq!(agenda.end(), utc(2024, 3, 16, 14, 30));
    }

    #[test]
    fn unknown_view_is_plain_month() {
        let range = resolve_range(&current(), None, &Default::default()).unwrap();
        assert_eq!(range.start(), utc(2024, 2, 1, 0, 0));
        assert_eq!(range.end(), utc(2024, 3, 1, 0, 0) - 1);
    }

    #[test]
    fn resolves_in_calendar_timezone() {
        let current = Oslo.with_ymd_and_hms(2024, 2, 15, 0, 30, 0).unwrap();
        let settings = CalendarSettings {
            week_start: 0,
            timezone: Oslo,
        };
        let day = resolve_range(&current, Some(ViewMode::Day), &settings).unwrap();
        // Midnight in Oslo is 23:00 UTC the day before during winter
        assert_eq!(day.start(), utc(2024, 2, 14, 23, 0));
    }
}
