use crate::{
    calendar::CalendarSettings,
    date,
    timespan::TimeSpan,
    view::{resolve_range, ViewMode, AGENDA_VIEW_DAYS},
};
use chrono::{prelude::*, Days, Months};

/// What a calendar currently shows: a date and how it is laid out around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarView {
    date: NaiveDate,
    mode: ViewMode,
}

/// Navigation gestures on a calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarViewAction {
    Next,
    Previous,
    /// Jump to the given date, which is today for the caller
    Today(NaiveDate),
    GoTo(NaiveDate),
    SetMode(ViewMode),
}

impl CalendarView {
    pub fn new(date: NaiveDate, mode: ViewMode) -> Self {
        Self { date, mode }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn reduce(self, action: CalendarViewAction) -> Self {
        match action {
            CalendarViewAction::Next => Self {
                date: self.step(true),
                ..self
            },
            CalendarViewAction::Previous => Self {
                date: self.step(false),
                ..self
            },
            CalendarViewAction::Today(date) | CalendarViewAction::GoTo(date) => {
                Self { date, ..self }
            }
            CalendarViewAction::SetMode(mode) => Self { mode, ..self },
        }
    }

    /// Date shown after navigating one page forward or backward. Stays put
    /// when that date is not representable.
    fn step(&self, forward: bool) -> NaiveDate {
        let days = match self.mode {
            ViewMode::Month => {
                let months = Months::new(1);
                let moved = if forward {
                    self.date.checked_add_months(months)
                } else {
                    self.date.checked_sub_months(months)
                };
                return moved.unwrap_or(self.date);
            }
            ViewMode::Week => 7,
            ViewMode::Day => 1,
            ViewMode::Agenda => AGENDA_VIEW_DAYS.unsigned_abs(),
        };
        let moved = if forward {
            self.date.checked_add_days(Days::new(days))
        } else {
            self.date.checked_sub_days(Days::new(days))
        };
        moved.unwrap_or(self.date)
    }

    pub fn next_date(&self) -> NaiveDate {
        self.step(true)
    }

    pub fn previous_date(&self) -> NaiveDate {
        self.step(false)
    }

    /// Window of occurrences this view needs, from the start of its date in
    /// the calendar time zone
    pub fn range(&self, calendar_settings: &CalendarSettings) -> Option<TimeSpan> {
        let current = date::localize(
            &calendar_settings.timezone,
            self.date.and_time(NaiveTime::MIN),
        );
        resolve_range(&current, Some(self.mode), calendar_settings)
    }
}
