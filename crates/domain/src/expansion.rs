use chrono::Datelike;

use crate::{
    calendar::CalendarSettings,
    date,
    event::CalendarEvent,
    occurrence::{CalendarItem, EventOccurrence},
    recurrence::EndCondition,
    timespan::TimeSpan,
};

/// Steps of a cadence walked for a single event before giving up
pub const DEFAULT_ITERATION_CAP: usize = 1000;

/// Bounds of a single expansion.
///
/// `iteration_cap` guarantees termination of open ended rules: at most this
/// many cadence steps are walked per event, counted from the event start.
/// Rules ending after a count walk exactly that many steps. `render_budget`
/// limits how many occurrences of one event are emitted into the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionLimits {
    pub iteration_cap: usize,
    pub render_budget: Option<usize>,
}

impl Default for ExpansionLimits {
    fn default() -> Self {
        Self {
            iteration_cap: DEFAULT_ITERATION_CAP,
            render_budget: None,
        }
    }
}

/// Materializes the occurrences of `event` starting inside `timespan`.
///
/// An event without recurrence comes back unchanged as its only item,
/// whether or not it falls inside the window.
pub fn expand_event(
    event: &CalendarEvent,
    timespan: &TimeSpan,
    calendar_settings: &CalendarSettings,
    limits: &ExpansionLimits,
) -> Vec<CalendarItem> {
    let rule = match event.recurrence_rule() {
        Some(rule) => rule,
        None => return vec![CalendarItem::Single(event.clone())],
    };

    let tz = calendar_settings.timezone;
    let anchor = match date::from_millis(event.start_ts, &tz) {
        Some(anchor) => anchor,
        None => return Vec::new(),
    };

    let max_ts = match rule.end {
        EndCondition::OnDate(end_date) => timespan.end().min(end_date),
        _ => timespan.end(),
    };
    let max_iterations = match rule.end {
        EndCondition::After(count) => count as usize,
        _ => limits.iteration_cap,
    };
    let filter_days = rule.filters_days_of_week();

    let mut occurrences = Vec::new();
    let mut current = anchor;
    let mut iteration = 0;
    while current.timestamp_millis() <= max_ts && iteration < max_iterations {
        let start_ts = current.timestamp_millis();
        if timespan.contains(start_ts) {
            let on_listed_day = !filter_days || rule.days_of_week.contains(&current.weekday());
            if on_listed_day {
                occurrences.push(CalendarItem::Occurrence(EventOccurrence::new(
                    event, iteration, start_ts,
                )));
                if limits
                    .render_budget
                    .map_or(false, |budget| occurrences.len() >= budget)
                {
                    break;
                }
            }
        }

        iteration += 1;
        current = match rule.next_after(&current, &anchor) {
            Some(next) => next,
            None => break,
        };
    }

    occurrences
}

/// Expands every event of a calendar into one flat list.
///
/// Order is stable: occurrences of a recurring event take its place in the
/// list, in generation order. Nothing is deduplicated.
pub fn expand_events(
    events: &[CalendarEvent],
    timespan: &TimeSpan,
    calendar_settings: &CalendarSettings,
    limits: &ExpansionLimits,
) -> Vec<CalendarItem> {
    events
        .iter()
        .flat_map(|event| expand_event(event, timespan, calendar_settings, limits))
        .collect()
}
