use crate::{
    event::CalendarEvent,
    shared::entity::{Entity, ID},
};

/// One dated instance materialized from a recurring `CalendarEvent`.
/// Never persisted, it only lives for one expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct EventOccurrence {
    /// `<parentId>-occurrence-<occurrence_index>`
    pub id: String,
    /// The stored event actions (edit, delete, accept, decline) go to
    pub original_event_id: ID,
    pub start_ts: i64,
    pub end_ts: i64,
    /// Step of the cadence this occurrence was generated at, counted from the
    /// start of the recurring event. Steps filtered out by the weekly day
    /// check still count, so indices of emitted occurrences can have gaps.
    pub occurrence_index: usize,
    /// The recurring event this occurrence was generated from
    pub event: CalendarEvent,
}

impl EventOccurrence {
    pub fn new(event: &CalendarEvent, occurrence_index: usize, start_ts: i64) -> Self {
        Self {
            id: Self::occurrence_id(event.id(), occurrence_index),
            original_event_id: event.id.clone(),
            start_ts,
            end_ts: start_ts + event.duration(),
            occurrence_index,
            event: event.clone(),
        }
    }

    pub fn occurrence_id(event_id: &ID, occurrence_index: usize) -> String {
        format!("{}-occurrence-{}", event_id, occurrence_index)
    }
}

/// Renderable entry of a calendar: either a plain event passed through as is,
/// or an occurrence of a recurring one.
#[derive(Debug, Clone, PartialEq)]
pub enum CalendarItem {
    Single(CalendarEvent),
    Occurrence(EventOccurrence),
}

impl CalendarItem {
    pub fn id(&self) -> String {
        match self {
            Self::Single(event) => event.id.to_string(),
            Self::Occurrence(occurrence) => occurrence.id.clone(),
        }
    }

    /// Resolves a clicked entry back to the stored event
    pub fn original_event_id(&self) -> &ID {
        match self {
            Self::Single(event) => &event.id,
            Self::Occurrence(occurrence) => &occurrence.original_event_id,
        }
    }

    pub fn start_ts(&self) -> i64 {
        match self {
            Self::Single(event) => event.start_ts,
            Self::Occurrence(occurrence) => occurrence.start_ts,
        }
    }

    pub fn end_ts(&self) -> i64 {
        match self {
            Self::Single(event) => event.end_ts,
            Self::Occurrence(occurrence) => occurrence.end_ts,
        }
    }

    pub fn event(&self) -> &CalendarEvent {
        match self {
            Self::Single(event) => event,
            Self::Occurrence(occurrence) => &occurrence.event,
        }
    }

    pub fn is_recurrence_instance(&self) -> bool {
        matches!(self, Self::Occurrence(_))
    }

    pub fn occurrence_index(&self) -> Option<usize> {
        match self {
            Self::Single(_) => None,
            Self::Occurrence(occurrence) => Some(occurrence.occurrence_index),
        }
    }
}
