use gage_calendar_domain::{
    CalendarEvent, CalendarItem, EventParticipant, InvalidRecurrenceError, Metadata,
    RecurrenceOptions, RecurrenceRule, ID,
};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventDTO {
    #[serde(default)]
    pub id: ID,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub gage_id: Option<String>,
    #[serde(default)]
    pub organizer_id: Option<ID>,
    #[serde(default)]
    pub participants: Vec<EventParticipant>,
    pub start_ts: i64,
    pub end_ts: i64,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub recurrence: Option<RecurrenceOptions>,
    #[serde(default)]
    pub metadata: Metadata,
}

impl CalendarEventDTO {
    pub fn new(event: CalendarEvent) -> Self {
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            location: event.location,
            gage_id: event.gage_id,
            organizer_id: event.organizer_id,
            participants: event.participants,
            start_ts: event.start_ts,
            end_ts: event.end_ts,
            all_day: event.all_day,
            is_recurring: event.is_recurring,
            recurrence: event.recurrence.as_ref().map(RecurrenceOptions::from),
            metadata: event.metadata,
        }
    }
}

impl TryFrom<CalendarEventDTO> for CalendarEvent {
    type Error = InvalidRecurrenceError;

    fn try_from(dto: CalendarEventDTO) -> Result<Self, Self::Error> {
        let recurrence = match dto.recurrence {
            Some(options) => Some(RecurrenceRule::try_from(options)?),
            None => None,
        };
        Ok(Self {
            id: dto.id,
            title: dto.title,
            description: dto.description,
            location: dto.location,
            gage_id: dto.gage_id,
            organizer_id: dto.organizer_id,
            participants: dto.participants,
            start_ts: dto.start_ts,
            end_ts: dto.end_ts,
            all_day: dto.all_day,
            is_recurring: dto.is_recurring,
            recurrence,
            metadata: dto.metadata,
        })
    }
}

/// A flat entry the calendar renders. Occurrences carry the fields of the
/// event they were generated from with their own id and time span.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarItemDTO {
    pub id: String,
    pub original_event_id: ID,
    pub is_recurrence_instance: bool,
    pub occurrence_index: Option<usize>,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub gage_id: Option<String>,
    pub organizer_id: Option<ID>,
    pub participants: Vec<EventParticipant>,
    pub start_ts: i64,
    pub end_ts: i64,
    pub all_day: bool,
    pub is_recurring: bool,
    pub recurrence: Option<RecurrenceOptions>,
    pub metadata: Metadata,
}

impl CalendarItemDTO {
    pub fn new(item: CalendarItem) -> Self {
        let id = item.id();
        let original_event_id = item.original_event_id().clone();
        let is_recurrence_instance = item.is_recurrence_instance();
        let occurrence_index = item.occurrence_index();
        let start_ts = item.start_ts();
        let end_ts = item.end_ts();
        let event = match item {
            CalendarItem::Single(event) => event,
            CalendarItem::Occurrence(occurrence) => occurrence.event,
        };

        Self {
            id,
            original_event_id,
            is_recurrence_instance,
            occurrence_index,
            title: event.title,
            description: event.description,
            location: event.location,
            gage_id: event.gage_id,
            organizer_id: event.organizer_id,
            participants: event.participants,
            start_ts,
            end_ts,
            all_day: event.all_day,
            is_recurring: event.is_recurring,
            recurrence: event.recurrence.as_ref().map(RecurrenceOptions::from),
            metadata: event.metadata,
        }
    }
}
