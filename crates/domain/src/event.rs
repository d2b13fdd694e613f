use crate::{
    calendar::CalendarSettings,
    expansion::{expand_event, ExpansionLimits},
    occurrence::CalendarItem,
    recurrence::{EndCondition, RecurrenceRule},
    shared::{
        entity::{Entity, ID},
        metadata::Metadata,
    },
    timespan::TimeSpan,
};
use serde::{Deserialize, Serialize};

/// An event stored by the calendar backend, e.g. a scheduled calibration of
/// a gage or a lab meeting. A recurring event is the template its
/// occurrences are materialized from.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub id: ID,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    /// The gage a calibration event is scheduled for
    pub gage_id: Option<String>,
    pub organizer_id: Option<ID>,
    pub participants: Vec<EventParticipant>,
    pub start_ts: i64,
    pub end_ts: i64,
    pub all_day: bool,
    pub is_recurring: bool,
    pub recurrence: Option<RecurrenceRule>,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantStatus {
    Pending,
    Accepted,
    Declined,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventParticipant {
    pub user_id: ID,
    pub status: ParticipantStatus,
}

impl Entity for CalendarEvent {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl CalendarEvent {
    pub fn new(title: impl Into<String>, start_ts: i64, end_ts: i64) -> Self {
        Self {
            id: Default::default(),
            title: title.into(),
            description: None,
            location: None,
            gage_id: None,
            organizer_id: None,
            participants: Vec::new(),
            start_ts,
            end_ts,
            all_day: false,
            is_recurring: false,
            recurrence: None,
            metadata: Default::default(),
        }
    }

    pub fn duration(&self) -> i64 {
        self.end_ts - self.start_ts
    }

    pub fn set_recurrence(&mut self, recurrence: RecurrenceRule) {
        self.is_recurring = true;
        self.recurrence = Some(recurrence);
    }

    /// The rule to expand with. An event flagged as recurring without a
    /// rule, or carrying a rule without the flag, is a single occurrence.
    pub fn recurrence_rule(&self) -> Option<&RecurrenceRule> {
        if self.is_recurring {
            self.recurrence.as_ref()
        } else {
            None
        }
    }

    /// Whether the user organizes or is invited to this event
    pub fn involves(&self, user_id: &ID) -> bool {
        self.organizer_id.as_ref() == Some(user_id)
            || self.participants.iter().any(|p| p.user_id == *user_id)
    }

    pub fn participant_status(&self, user_id: &ID) -> Option<ParticipantStatus> {
        self.participants
            .iter()
            .find(|p| p.user_id == *user_id)
            .map(|p| p.status)
    }

    pub fn overlaps(&self, timespan: &TimeSpan) -> bool {
        self.start_ts <= timespan.end() && self.end_ts >= timespan.start()
    }

    /// Whether any occurrence of this event could start or run inside
    /// `timespan`. Recurring events are kept from their start onwards until
    /// their end date, a count bound is left to the expansion.
    pub fn may_occur_within(&self, timespan: &TimeSpan) -> bool {
        match self.recurrence_rule() {
            Some(rule) => {
                let ended = match rule.end {
                    EndCondition::OnDate(end_date) => end_date < timespan.start(),
                    _ => false,
                };
                self.start_ts <= timespan.end() && !ended
            }
            None => self.overlaps(timespan),
        }
    }

    pub fn expand(
        &self,
        timespan: &TimeSpan,
        calendar_settings: &CalendarSettings,
        limits: &ExpansionLimits,
    ) -> Vec<CalendarItem> {
        expand_event(self, timespan, calendar_settings, limits)
    }
}
