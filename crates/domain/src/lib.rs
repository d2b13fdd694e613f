mod calendar;
mod calendar_view;
pub mod date;
mod event;
mod expansion;
mod occurrence;
mod recurrence;
mod session;
mod shared;
mod timespan;
mod view;

pub use calendar::CalendarSettings;
pub use calendar_view::{CalendarView, CalendarViewAction};
pub use chrono::{NaiveDate, Weekday};
pub use chrono_tz::Tz;
pub use event::{CalendarEvent, EventParticipant, ParticipantStatus};
pub use expansion::{expand_event, expand_events, ExpansionLimits, DEFAULT_ITERATION_CAP};
pub use occurrence::{CalendarItem, EventOccurrence};
pub use recurrence::{
    EndCondition, EndType, Frequency, InvalidRecurrenceError, RecurrenceOptions, RecurrenceRule,
};
pub use session::UserSession;
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use shared::metadata::Metadata;
pub use timespan::{InvalidTimeSpanError, TimeSpan};
pub use view::{resolve_range, InvalidViewModeError, ViewMode, MONTH_VIEW_PADDING_DAYS};
