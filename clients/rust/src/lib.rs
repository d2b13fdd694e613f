mod base;
mod calendar;
mod event;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use calendar::CalendarClient;
pub use calendar::GetCalendarInput;
use event::CalendarEventClient;
pub use event::{ExpandEventsInput, GetEventOccurrencesInput};
pub use gage_calendar_api_structs::dtos::*;
pub use gage_calendar_domain::{
    EndType, Frequency, Metadata, ParticipantStatus, RecurrenceOptions, TimeSpan, ViewMode, ID,
};
use status::StatusClient;
use std::sync::Arc;

// Domain
pub use gage_calendar_api_structs::dtos::CalendarEventDTO as CalendarEvent;
pub use gage_calendar_api_structs::dtos::CalendarItemDTO as CalendarItem;

/// Gage Calendar SDK
///
/// The SDK contains methods for interacting with the Gage Calendar server
/// API.
#[derive(Clone)]
pub struct GageCalendarSDK {
    pub calendar: CalendarClient,
    pub event: CalendarEventClient,
    pub status: StatusClient,
}

impl GageCalendarSDK {
    /// Client without a signed in user, only usable for the public routes
    pub fn new(address: String) -> Self {
        Self::create(BaseClient::new(address))
    }

    /// Client acting on behalf of the given user
    pub fn with_session<T: Into<String>>(address: String, user_id: &ID, access_token: T) -> Self {
        let mut base = BaseClient::new(address);
        base.set_session(user_id.to_string(), access_token.into());
        Self::create(base)
    }

    fn create(base: BaseClient) -> Self {
        let base = Arc::new(base);
        let calendar = CalendarClient::new(base.clone());
        let event = CalendarEventClient::new(base.clone());
        let status = StatusClient::new(base);

        Self {
            calendar,
            event,
            status,
        }
    }
}
