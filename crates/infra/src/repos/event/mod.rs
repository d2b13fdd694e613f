mod inmemory;
mod remote;

use gage_calendar_domain::{CalendarEvent, TimeSpan, UserSession, ID};
pub use inmemory::InMemoryEventRepo;
pub use remote::RemoteEventRepo;

/// Where the calendar events of a user are read from
#[async_trait::async_trait]
pub trait IEventRepo: Send + Sync {
    /// The event with the given id, if the user can see it
    async fn find(&self, event_id: &ID, session: &UserSession)
        -> anyhow::Result<Option<CalendarEvent>>;
    /// Events of the user with any occurrence possibly inside `timespan`
    async fn find_by_user(
        &self,
        session: &UserSession,
        timespan: &TimeSpan,
    ) -> anyhow::Result<Vec<CalendarEvent>>;
}
