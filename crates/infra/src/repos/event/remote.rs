use super::IEventRepo;
use crate::services::calendar_backend::CalendarBackendApi;
use gage_calendar_domain::{CalendarEvent, TimeSpan, UserSession, ID};
use std::convert::TryFrom;
use tracing::warn;

/// Events read from the calendar backend with the access token of the user
pub struct RemoteEventRepo {
    api: CalendarBackendApi,
}

impl RemoteEventRepo {
    pub fn new(base_url: String) -> Self {
        Self {
            api: CalendarBackendApi::new(base_url),
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for RemoteEventRepo {
    async fn find(
        &self,
        event_id: &ID,
        session: &UserSession,
    ) -> anyhow::Result<Option<CalendarEvent>> {
        match self.api.get_event(session, event_id).await? {
            Some(record) => Ok(Some(CalendarEvent::try_from(record)?)),
            None => Ok(None),
        }
    }

    async fn find_by_user(
        &self,
        session: &UserSession,
        timespan: &TimeSpan,
    ) -> anyhow::Result<Vec<CalendarEvent>> {
        let records = self.api.list_events(session, timespan).await?;
        let events = records
            .into_iter()
            .filter_map(|record| match CalendarEvent::try_from(record) {
                Ok(event) => Some(event),
                Err(e) => {
                    // One broken record should not hide the rest of the calendar
                    warn!("Skipping calendar backend event: {}", e);
                    None
                }
            })
            .filter(|event| event.may_occur_within(timespan))
            .collect();
        Ok(events)
    }
}
