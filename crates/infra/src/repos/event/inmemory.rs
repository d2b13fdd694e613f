use super::IEventRepo;
use crate::repos::shared::inmemory_repo::*;
use gage_calendar_domain::{CalendarEvent, TimeSpan, UserSession, ID};

pub struct InMemoryEventRepo {
    calendar_events: std::sync::Mutex<Vec<CalendarEvent>>,
}

impl InMemoryEventRepo {
    pub fn new() -> Self {
        Self {
            calendar_events: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn insert(&self, e: &CalendarEvent) {
        insert(e, &self.calendar_events);
    }
}

impl Default for InMemoryEventRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IEventRepo for InMemoryEventRepo {
    async fn find(
        &self,
        event_id: &ID,
        session: &UserSession,
    ) -> anyhow::Result<Option<CalendarEvent>> {
        let event = find(event_id, &self.calendar_events)
            .filter(|event| event.involves(&session.user_id));
        Ok(event)
    }

    async fn find_by_user(
        &self,
        session: &UserSession,
        timespan: &TimeSpan,
    ) -> anyhow::Result<Vec<CalendarEvent>> {
        let res = find_by(&self.calendar_events, |event| {
            event.involves(&session.user_id) && event.may_occur_within(timespan)
        });
        Ok(res)
    }
}
