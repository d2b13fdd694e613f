mod event;
mod shared;

pub use event::{IEventRepo, InMemoryEventRepo, RemoteEventRepo};
use gage_calendar_domain::CalendarEvent;
use std::sync::Arc;

#[derive(Clone)]
pub struct Repos {
    pub events: Arc<dyn IEventRepo>,
}

impl Repos {
    pub fn create_remote(base_url: &str) -> Self {
        Self {
            events: Arc::new(RemoteEventRepo::new(base_url.to_string())),
        }
    }

    pub fn create_inmemory() -> Self {
        Self::create_inmemory_with(&[])
    }

    /// In memory repositories seeded with `events`
    pub fn create_inmemory_with(events: &[CalendarEvent]) -> Self {
        let repo = InMemoryEventRepo::new();
        for event in events {
            repo.insert(event);
        }
        Self {
            events: Arc::new(repo),
        }
    }
}
