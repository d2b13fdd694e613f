use crate::{APIResponse, BaseClient, CalendarEvent, ID};
use gage_calendar_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct CalendarEventClient {
    base: Arc<BaseClient>,
}

pub struct ExpandEventsInput {
    pub events: Vec<CalendarEvent>,
    pub start_ts: i64,
    pub end_ts: i64,
}

pub struct GetEventOccurrencesInput {
    pub event_id: ID,
    pub start_ts: i64,
    pub end_ts: i64,
}

impl CalendarEventClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn expand(&self, input: ExpandEventsInput) -> APIResponse<expand_events::APIResponse> {
        let body = expand_events::RequestBody {
            events: input.events,
            start_ts: input.start_ts,
            end_ts: input.end_ts,
        };
        self.base
            .post(body, "events/expand".into(), StatusCode::OK)
            .await
    }

    pub async fn get_occurrences(
        &self,
        input: GetEventOccurrencesInput,
    ) -> APIResponse<get_event_occurrences::APIResponse> {
        self.base
            .get(
                format!(
                    "events/{}/occurrences?startTs={}&endTs={}",
                    input.event_id, input.start_ts, input.end_ts
                ),
                StatusCode::OK,
            )
            .await
    }
}
