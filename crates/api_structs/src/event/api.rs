use crate::dtos::{CalendarEventDTO, CalendarItemDTO};
use gage_calendar_domain::{CalendarEvent, CalendarItem, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CalendarItemsResponse {
    pub items: Vec<CalendarItemDTO>,
}

impl CalendarItemsResponse {
    pub fn new(items: Vec<CalendarItem>) -> Self {
        Self {
            items: items.into_iter().map(CalendarItemDTO::new).collect(),
        }
    }
}

pub mod expand_events {
    use super::*;

    #[derive(Serialize, Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub events: Vec<CalendarEventDTO>,
        pub start_ts: i64,
        pub end_ts: i64,
    }

    pub type APIResponse = CalendarItemsResponse;
}

pub mod get_event_occurrences {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub event_id: ID,
    }

    #[derive(Serialize, Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub start_ts: i64,
        pub end_ts: i64,
    }

    #[derive(Deserialize, Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub event: CalendarEventDTO,
        pub items: Vec<CalendarItemDTO>,
    }

    impl APIResponse {
        pub fn new(event: CalendarEvent, items: Vec<CalendarItem>) -> Self {
            Self {
                event: CalendarEventDTO::new(event),
                items: items.into_iter().map(CalendarItemDTO::new).collect(),
            }
        }
    }
}
