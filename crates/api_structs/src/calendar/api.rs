use crate::dtos::CalendarItemDTO;
use gage_calendar_domain::{CalendarItem, TimeSpan, ViewMode};
use serde::{Deserialize, Serialize};

pub mod get_calendar {
    use super::*;

    #[derive(Serialize, Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        /// `YYYY-MM-DD`, today when missing
        pub date: Option<String>,
        pub view: Option<String>,
    }

    #[derive(Deserialize, Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub range: TimeSpan,
        pub view: ViewMode,
        pub previous_date: String,
        pub next_date: String,
        pub items: Vec<CalendarItemDTO>,
    }

    impl APIResponse {
        pub fn new(
            range: TimeSpan,
            view: ViewMode,
            previous_date: String,
            next_date: String,
            items: Vec<CalendarItem>,
        ) -> Self {
            Self {
                range,
                view,
                previous_date,
                next_date,
                items: items.into_iter().map(CalendarItemDTO::new).collect(),
            }
        }
    }
}
