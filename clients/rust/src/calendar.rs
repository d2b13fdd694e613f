use crate::{APIResponse, BaseClient};
use gage_calendar_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct CalendarClient {
    base: Arc<BaseClient>,
}

pub struct GetCalendarInput {
    /// `YYYY-MM-DD`, today when missing
    pub date: Option<String>,
    pub view: Option<String>,
}

impl CalendarClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get(&self, input: GetCalendarInput) -> APIResponse<get_calendar::APIResponse> {
        let mut query = Vec::new();
        if let Some(date) = input.date {
            query.push(format!("date={}", date));
        }
        if let Some(view) = input.view {
            query.push(format!("view={}", view));
        }
        let path = if query.is_empty() {
            "calendar".to_string()
        } else {
            format!("calendar?{}", query.join("&"))
        };
        self.base.get(path, StatusCode::OK).await
    }
}
