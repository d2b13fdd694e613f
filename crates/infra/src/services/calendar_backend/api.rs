use super::{normalize, records_from_values, BackendError, BackendEventRecord};
use gage_calendar_domain::{TimeSpan, UserSession, ID};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::error;

/// Read access to the events the calendar backend stores, on behalf of the
/// signed in user
pub struct CalendarBackendApi {
    client: Client,
    base_url: String,
}

impl CalendarBackendApi {
    pub fn new(base_url: String) -> Self {
        let client = Client::new();

        Self { client, base_url }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: String,
        query: &[(&str, String)],
        session: &UserSession,
    ) -> Result<T, BackendError> {
        let res = self
            .client
            .get(&format!("{}/{}", self.base_url, path))
            .bearer_auth(&session.access_token)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                error!(
                    "[Network Error] Calendar backend GET {} error. Error message: {:?}",
                    path, e
                );
                BackendError::Network(e)
            })?;

        let status = res.status();
        let body = res.text().await.map_err(BackendError::Network)?;
        if status == StatusCode::NOT_FOUND {
            return Err(BackendError::NotFound);
        }
        if !status.is_success() {
            error!(
                "[Unexpected Response] Calendar backend GET {} responded with {}. Body: {}",
                path, status, body
            );
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        normalize(&body).map_err(|e| {
            error!(
                "[Unexpected Response] Calendar backend GET {} error. Error message: {:?}",
                path, e
            );
            e
        })
    }

    pub async fn list_events(
        &self,
        session: &UserSession,
        timespan: &TimeSpan,
    ) -> Result<Vec<BackendEventRecord>, BackendError> {
        let query = [
            ("userId", session.user_id.to_string()),
            ("startTs", timespan.start().to_string()),
            ("endTs", timespan.end().to_string()),
        ];
        let values: Vec<serde_json::Value> = self.get("events".into(), &query, session).await?;
        Ok(records_from_values(values))
    }

    pub async fn get_event(
        &self,
        session: &UserSession,
        event_id: &ID,
    ) -> Result<Option<BackendEventRecord>, BackendError> {
        match self.get(format!("events/{}", event_id), &[], session).await {
            Ok(record) => Ok(Some(record)),
            Err(BackendError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
