use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Calendar backend could not be reached: {0}")]
    Network(#[source] reqwest::Error),
    #[error("Calendar backend responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Calendar backend did not find the requested resource")]
    NotFound,
    #[error("Calendar backend rejected the request: {0}")]
    Rejected(String),
    #[error("Unexpected response from calendar backend: {0}")]
    UnexpectedResponse(String),
    #[error("Calendar backend event {id} is invalid: {reason}")]
    InvalidEvent { id: String, reason: String },
}

/// The shapes the calendar backend wraps a payload in. Endpoints are not
/// consistent about it, so every response goes through this one type.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum BackendEnvelope<T> {
    Failure { error: String },
    Nested { data: DataEnvelope<T> },
    Data { data: T },
    Result { result: T },
    Bare(T),
}

#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    data: T,
}

impl<T> BackendEnvelope<T> {
    pub fn into_result(self) -> Result<T, BackendError> {
        match self {
            Self::Failure { error } => Err(BackendError::Rejected(error)),
            Self::Nested { data } => Ok(data.data),
            Self::Data { data } => Ok(data),
            Self::Result { result } => Ok(result),
            Self::Bare(payload) => Ok(payload),
        }
    }
}

/// Unwraps the payload of a backend response body
pub fn normalize<T: DeserializeOwned>(body: &str) -> Result<T, BackendError> {
    serde_json::from_str::<BackendEnvelope<T>>(body)
        .map_err(|e| BackendError::UnexpectedResponse(e.to_string()))?
        .into_result()
}
