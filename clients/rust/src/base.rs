use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};

pub(crate) struct BaseClient {
    address: String,
    session: Option<Session>,
}

struct Session {
    user_id: String,
    access_token: String,
}

#[derive(Debug, PartialEq)]
pub enum APIErrorVariant {
    Network,
    MalformedResponse,
    Unauthorized,
    BadClientData,
    NotFound,
    UnexpectedStatusCode(StatusCode),
}

#[derive(Debug)]
pub struct APIError {
    pub variant: APIErrorVariant,
    pub message: String,
}

pub type APIResponse<T> = Result<T, APIError>;

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            address,
            session: None,
        }
    }

    pub fn set_session(&mut self, user_id: String, access_token: String) {
        self.session = Some(Session {
            user_id,
            access_token,
        });
    }

    fn get_client(&self, method: Method, path: String) -> RequestBuilder {
        let client = Client::new();
        let url = format!("{}/{}", self.address, path);
        let builder = client.request(method, &url);

        match &self.session {
            Some(session) => builder
                .bearer_auth(&session.access_token)
                .header("gage-user-id", session.user_id.clone()),
            None => builder,
        }
    }

    async fn handle_api_response<T: for<'de> Deserialize<'de>>(
        &self,
        res: Response,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let status = res.status();
        if status != expected_status_code {
            let variant = match status {
                StatusCode::UNAUTHORIZED => APIErrorVariant::Unauthorized,
                StatusCode::BAD_REQUEST => APIErrorVariant::BadClientData,
                StatusCode::NOT_FOUND => APIErrorVariant::NotFound,
                _ => APIErrorVariant::UnexpectedStatusCode(status),
            };
            let message = res.text().await.unwrap_or_default();
            return Err(APIError { variant, message });
        }

        res.json::<T>().await.map_err(|e| APIError {
            variant: APIErrorVariant::MalformedResponse,
            message: e.to_string(),
        })
    }

    async fn send<T: for<'de> Deserialize<'de>>(
        &self,
        builder: RequestBuilder,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = builder.send().await.map_err(|e| APIError {
            variant: APIErrorVariant::Network,
            message: e.to_string(),
        })?;
        self.handle_api_response(res, expected_status_code).await
    }

    pub async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.send(self.get_client(Method::GET, path), expected_status_code)
            .await
    }

    pub async fn post<T: for<'de> Deserialize<'de>, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.send(
            self.get_client(Method::POST, path).json(&body),
            expected_status_code,
        )
        .await
    }
}
