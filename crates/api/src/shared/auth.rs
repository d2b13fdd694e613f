use crate::error::GageCalendarError;
use actix_web::{http::header, HttpRequest};
use gage_calendar_domain::{UserSession, ID};

/// Header carrying the id of the signed in user
pub const USER_ID_HEADER: &str = "gage-user-id";

/// Reads the session the request is made in. Both the bearer token and the
/// user id header are required, the token is forwarded to the calendar
/// backend which is the one validating it.
pub fn protect_route(http_req: &HttpRequest) -> Result<UserSession, GageCalendarError> {
    let access_token = http_req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            GageCalendarError::Unauthorized(
                "Missing bearer token in the `Authorization` header".into(),
            )
        })?;

    let user_id = http_req
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            GageCalendarError::Unauthorized(format!("Missing the `{}` header", USER_ID_HEADER))
        })?
        .parse::<ID>()
        .map_err(|e| {
            GageCalendarError::Unauthorized(format!(
                "Invalid `{}` header. Error message: {}",
                USER_ID_HEADER, e
            ))
        })?;

    Ok(UserSession::new(user_id, access_token))
}
