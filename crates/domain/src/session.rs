use crate::shared::entity::ID;

/// The signed in user a request is made on behalf of.
///
/// Passed explicitly to everything that needs to know who is asking,
/// including the calls forwarded to the calendar backend.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSession {
    pub user_id: ID,
    pub access_token: String,
}

impl UserSession {
    pub fn new(user_id: ID, access_token: impl Into<String>) -> Self {
        Self {
            user_id,
            access_token: access_token.into(),
        }
    }
}
