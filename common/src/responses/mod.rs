//! Response payloads received from the REST API.

use serde::Deserialize;

use crate::model::user::User;

/// Body of a successful login or registration.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}
