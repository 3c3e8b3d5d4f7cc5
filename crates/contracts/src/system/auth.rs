use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Password-grant response of the auth provider. Extra wire fields
/// (expiry, refresh token) are ignored; the dashboard only keeps the
/// access token and the identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInResponse {
    pub access_token: String,
    pub user: SessionUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: Option<String>,
    pub last_sign_in_at: Option<chrono::DateTime<chrono::Utc>>,
}
