use contracts::system::auth::{SessionUser, SignInRequest, SignInResponse};
use gloo_net::http::Request;

use crate::shared::config;

/// Sign in with email and password (password grant).
pub async fn sign_in(email: String, password: String) -> Result<SignInResponse, String> {
    let request = SignInRequest { email, password };

    let response = Request::post(&config::auth_url("token?grant_type=password"))
        .header("apikey", &config::store().anon_key)
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Sign in failed: {}", response.status()));
    }

    response
        .json::<SignInResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Identity behind an access token; fails if the token is stale.
pub async fn get_user(access_token: &str) -> Result<SessionUser, String> {
    let response = Request::get(&config::auth_url("user"))
        .header("apikey", &config::store().anon_key)
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Get user failed: {}", response.status()));
    }

    response
        .json::<SessionUser>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Revoke the session server side. Best effort.
pub async fn sign_out(access_token: &str) -> Result<(), String> {
    let response = Request::post(&config::auth_url("logout"))
        .header("apikey", &config::store().anon_key)
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Sign out failed: {}", response.status()));
    }

    Ok(())
}
