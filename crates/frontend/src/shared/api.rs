//! HTTP client adapter for the console.
//!
//! Every backend call in the application goes through the helpers here: they
//! attach the bearer token, decode JSON, and turn non-2xx responses into an
//! [`ApiError`]. A 401 carrying a revoked-session message clears the stored
//! token and sends the browser to the login page before the error is returned,
//! so callers must check [`ApiError::should_display`] before surfacing it.

use serde::de::DeserializeOwned;
use serde::Serialize;

use gloo_net::http::{Request, RequestBuilder, Response};

use crate::system::auth::storage;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Transport failure; the request never produced a response.
    Network(String),
    /// The response body could not be decoded as the expected JSON shape.
    Decode(String),
    /// Non-2xx response with the backend's `error` message (or a fallback).
    Status { status: u16, message: String },
    /// 401 with a revoked session. The adapter has already cleared the token
    /// and started the redirect to the login page.
    ForcedLogout,
}

impl ApiError {
    pub fn message(&self) -> String {
        match self {
            ApiError::Network(msg) => format!("Network error: {}", msg),
            ApiError::Decode(msg) => format!("Unexpected response: {}", msg),
            ApiError::Status { message, .. } => message.clone(),
            ApiError::ForcedLogout => "Session revoked".to_string(),
        }
    }

    /// False only for the forced-logout case: the redirect is already in
    /// flight and a toast would just flash over it.
    pub fn should_display(&self) -> bool {
        !matches!(self, ApiError::ForcedLogout)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

/// Get the base URL for API requests.
///
/// Constructs the API base URL from the current window location, using port
/// 3000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

fn auth_header() -> Option<String> {
    storage::get_access_token().map(|token| format!("Bearer {}", token))
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match auth_header() {
        Some(header) => builder.header("Authorization", &header),
        None => builder,
    }
}

/// Classify a non-2xx response. The message is taken from the `error` field of
/// the JSON body when present, with a generic fallback otherwise.
pub fn classify_response(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"].as_str().map(|s| s.to_string()))
        .unwrap_or_else(|| format!("Request failed with status {}", status));

    if status == 401 && message.to_lowercase().contains("revoked") {
        return ApiError::ForcedLogout;
    }
    ApiError::Status { status, message }
}

fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let err = classify_response(status, &body);
    if let ApiError::ForcedLogout = err {
        log::warn!("session revoked, redirecting to login");
        storage::clear_token();
        redirect_to_login();
    }
    Err(err)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = with_auth(Request::get(&format!("{}{}", api_base(), path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(check(response).await?).await
}

pub async fn post_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = with_auth(Request::post(&format!("{}{}", api_base(), path)))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(check(response).await?).await
}

pub async fn put_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = with_auth(Request::put(&format!("{}{}", api_base(), path)))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(check(response).await?).await
}

/// POST without a body, for action endpoints (deactivate, cancel, release)
/// whose response body the console does not need.
pub async fn post_action(path: &str) -> Result<(), ApiError> {
    let response = with_auth(Request::post(&format!("{}{}", api_base(), path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_extracts_error_field() {
        let err = classify_response(422, r#"{"error":"Code already exists"}"#);
        assert_eq!(
            err,
            ApiError::Status {
                status: 422,
                message: "Code already exists".to_string()
            }
        );
    }

    #[test]
    fn test_classify_fallback_message() {
        let err = classify_response(500, "<html>oops</html>");
        assert_eq!(
            err,
            ApiError::Status {
                status: 500,
                message: "Request failed with status 500".to_string()
            }
        );
        assert!(err.should_display());
    }

    #[test]
    fn test_revoked_session_is_forced_logout() {
        let err = classify_response(401, r#"{"error":"Session revoked"}"#);
        assert_eq!(err, ApiError::ForcedLogout);
        assert!(!err.should_display());
    }

    #[test]
    fn test_plain_401_is_a_normal_error() {
        let err = classify_response(401, r#"{"error":"Invalid credentials"}"#);
        assert!(matches!(err, ApiError::Status { status: 401, .. }));
        assert!(err.should_display());
    }
}
