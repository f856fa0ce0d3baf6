use contracts::system::auth::{LoginRequest, LoginResponse, OperatorInfo};

use crate::shared::api::{self, ApiError};

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    api::post_json("/api/system/auth/login", &request).await
}

/// Revoke the current session server-side
pub async fn logout() -> Result<(), ApiError> {
    api::post_action("/api/system/auth/logout").await
}

/// Get the signed-in operator
pub async fn me() -> Result<OperatorInfo, ApiError> {
    api::get_json("/api/system/auth/me").await
}
