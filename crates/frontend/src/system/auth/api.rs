use contracts::system::auth::{LoginRequest, LoginResponse, MessageResponse};

use crate::shared::api_client::{post_json, ApiError};

/// Starts a cookie session; the cookie itself is set by the response
pub async fn login(email: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };
    post_json::<LoginResponse, _>("/auth/login", &request).await
}

/// Ends the cookie session on the server
pub async fn logout() -> Result<MessageResponse, ApiError> {
    post_json::<MessageResponse, _>("/auth/logout", &serde_json::json!({})).await
}
