use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of a successful `POST /auth/login`; the session itself travels in an
/// HTTP-only cookie the client never sees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "crate::shared::lenient::opt_string")]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Non-authoritative user info kept in local storage after sign-in.
/// Losing it never ends the session; a 401 always does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedUser {
    #[serde(default)]
    pub user_id: Option<String>,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_with_numeric_user_id() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"message": "Login successful", "user_id": 3}"#).unwrap();
        assert_eq!(resp.user_id.as_deref(), Some("3"));
    }

    #[test]
    fn test_cached_user_roundtrip_through_storage_format() {
        let user = CachedUser {
            user_id: Some("3".to_string()),
            email: "ops@example.com".to_string(),
        };
        let raw = serde_json::to_string(&user).unwrap();
        assert_eq!(serde_json::from_str::<CachedUser>(&raw).unwrap(), user);
    }
}
