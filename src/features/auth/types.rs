//! Request and response types for the auth endpoints. The login response
//! carries the raw token, so these values must never be logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub auth_token: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub re_password: String,
    /// Omitted from the payload entirely when not provided; the backend
    /// rejects an empty string here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl RegisterRequest {
    pub fn new(username: &str, password: &str, re_password: &str, email: &str) -> Self {
        let email = email.trim();
        Self {
            username: username.to_string(),
            password: password.to_string(),
            re_password: re_password.to_string(),
            email: (!email.is_empty()).then(|| email.to_string()),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
/// Created-user representation returned by the users endpoint; also the
/// shape of the current-account lookup.
pub struct UserAccount {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_payload_omits_empty_email() {
        let request = RegisterRequest::new("guest", "pw", "pw", "");
        let json = serde_json::to_value(&request).expect("Failed to serialize");

        assert!(json.get("email").is_none(), "email key must be absent");
        assert_eq!(json["username"], "guest");
        assert_eq!(json["re_password"], "pw");
    }

    #[test]
    fn register_payload_keeps_provided_email() {
        let request = RegisterRequest::new("guest", "pw", "pw", "e@x.com");
        let json = serde_json::to_value(&request).expect("Failed to serialize");

        assert_eq!(json["email"], "e@x.com");
    }

    #[test]
    fn token_response_parses_auth_token() {
        let response: TokenResponse =
            serde_json::from_str(r#"{"auth_token":"abc123","id":7}"#).expect("Failed to parse");
        assert_eq!(response.auth_token, "abc123");
    }

    #[test]
    fn user_account_tolerates_missing_profile_fields() {
        let account: UserAccount =
            serde_json::from_str(r#"{"id":1,"username":"guest"}"#).expect("Failed to parse");
        assert_eq!(account.username, "guest");
        assert!(account.email.is_empty());
    }
}
