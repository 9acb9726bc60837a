use serde::{Deserialize, Serialize};

use super::User;

/// Credentials submitted by the login form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The user's login name (their email address).
    pub username: String,

    /// The user's password.
    pub password: String,
}

/// The `success` payload of a login response: an opaque access token
/// plus the authenticated user's profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthGrant {
    /// Opaque token attached verbatim to the `Authorization` header of
    /// subsequent requests.
    #[serde(rename = "accessToken")]
    pub access_token: String,

    /// Profile of the user the token was issued for.
    #[serde(default)]
    pub user: Option<User>,
}

/// Full login response, and also the blob persisted to client storage
/// under the `currentUser` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub success: AuthGrant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_stored_blob_shape() {
        let json = r#"{"success":{"accessToken":"X"}}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.success.access_token, "X");
        assert!(response.success.user.is_none());
    }

    #[test]
    fn token_key_is_camel_case_on_the_wire() {
        let response = LoginResponse {
            success: AuthGrant {
                access_token: "tok-123".to_string(),
                user: None,
            },
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"accessToken\":\"tok-123\""));
        assert!(!json.contains("access_token"));
    }

    #[test]
    fn missing_token_key_fails_to_decode() {
        let json = r#"{"success":{}}"#;
        assert!(serde_json::from_str::<LoginResponse>(json).is_err());
    }
}
