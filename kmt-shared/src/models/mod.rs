pub mod article;
pub mod auth;
pub mod status;
pub mod timestamp;
pub mod user;

pub use article::{Article, ArticleList, ArticleType, ArticleView};
pub use auth::{AuthGrant, LoginRequest, LoginResponse};
pub use status::StatusMessage;
pub use timestamp::Timestamp;
pub use user::{User, UserList, UserRole, UserView};

use serde::{Deserialize, Serialize};

/// The backend wraps every response body in a `success` object, so a
/// list of users arrives as `{ "success": { "users": [...] } }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    /// The wrapped payload.
    pub success: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_unwraps_success_key() {
        let json = r#"{"success":{"status":true,"message":"saved"}}"#;
        let envelope: Envelope<StatusMessage> = serde_json::from_str(json).unwrap();
        assert!(envelope.success.status);
        assert_eq!(envelope.success.message, "saved");
    }
}
