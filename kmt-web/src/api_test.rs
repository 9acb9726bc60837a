//! Tests for the API client
//!
//! Validates the header-injection rule, URL construction, and decoding
//! of the backend's `{ "success": ... }` envelopes.

#[cfg(test)]
mod tests {
    use crate::api::{ApiClient, authorize};
    use crate::session::{Session, SessionProvider};
    use kmt_shared::models::{Envelope, StatusMessage, UserList};
    use reqwest::{Client, header};

    /// Provider pinned to a fixed session, so tests control exactly what
    /// the interceptor sees.
    #[derive(Clone)]
    struct FixedSession(Option<Session>);

    impl SessionProvider for FixedSession {
        fn current(&self) -> Option<Session> {
            self.0.clone()
        }

        fn store(&self, _response: &kmt_shared::models::LoginResponse) {}

        fn clear(&self) {}
    }

    fn session_with(token: &str) -> Session {
        Session {
            access_token: token.to_string(),
            user: None,
        }
    }

    #[test]
    fn authorize_attaches_the_raw_token() {
        let builder = Client::new().get("http://localhost/api/users");
        let session = session_with("X");
        let request = authorize(builder, Some(&session)).build().unwrap();

        let value = request.headers().get(header::AUTHORIZATION).unwrap();
        assert_eq!(value, "X");
    }

    #[test]
    fn authorize_without_a_session_leaves_the_request_untouched() {
        let builder = Client::new().get("http://localhost/api/users");
        let request = authorize(builder, None).build().unwrap();
        assert!(request.headers().get(header::AUTHORIZATION).is_none());
    }

    #[test]
    fn authorize_skips_an_empty_token() {
        let builder = Client::new().get("http://localhost/api/users");
        let session = session_with("");
        let request = authorize(builder, Some(&session)).build().unwrap();
        assert!(request.headers().get(header::AUTHORIZATION).is_none());
    }

    #[test]
    fn api_urls_join_without_duplicate_slashes() {
        let client = ApiClient::with_sessions("http://localhost:8080/", FixedSession(None));
        assert_eq!(
            client.api_url("users"),
            "http://localhost:8080/users"
        );
        assert_eq!(
            client.api_url("/users/42"),
            "http://localhost:8080/users/42"
        );
    }

    #[test]
    fn relative_base_url_is_preserved() {
        let client = ApiClient::with_sessions("/api", FixedSession(None));
        assert_eq!(client.api_url("articles"), "/api/articles");
        assert_eq!(client.api_url("users/login"), "/api/users/login");
    }

    #[test]
    fn user_list_envelope_decodes() {
        let json = r#"{
            "success": {
                "users": [
                    {
                        "id": "1",
                        "firstName": "Asha",
                        "lastName": "Patel",
                        "email": "asha@example.com",
                        "userRole": "admin"
                    }
                ]
            }
        }"#;
        let envelope: Envelope<UserList> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.success.users.len(), 1);
        assert_eq!(envelope.success.users[0].email, "asha@example.com");
    }

    #[test]
    fn status_envelope_decodes() {
        let json = r#"{"success":{"status":false,"message":"Unauthorized access"}}"#;
        let envelope: Envelope<StatusMessage> = serde_json::from_str(json).unwrap();
        assert!(!envelope.success.status);
        assert_eq!(envelope.success.message, "Unauthorized access");
    }
}
