use crate::session::Session;
use kmt_shared::models::User;
use yewdux::Store;

/// Global application state mirrored from the persisted session.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub session: Option<Session>,
}

impl AppState {
    /// Truthy-token rule, same as the session provider's.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session
            .as_ref()
            .map(|session| !session.access_token.is_empty())
            .unwrap_or(false)
    }

    /// The signed-in user's profile, when the login response carried one.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref().and_then(|session| session.user.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_unauthenticated() {
        let state = AppState::default();
        assert!(!state.is_authenticated());
        assert!(state.current_user().is_none());
    }

    #[test]
    fn empty_token_does_not_authenticate() {
        let state = AppState {
            session: Some(Session {
                access_token: String::new(),
                user: None,
            }),
        };
        assert!(!state.is_authenticated());
    }

    #[test]
    fn token_presence_authenticates() {
        let state = AppState {
            session: Some(Session {
                access_token: "tok".to_string(),
                user: None,
            }),
        };
        assert!(state.is_authenticated());
    }
}
