//! Persisted login session.
//!
//! The backend's login response is stored verbatim in `localStorage`
//! under the `currentUser` key. Everything that needs the session goes
//! through the [`SessionProvider`] trait rather than reading storage
//! ambiently, so the token-presence rule lives in exactly one place.

use gloo_storage::{LocalStorage, Storage};
use kmt_shared::models::{LoginResponse, User};

/// Storage key the login response blob is persisted under.
pub const SESSION_STORAGE_KEY: &str = "currentUser";

/// The client-side view of an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Opaque token the backend issued at login.
    pub access_token: String,

    /// Profile of the signed-in user, when the backend included one.
    pub user: Option<User>,
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Self {
            access_token: response.success.access_token,
            user: response.success.user,
        }
    }
}

/// Source of the current session for guards and the API client.
pub trait SessionProvider {
    /// The session currently persisted, if any decodable one exists.
    fn current(&self) -> Option<Session>;

    /// Persist a fresh login response.
    fn store(&self, response: &LoginResponse);

    /// Drop the persisted session.
    fn clear(&self);

    /// A session counts as authenticated iff it exists and carries a
    /// non-empty token.
    fn is_authenticated(&self) -> bool {
        self.current()
            .map(|session| !session.access_token.is_empty())
            .unwrap_or(false)
    }
}

/// [`SessionProvider`] backed by browser `localStorage`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserSession;

impl SessionProvider for BrowserSession {
    fn current(&self) -> Option<Session> {
        // A missing key and a malformed blob both mean "no session".
        LocalStorage::get::<LoginResponse>(SESSION_STORAGE_KEY)
            .ok()
            .map(Session::from)
    }

    fn store(&self, response: &LoginResponse) {
        if let Err(err) = LocalStorage::set(SESSION_STORAGE_KEY, response) {
            log::error!("failed to persist session: {err}");
        }
    }

    fn clear(&self) {
        LocalStorage::delete(SESSION_STORAGE_KEY);
    }
}
