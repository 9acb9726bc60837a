use serde::{Deserialize, Serialize};
use std::fmt;

/// Acknowledgement body the backend returns for mutations and errors,
/// e.g. `{ "success": { "status": false, "message": "Bad request" } }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusMessage {
    /// Whether the operation succeeded.
    pub status: bool,

    /// Human-readable outcome description.
    pub message: String,
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
