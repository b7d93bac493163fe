//! Active session record

use serde::{Deserialize, Serialize};
use taxflow_types::{Role, UserId};

/// The authenticated identity bound to the running client
///
/// Persisted verbatim as JSON under [`crate::SESSION_KEY`]; absence of the
/// blob means unauthenticated. The role is copied from the user record at
/// login and never changes for the life of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Owning user
    pub user_id: UserId,
    /// Login email
    pub email: String,
    /// Display name
    pub name: String,
    /// Role fixed at account creation
    pub role: Role,
    /// Optional avatar reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Session {
    /// First name used by narration personalization
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}
