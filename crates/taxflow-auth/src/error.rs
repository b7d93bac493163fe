//! Authentication errors

use taxflow_store::StoreError;

/// Errors from the authentication service
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Email/password pair did not match any known user
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Signup attempted with an email that already has an account
    #[error("an account already exists for {0}")]
    EmailAlreadyExists(String),

    /// Session persistence failed
    #[error("session storage failed: {0}")]
    Store(#[from] StoreError),

    /// Persisted session blob could not be decoded
    #[error("persisted session corrupt: {0}")]
    CorruptSession(#[from] serde_json::Error),
}
