//! Taxflow authentication and permission model
//!
//! Demo-grade identity over a fixed in-memory user directory:
//! - Login / signup / logout against plaintext credentials (by design; this
//!   never grew a real backend)
//! - Exactly one active session, persisted as a JSON blob so it survives
//!   an application restart
//! - A fixed role-to-permission-set table built once at startup
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use taxflow_auth::AuthService;
//! use taxflow_store::MemoryStore;
//! use taxflow_types::NullNotifier;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let auth = AuthService::new(
//!     Arc::new(MemoryStore::new()),
//!     Arc::new(NullNotifier),
//!     std::time::Duration::ZERO,
//! );
//! let session = auth.login("user@example.com", "password").await?;
//! assert!(auth.has_permission("file_taxes"));
//! # Ok(())
//! # }
//! ```

pub mod directory;
pub mod error;
pub mod permissions;
pub mod service;
pub mod session;

pub use directory::{UserDirectory, UserRecord};
pub use error::AuthError;
pub use permissions::{PermissionSet, PermissionTable};
pub use service::{AuthService, SESSION_KEY};
pub use session::Session;
