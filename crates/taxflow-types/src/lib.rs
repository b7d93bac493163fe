//! Foundational types for the Taxflow workspace
//!
//! Defines the vocabulary shared by every other crate:
//! - ULID-backed identifier newtypes
//! - User roles and permission tokens
//! - The route surface of the application
//! - The notification (toast) seam

pub mod id;
pub mod notify;
pub mod role;
pub mod route;

pub use id::{AttachmentId, CommentId, ReturnId, UserId};
pub use notify::{NoticeLevel, Notifier, NullNotifier};
pub use role::Role;
pub use route::RouteKey;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
