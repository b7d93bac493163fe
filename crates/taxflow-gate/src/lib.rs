//! Route access gate
//!
//! Decides render vs redirect for every navigation, from three inputs:
//! - the session state (restoring, anonymous, or active)
//! - the route's required permission (a data table, [`RouteTable`])
//! - the capability overlay ([`CapabilityOverlay`]): role-by-route grants
//!   that widen access beyond the permission table. The accountant access
//!   to return review, filing, documents, and analytics lives here as data,
//!   not as special-cased code.
//!
//! The gate is pure: callers re-evaluate it on every route or session
//! change and act on the returned decision (narrate, toast, redirect).

pub mod gate;
pub mod overlay;
pub mod routes;

pub use gate::{AccessGate, GateDecision, SessionState};
pub use overlay::CapabilityOverlay;
pub use routes::RouteTable;
