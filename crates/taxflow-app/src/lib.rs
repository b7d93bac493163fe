//! Taxflow application orchestrator
//!
//! Assembles the store, auth, voice, gate, and returns services into one
//! [`TaxApp`] and drives navigation through the access gate.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use taxflow_app::{AppConfig, TaxApp};
//! use taxflow_store::MemoryStore;
//! use taxflow_types::NullNotifier;
//! use taxflow_voice::SilentBackend;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = TaxApp::new(
//!     AppConfig::for_tests(),
//!     Arc::new(MemoryStore::new()),
//!     Arc::new(SilentBackend),
//!     Arc::new(NullNotifier),
//! );
//! app.start().await?;
//! app.login("user@example.com", "password").await?;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod config;

pub use app::TaxApp;
pub use config::AppConfig;

/// Initialize tracing with the standard env-filter setup
///
/// Called once from the binary; library users bring their own subscriber.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}
