//! Application configuration

use std::path::PathBuf;
use std::time::Duration;
use taxflow_returns::MissingRecordPolicy;

/// Tunables for one [`crate::TaxApp`] instance
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Delay standing in for network latency on login and submission
    pub simulated_network_delay: Duration,
    /// Delay between a route change and its narration, letting the view render
    pub narration_settle_delay: Duration,
    /// What loading a missing return id does
    pub missing_record_policy: MissingRecordPolicy,
    /// Tax year new returns are created for
    pub default_tax_year: u16,
    /// Backing file for durable storage; in-memory when absent
    pub data_file: Option<PathBuf>,
}

impl AppConfig {
    /// Default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a simulated network delay
    #[inline]
    #[must_use]
    pub fn with_network_delay(mut self, delay: Duration) -> Self {
        self.simulated_network_delay = delay;
        self
    }

    /// With a narration settle delay
    #[inline]
    #[must_use]
    pub fn with_narration_delay(mut self, delay: Duration) -> Self {
        self.narration_settle_delay = delay;
        self
    }

    /// With a missing-record policy
    #[inline]
    #[must_use]
    pub fn with_missing_record_policy(mut self, policy: MissingRecordPolicy) -> Self {
        self.missing_record_policy = policy;
        self
    }

    /// With a default tax year
    #[inline]
    #[must_use]
    pub fn with_tax_year(mut self, year: u16) -> Self {
        self.default_tax_year = year;
        self
    }

    /// With a durable data file
    #[inline]
    #[must_use]
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = Some(path.into());
        self
    }

    /// All delays zeroed, for tests
    #[must_use]
    pub fn for_tests() -> Self {
        Self {
            simulated_network_delay: Duration::ZERO,
            narration_settle_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            simulated_network_delay: Duration::from_millis(800),
            narration_settle_delay: Duration::from_millis(400),
            missing_record_policy: MissingRecordPolicy::CreateWithId,
            default_tax_year: 2023,
            data_file: None,
        }
    }
}
