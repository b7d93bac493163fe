//! Return status state machine
//!
//! Transitions are monotonic along draft -> in_progress -> submitted ->
//! approved, with a review side branch: a comment flagged as requesting
//! additional info forces `NeedsInfo` (that forcing bypasses this table by
//! design; see [`crate::ReturnsRepository::add_comment`]), after which the
//! only way forward is `Resubmitted`.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a tax return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnStatus {
    /// Freshly created, nothing saved yet
    Draft,
    /// At least the personal-info step has been saved
    InProgress,
    /// Submitted and awaiting review
    Submitted,
    /// Review complete
    Approved,
    /// Reviewer requested additional information
    NeedsInfo,
    /// Submitted again after a needs-info round
    Resubmitted,
}

impl ReturnStatus {
    /// Statuses reachable from `self` through normal operations
    #[must_use]
    pub fn allowed_transitions(self) -> Vec<ReturnStatus> {
        use ReturnStatus::*;
        match self {
            Draft => vec![InProgress],
            InProgress => vec![Submitted],
            Submitted => vec![Approved, NeedsInfo],
            Approved => vec![NeedsInfo],
            NeedsInfo => vec![Resubmitted],
            Resubmitted => vec![Approved, NeedsInfo],
        }
    }

    /// Check a transition against the table
    #[must_use]
    pub fn can_transition_to(self, to: ReturnStatus) -> bool {
        self.allowed_transitions().contains(&to)
    }

    /// Human-readable label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ReturnStatus::Draft => "draft",
            ReturnStatus::InProgress => "in progress",
            ReturnStatus::Submitted => "submitted",
            ReturnStatus::Approved => "approved",
            ReturnStatus::NeedsInfo => "needs info",
            ReturnStatus::Resubmitted => "resubmitted",
        }
    }
}

impl std::fmt::Display for ReturnStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
