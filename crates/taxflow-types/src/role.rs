//! User roles
//!
//! Roles are fixed at account creation and never change afterwards; there is
//! no self-service escalation path anywhere in the workspace.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Role attached to every user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular taxpayer filing their own returns
    Taxpayer,
    /// Administrator with full access
    Admin,
    /// Support agent handling user requests
    Support,
    /// Accountant reviewing assigned returns
    Accountant,
}

impl Role {
    /// All roles, in declaration order
    pub const ALL: [Role; 4] = [Role::Taxpayer, Role::Admin, Role::Support, Role::Accountant];

    /// Human-readable label used in narration and notifications
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Role::Taxpayer => "taxpayer",
            Role::Admin => "administrator",
            Role::Support => "support agent",
            Role::Accountant => "accountant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown role name
#[derive(Debug, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "taxpayer" => Ok(Role::Taxpayer),
            "admin" => Ok(Role::Admin),
            "support" => Ok(Role::Support),
            "accountant" => Ok(Role::Accountant),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serde_is_snake_case() {
        let json = serde_json::to_string(&Role::Accountant).unwrap();
        assert_eq!(json, "\"accountant\"");
        let back: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Role::Accountant);
    }

    #[test]
    fn role_parse_rejects_unknown() {
        assert!("auditor".parse::<Role>().is_err());
        assert_eq!("support".parse::<Role>().unwrap(), Role::Support);
    }
}
