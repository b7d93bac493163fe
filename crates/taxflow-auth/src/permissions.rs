//! Role-to-permission mapping
//!
//! Permission tokens are opaque strings compared by exact match. The table
//! is built once at startup and never mutated afterwards.

use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashSet};
use taxflow_types::Role;

/// Set of permission tokens granted to one role
#[derive(Debug, Default, Clone)]
pub struct PermissionSet {
    tokens: HashSet<String>,
}

impl PermissionSet {
    /// Create an empty set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokens: HashSet::new(),
        }
    }

    /// Build a set from token literals
    #[must_use]
    pub fn from_tokens(tokens: &[&str]) -> Self {
        Self {
            tokens: tokens.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    /// Grant a token
    pub fn grant(&mut self, token: &str) {
        self.tokens.insert(token.to_string());
    }

    /// Exact-match membership check
    #[inline]
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Number of granted tokens
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check whether no tokens are granted
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over granted tokens
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.tokens.iter()
    }
}

/// Fixed mapping from role to its permission set
#[derive(Debug, Clone)]
pub struct PermissionTable {
    sets: BTreeMap<Role, PermissionSet>,
}

impl PermissionTable {
    /// The application's built-in grants
    ///
    /// Every role maps to a non-empty set; admins hold every token.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut sets = BTreeMap::new();
        sets.insert(
            Role::Taxpayer,
            PermissionSet::from_tokens(&[
                "view_dashboard",
                "file_taxes",
                "view_own_returns",
                "upload_documents",
                "view_profile",
                "use_ai_assistant",
                "view_help",
            ]),
        );
        sets.insert(
            Role::Admin,
            PermissionSet::from_tokens(&[
                "view_dashboard",
                "file_taxes",
                "view_own_returns",
                "upload_documents",
                "view_profile",
                "use_ai_assistant",
                "view_help",
                "review_returns",
                "view_analytics",
                "manage_tax_rules",
                "manage_users",
                "manage_settings",
                "view_support_requests",
                "view_knowledge_base",
            ]),
        );
        sets.insert(
            Role::Support,
            PermissionSet::from_tokens(&[
                "view_dashboard",
                "view_profile",
                "view_help",
                "use_ai_assistant",
                "view_support_requests",
                "view_knowledge_base",
            ]),
        );
        sets.insert(
            Role::Accountant,
            PermissionSet::from_tokens(&[
                "view_dashboard",
                "view_profile",
                "view_help",
                "use_ai_assistant",
                "review_returns",
            ]),
        );
        Self { sets }
    }

    /// Permission set for a role
    ///
    /// Every role in [`Role::ALL`] is present in the default table.
    #[must_use]
    pub fn for_role(&self, role: Role) -> &PermissionSet {
        static EMPTY: Lazy<PermissionSet> = Lazy::new(PermissionSet::new);
        self.sets.get(&role).unwrap_or(&EMPTY)
    }

    /// Exact-match grant check for a role
    #[inline]
    #[must_use]
    pub fn allows(&self, role: Role, token: &str) -> bool {
        self.sets.get(&role).is_some_and(|s| s.contains(token))
    }
}

impl Default for PermissionTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_has_a_non_empty_set() {
        let table = PermissionTable::with_defaults();
        for role in Role::ALL {
            assert!(
                !table.for_role(role).is_empty(),
                "role {role} has an empty permission set"
            );
        }
    }

    #[test]
    fn allows_is_exact_membership() {
        let table = PermissionTable::with_defaults();
        for role in Role::ALL {
            let set = table.for_role(role);
            for token in set.iter() {
                assert!(table.allows(role, token));
            }
            // Prefixes and near-misses never match
            assert!(!table.allows(role, "view_dash"));
            assert!(!table.allows(role, "VIEW_DASHBOARD"));
        }
    }

    #[test]
    fn support_cannot_file_taxes() {
        let table = PermissionTable::with_defaults();
        assert!(!table.allows(Role::Support, "file_taxes"));
        assert!(table.allows(Role::Taxpayer, "file_taxes"));
    }

    #[test]
    fn accountant_lacks_filing_and_documents_tokens() {
        // Accountants reach filing/documents/analytics through the gate
        // overlay, not through the permission table itself.
        let table = PermissionTable::with_defaults();
        assert!(!table.allows(Role::Accountant, "file_taxes"));
        assert!(!table.allows(Role::Accountant, "upload_documents"));
        assert!(!table.allows(Role::Accountant, "view_analytics"));
        assert!(table.allows(Role::Accountant, "review_returns"));
    }
}
