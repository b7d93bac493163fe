//! Capability overlay
//!
//! Role-by-route grants layered on top of the permission table. An entry
//! here means "this role may open this route even without the declared
//! permission". The overlay never revokes anything.

use std::collections::BTreeSet;
use taxflow_types::{Role, RouteKey};

/// Declarative (role, route) allow-list
#[derive(Debug, Default, Clone)]
pub struct CapabilityOverlay {
    grants: BTreeSet<(Role, RouteKey)>,
}

impl CapabilityOverlay {
    /// Empty overlay: the permission table alone decides
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The application's built-in overlay
    ///
    /// Accountants review returns end to end, so they get the filing,
    /// documents, returns, and analytics pages regardless of their tokens.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut overlay = Self::new();
        for route in [
            RouteKey::Returns,
            RouteKey::Filing,
            RouteKey::Documents,
            RouteKey::Analytics,
        ] {
            overlay.grant(Role::Accountant, route);
        }
        overlay
    }

    /// Add a grant
    pub fn grant(&mut self, role: Role, route: RouteKey) {
        self.grants.insert((role, route));
    }

    /// Whether the overlay admits `role` to `route`
    #[inline]
    #[must_use]
    pub fn admits(&self, role: Role, route: RouteKey) -> bool {
        self.grants.contains(&(role, route))
    }

    /// Routes granted to `role`
    pub fn routes_for(&self, role: Role) -> impl Iterator<Item = RouteKey> + '_ {
        self.grants
            .iter()
            .filter(move |(r, _)| *r == role)
            .map(|(_, route)| *route)
    }

    /// Number of grants
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.grants.len()
    }

    /// Check whether no grants exist
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_overlay_is_exactly_four_accountant_routes() {
        let overlay = CapabilityOverlay::with_defaults();
        assert_eq!(overlay.len(), 4);

        let routes: Vec<RouteKey> = overlay.routes_for(Role::Accountant).collect();
        for route in [
            RouteKey::Returns,
            RouteKey::Filing,
            RouteKey::Documents,
            RouteKey::Analytics,
        ] {
            assert!(routes.contains(&route));
        }
        assert!(!overlay.admits(Role::Accountant, RouteKey::UsersAdmin));
        assert!(!overlay.admits(Role::Support, RouteKey::Filing));
    }
}
