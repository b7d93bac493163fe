//! Route permission table

use std::collections::BTreeMap;
use taxflow_types::RouteKey;

/// Declared permission requirement per route
///
/// Routes absent from the table require authentication only; the login,
/// unauthorized, and not-found pages are public.
#[derive(Debug, Clone)]
pub struct RouteTable {
    required: BTreeMap<RouteKey, &'static str>,
}

impl RouteTable {
    /// The application's route requirements
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut required = BTreeMap::new();
        required.insert(RouteKey::Dashboard, "view_dashboard");
        required.insert(RouteKey::Filing, "file_taxes");
        required.insert(RouteKey::AiAssistant, "use_ai_assistant");
        required.insert(RouteKey::Returns, "view_own_returns");
        required.insert(RouteKey::Profile, "view_profile");
        required.insert(RouteKey::Documents, "upload_documents");
        required.insert(RouteKey::Help, "view_help");
        required.insert(RouteKey::Analytics, "view_analytics");
        required.insert(RouteKey::TaxRules, "manage_tax_rules");
        required.insert(RouteKey::UsersAdmin, "manage_users");
        required.insert(RouteKey::Settings, "manage_settings");
        required.insert(RouteKey::SupportRequests, "view_support_requests");
        required.insert(RouteKey::KnowledgeBase, "view_knowledge_base");
        Self { required }
    }

    /// Whether the route is reachable without any session
    #[must_use]
    pub fn is_public(&self, route: RouteKey) -> bool {
        matches!(
            route,
            RouteKey::Login | RouteKey::Unauthorized | RouteKey::NotFound
        )
    }

    /// Permission token the route declares, if any
    #[inline]
    #[must_use]
    pub fn required_permission(&self, route: RouteKey) -> Option<&'static str> {
        self.required.get(&route).copied()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_routes_declare_no_permission() {
        let table = RouteTable::with_defaults();
        for route in RouteKey::ALL {
            if table.is_public(route) {
                assert!(table.required_permission(route).is_none());
            }
        }
    }

    #[test]
    fn gated_routes_cover_the_admin_surface() {
        let table = RouteTable::with_defaults();
        assert_eq!(table.required_permission(RouteKey::UsersAdmin), Some("manage_users"));
        assert_eq!(table.required_permission(RouteKey::TaxRules), Some("manage_tax_rules"));
    }
}
