//! Gate evaluation

use crate::overlay::CapabilityOverlay;
use crate::routes::RouteTable;
use taxflow_auth::{PermissionTable, Session};
use taxflow_types::RouteKey;

/// Where the client stands with respect to authentication
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Session restore still in progress
    Restoring,
    /// No session
    Anonymous,
    /// Authenticated
    Active(Session),
}

/// Outcome of evaluating a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Restore pending; render a placeholder
    Loading,
    /// Send the user to the login page
    RedirectToLogin,
    /// Render the requested page
    Render,
    /// Deny: narrate, notify, and send to the unauthorized page
    RedirectToUnauthorized,
}

/// Permission gate evaluated on every navigation
#[derive(Debug, Clone)]
pub struct AccessGate {
    routes: RouteTable,
    overlay: CapabilityOverlay,
}

impl AccessGate {
    /// Gate with the application's route table and overlay
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            routes: RouteTable::with_defaults(),
            overlay: CapabilityOverlay::with_defaults(),
        }
    }

    /// Gate over custom tables
    #[must_use]
    pub fn new(routes: RouteTable, overlay: CapabilityOverlay) -> Self {
        Self { routes, overlay }
    }

    /// The route table in force
    #[inline]
    #[must_use]
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Decide render vs redirect for `route` under `state`
    ///
    /// Pure function of its inputs; safe to call on every change.
    #[must_use]
    pub fn evaluate(
        &self,
        state: &SessionState,
        route: RouteKey,
        permissions: &PermissionTable,
    ) -> GateDecision {
        if self.routes.is_public(route) {
            return GateDecision::Render;
        }

        let session = match state {
            SessionState::Restoring => return GateDecision::Loading,
            SessionState::Anonymous => return GateDecision::RedirectToLogin,
            SessionState::Active(session) => session,
        };

        let Some(required) = self.routes.required_permission(route) else {
            return GateDecision::Render;
        };

        if permissions.allows(session.role, required) || self.overlay.admits(session.role, route) {
            GateDecision::Render
        } else {
            tracing::warn!(
                role = %session.role,
                %route,
                required,
                "access denied"
            );
            GateDecision::RedirectToUnauthorized
        }
    }
}

impl Default for AccessGate {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taxflow_types::{Role, RouteKey, UserId};

    fn session(role: Role) -> SessionState {
        SessionState::Active(Session {
            user_id: UserId::new(),
            email: "x@example.com".to_string(),
            name: "X Person".to_string(),
            role,
            avatar: None,
        })
    }

    fn gate() -> (AccessGate, PermissionTable) {
        (AccessGate::with_defaults(), PermissionTable::with_defaults())
    }

    #[test]
    fn restoring_session_loads() {
        let (gate, perms) = gate();
        assert_eq!(
            gate.evaluate(&SessionState::Restoring, RouteKey::Dashboard, &perms),
            GateDecision::Loading
        );
    }

    #[test]
    fn anonymous_users_go_to_login() {
        let (gate, perms) = gate();
        assert_eq!(
            gate.evaluate(&SessionState::Anonymous, RouteKey::Dashboard, &perms),
            GateDecision::RedirectToLogin
        );
        // Public routes stay reachable
        assert_eq!(
            gate.evaluate(&SessionState::Anonymous, RouteKey::Login, &perms),
            GateDecision::Render
        );
    }

    #[test]
    fn permission_holders_render() {
        let (gate, perms) = gate();
        assert_eq!(
            gate.evaluate(&session(Role::Taxpayer), RouteKey::Filing, &perms),
            GateDecision::Render
        );
        assert_eq!(
            gate.evaluate(&session(Role::Admin), RouteKey::UsersAdmin, &perms),
            GateDecision::Render
        );
    }

    #[test]
    fn missing_permission_redirects_to_unauthorized() {
        let (gate, perms) = gate();
        assert_eq!(
            gate.evaluate(&session(Role::Taxpayer), RouteKey::UsersAdmin, &perms),
            GateDecision::RedirectToUnauthorized
        );
        assert_eq!(
            gate.evaluate(&session(Role::Support), RouteKey::Filing, &perms),
            GateDecision::RedirectToUnauthorized
        );
    }

    #[test]
    fn overlay_widens_accountant_access_to_four_routes() {
        let (gate, perms) = gate();
        let accountant = session(Role::Accountant);

        for route in [
            RouteKey::Returns,
            RouteKey::Filing,
            RouteKey::Documents,
            RouteKey::Analytics,
        ] {
            assert_eq!(
                gate.evaluate(&accountant, route, &perms),
                GateDecision::Render,
                "accountant should reach {route:?} through the overlay"
            );
        }

        // The overlay is route-scoped, not a blanket grant
        assert_eq!(
            gate.evaluate(&accountant, RouteKey::UsersAdmin, &perms),
            GateDecision::RedirectToUnauthorized
        );
        assert_eq!(
            gate.evaluate(&accountant, RouteKey::Settings, &perms),
            GateDecision::RedirectToUnauthorized
        );
    }

    #[test]
    fn overlay_never_helps_other_roles() {
        let (gate, perms) = gate();
        assert_eq!(
            gate.evaluate(&session(Role::Support), RouteKey::Analytics, &perms),
            GateDecision::RedirectToUnauthorized
        );
    }
}
