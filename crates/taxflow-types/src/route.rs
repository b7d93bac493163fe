//! Route surface
//!
//! Every navigable page in the application, with its path. The gate, the
//! narrator, and the app orchestrator all key off [`RouteKey`].

use serde::{Deserialize, Serialize};

/// One navigable page of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKey {
    /// Login / signup page
    Login,
    /// Role-specific dashboard ("/")
    Dashboard,
    /// Multi-step filing wizard
    Filing,
    /// AI assistant chat
    AiAssistant,
    /// Returns list and review
    Returns,
    /// User profile
    Profile,
    /// Document upload and management
    Documents,
    /// Help center
    Help,
    /// Analytics dashboards
    Analytics,
    /// Tax-rules administration
    TaxRules,
    /// User administration
    UsersAdmin,
    /// Application settings
    Settings,
    /// Support request queue
    SupportRequests,
    /// Knowledge base
    KnowledgeBase,
    /// Access-denied landing page
    Unauthorized,
    /// Catch-all for unknown paths
    NotFound,
}

impl RouteKey {
    /// All routes, in declaration order
    pub const ALL: [RouteKey; 16] = [
        RouteKey::Login,
        RouteKey::Dashboard,
        RouteKey::Filing,
        RouteKey::AiAssistant,
        RouteKey::Returns,
        RouteKey::Profile,
        RouteKey::Documents,
        RouteKey::Help,
        RouteKey::Analytics,
        RouteKey::TaxRules,
        RouteKey::UsersAdmin,
        RouteKey::Settings,
        RouteKey::SupportRequests,
        RouteKey::KnowledgeBase,
        RouteKey::Unauthorized,
        RouteKey::NotFound,
    ];

    /// URL path for this route
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            RouteKey::Login => "/login",
            RouteKey::Dashboard => "/",
            RouteKey::Filing => "/filing",
            RouteKey::AiAssistant => "/assistant",
            RouteKey::Returns => "/returns",
            RouteKey::Profile => "/profile",
            RouteKey::Documents => "/documents",
            RouteKey::Help => "/help",
            RouteKey::Analytics => "/analytics",
            RouteKey::TaxRules => "/admin/tax-rules",
            RouteKey::UsersAdmin => "/admin/users",
            RouteKey::Settings => "/settings",
            RouteKey::SupportRequests => "/support/requests",
            RouteKey::KnowledgeBase => "/support/knowledge-base",
            RouteKey::Unauthorized => "/unauthorized",
            RouteKey::NotFound => "/404",
        }
    }

    /// Resolve a URL path to a route; unknown paths map to [`RouteKey::NotFound`]
    #[must_use]
    pub fn from_path(path: &str) -> RouteKey {
        Self::ALL
            .into_iter()
            .find(|r| r.path() == path)
            .unwrap_or(RouteKey::NotFound)
    }
}

impl std::fmt::Display for RouteKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
