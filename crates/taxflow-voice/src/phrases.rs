//! Canned phrase tables
//!
//! Two fixed lookup tables: short phrases for UI actions, and one
//! description per page. Unknown keys are a silent no-op at the engine.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use taxflow_types::RouteKey;

static ELEMENT_PHRASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("login_button", "Signing you in."),
        ("logout_button", "Signing you out."),
        ("next_button", "Moving to the next step."),
        ("previous_button", "Going back one step."),
        ("save_progress", "Your progress has been saved."),
        ("submit_return", "Submitting your tax return."),
        ("upload_document", "Uploading your document."),
        ("add_comment", "Your comment has been added."),
        ("access_denied", "You do not have permission to view this page."),
        ("mute_toggle", "Voice assistant muted."),
    ])
});

/// Phrase for a UI element action, if one is defined
#[must_use]
pub fn element_phrase(key: &str) -> Option<&'static str> {
    ELEMENT_PHRASES.get(key).copied()
}

/// Description spoken when a page is opened
///
/// Routes without a description (the catch-all 404 page) are skipped.
#[must_use]
pub fn page_phrase(route: RouteKey) -> Option<&'static str> {
    match route {
        RouteKey::Login => Some("Welcome to Taxflow. Please sign in or create an account."),
        RouteKey::Dashboard => Some("This is your dashboard, showing your filing progress and recent activity."),
        RouteKey::Filing => Some("This is the tax filing wizard. Complete each step to prepare your return."),
        RouteKey::AiAssistant => Some("This is the AI assistant. Ask any question about your taxes."),
        RouteKey::Returns => Some("Here are your tax returns, most recently updated first."),
        RouteKey::Profile => Some("This is your profile page, where you can review your account details."),
        RouteKey::Documents => Some("This is the documents page. Upload and manage your tax documents here."),
        RouteKey::Help => Some("This is the help center, with guides and frequently asked questions."),
        RouteKey::Analytics => Some("This page shows analytics across returns and filing activity."),
        RouteKey::TaxRules => Some("This is the tax rules administration page."),
        RouteKey::UsersAdmin => Some("This is the user administration page."),
        RouteKey::Settings => Some("These are the application settings."),
        RouteKey::SupportRequests => Some("This is the support request queue."),
        RouteKey::KnowledgeBase => Some("This is the knowledge base for support articles."),
        RouteKey::Unauthorized => Some("You do not have access to the page you requested."),
        RouteKey::NotFound => None,
    }
}
