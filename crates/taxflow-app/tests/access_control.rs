//! Gate behavior through the whole app: denials notify, narrate, and redirect

use pretty_assertions::assert_eq;
use taxflow_gate::GateDecision;
use taxflow_test_utils::test_app;
use taxflow_types::{NoticeLevel, RouteKey};

#[tokio::test]
async fn taxpayer_is_denied_the_admin_pages() {
    let fixture = test_app();
    let app = &fixture.app;
    app.start().await.unwrap();
    app.login("user@example.com", "password").await.unwrap();
    fixture.notifier.clear();
    fixture.speech.clear();

    let decision = app.navigate(RouteKey::UsersAdmin).await;
    assert_eq!(decision, GateDecision::RedirectToUnauthorized);
    assert_eq!(app.current_route(), RouteKey::Unauthorized);

    // Denial both toasts and narrates
    let errors = fixture.notifier.messages_at(NoticeLevel::Error);
    assert!(errors.iter().any(|m| m.contains("permission")));
    let spoken = fixture.speech.spoken();
    assert!(spoken.iter().any(|s| s.contains("permission")));
}

#[tokio::test]
async fn accountant_reaches_overlay_routes_without_the_tokens() {
    let fixture = test_app();
    let app = &fixture.app;
    app.start().await.unwrap();
    app.login("accountant@example.com", "account123").await.unwrap();

    for route in [
        RouteKey::Returns,
        RouteKey::Filing,
        RouteKey::Documents,
        RouteKey::Analytics,
    ] {
        assert_eq!(
            app.navigate(route).await,
            GateDecision::Render,
            "accountant should render {route:?}"
        );
    }

    // But the overlay stops at those four routes
    assert_eq!(
        app.navigate(RouteKey::UsersAdmin).await,
        GateDecision::RedirectToUnauthorized
    );
}

#[tokio::test]
async fn anonymous_navigation_lands_on_login() {
    let fixture = test_app();
    let app = &fixture.app;
    app.start().await.unwrap();

    let decision = app.navigate(RouteKey::Dashboard).await;
    assert_eq!(decision, GateDecision::RedirectToLogin);
    assert_eq!(app.current_route(), RouteKey::Login);
}

#[tokio::test]
async fn support_agent_sees_their_queue_but_not_filing() {
    let fixture = test_app();
    let app = &fixture.app;
    app.start().await.unwrap();
    app.login("support@example.com", "support123").await.unwrap();

    assert_eq!(
        app.navigate(RouteKey::SupportRequests).await,
        GateDecision::Render
    );
    assert_eq!(
        app.navigate(RouteKey::Filing).await,
        GateDecision::RedirectToUnauthorized
    );
}
