//! Route and session narration bridge
//!
//! Connects navigation to the engine: every route change gets its page
//! description spoken after a short settle delay (letting the view render
//! first), and session changes feed the personalization identity through.

use crate::engine::VoiceAssistant;
use std::time::Duration;
use taxflow_auth::Session;
use taxflow_types::RouteKey;

/// Bridge between navigation/session changes and the voice engine
#[derive(Debug, Clone)]
pub struct RouteNarrator {
    engine: VoiceAssistant,
    settle_delay: Duration,
}

impl RouteNarrator {
    /// Create a narrator over `engine`
    #[must_use]
    pub fn new(engine: VoiceAssistant, settle_delay: Duration) -> Self {
        Self {
            engine,
            settle_delay,
        }
    }

    /// The engine this narrator drives
    #[inline]
    #[must_use]
    pub fn engine(&self) -> &VoiceAssistant {
        &self.engine
    }

    /// Narrate a route change
    ///
    /// Waits the settle delay, then speaks the page description. Routes
    /// without a description are skipped silently.
    pub async fn route_changed(&self, route: RouteKey) {
        tokio::time::sleep(self.settle_delay).await;
        tracing::debug!(%route, "narrating route");
        self.engine.speak_page(route);
    }

    /// Forward a session change to the engine for personalization
    pub fn user_changed(&self, session: Option<&Session>) {
        self.engine.set_user(session);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{SpeechBackend, Utterance};
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Default)]
    struct CaptureBackend {
        spoken: Mutex<Vec<String>>,
    }

    impl SpeechBackend for CaptureBackend {
        fn available(&self) -> bool {
            true
        }

        fn speak(&self, utterance: &Utterance, done: Box<dyn FnOnce() + Send>) {
            self.spoken.lock().push(utterance.text.clone());
            done();
        }

        fn cancel(&self) {}
    }

    #[tokio::test]
    async fn route_change_speaks_page_description() {
        let backend = Arc::new(CaptureBackend::default());
        let narrator = RouteNarrator::new(
            VoiceAssistant::new(backend.clone()),
            Duration::ZERO,
        );

        narrator.route_changed(RouteKey::Filing).await;

        let spoken = backend.spoken.lock();
        assert_eq!(spoken.len(), 1);
        assert!(spoken[0].contains("filing wizard"));
    }

    #[tokio::test]
    async fn undescribed_route_is_skipped() {
        let backend = Arc::new(CaptureBackend::default());
        let narrator = RouteNarrator::new(
            VoiceAssistant::new(backend.clone()),
            Duration::ZERO,
        );

        narrator.route_changed(RouteKey::NotFound).await;
        assert!(backend.spoken.lock().is_empty());
    }
}
