//! Voice assistant engine

use crate::backend::{SpeechBackend, Utterance};
use crate::phrases;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use taxflow_auth::Session;
use taxflow_types::RouteKey;

/// Reduced speech rate used for all narration
pub const SPEECH_RATE: f32 = 0.9;

/// Observer notification for the speaking indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeakingEvent {
    /// An utterance started
    Started,
    /// The in-flight utterance finished or was cancelled
    Finished,
}

type Observer = Box<dyn Fn(SpeakingEvent) + Send + Sync>;

struct Inner {
    backend: Arc<dyn SpeechBackend>,
    muted: AtomicBool,
    speaking: AtomicBool,
    // Bumped on every speak/cancel so a stale completion callback from a
    // cancelled utterance cannot clear the flag of its successor.
    generation: AtomicU64,
    user: Mutex<Option<Session>>,
    observers: Mutex<Vec<Observer>>,
}

impl Inner {
    fn emit(&self, event: SpeakingEvent) {
        for observer in self.observers.lock().iter() {
            observer(event);
        }
    }
}

/// Speech-synthesis narration engine
///
/// Single-flight: starting an utterance cancels whatever was in flight.
/// Every operation is a silent no-op when muted or when the backend reports
/// synthesis unavailable; nothing here ever fails outward.
#[derive(Clone)]
pub struct VoiceAssistant {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for VoiceAssistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoiceAssistant")
            .field("muted", &self.muted())
            .field("speaking", &self.speaking())
            .finish_non_exhaustive()
    }
}

impl VoiceAssistant {
    /// Create an engine over the given platform backend
    #[must_use]
    pub fn new(backend: Arc<dyn SpeechBackend>) -> Self {
        Self {
            inner: Arc::new(Inner {
                backend,
                muted: AtomicBool::new(false),
                speaking: AtomicBool::new(false),
                generation: AtomicU64::new(0),
                user: Mutex::new(None),
                observers: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Speak raw text
    ///
    /// No-op when muted or unavailable. Cancels any in-flight utterance
    /// first. Does not personalize; callers wanting the personalized framing
    /// go through [`VoiceAssistant::personalize`] explicitly.
    pub fn speak(&self, text: &str) {
        if self.muted() || !self.inner.backend.available() {
            return;
        }

        self.inner.backend.cancel();
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.speaking.store(true, Ordering::SeqCst);
        self.inner.emit(SpeakingEvent::Started);
        tracing::debug!(text, "speaking");

        let inner = Arc::clone(&self.inner);
        let utterance = Utterance {
            text: text.to_string(),
            rate: SPEECH_RATE,
        };
        self.inner.backend.speak(
            &utterance,
            Box::new(move || {
                if inner.generation.load(Ordering::SeqCst) == generation {
                    inner.speaking.store(false, Ordering::SeqCst);
                    inner.emit(SpeakingEvent::Finished);
                }
            }),
        );
    }

    /// Speak the canned phrase for a UI element; unknown keys are skipped
    pub fn speak_element(&self, key: &str) {
        if let Some(phrase) = phrases::element_phrase(key) {
            self.speak(phrase);
        }
    }

    /// Speak the page description for a route; undescribed routes are skipped
    pub fn speak_page(&self, route: RouteKey) {
        if let Some(phrase) = phrases::page_phrase(route) {
            self.speak(phrase);
        }
    }

    /// Flip the mute state, returning the new state
    ///
    /// Muting cancels in-flight speech; unmuting immediately speaks a
    /// personalized activation phrase.
    pub fn toggle(&self) -> bool {
        let now_muted = !self.inner.muted.load(Ordering::SeqCst);
        self.inner.muted.store(now_muted, Ordering::SeqCst);
        if now_muted {
            self.cancel();
        } else {
            let phrase = self.personalize("Voice assistant is back on.");
            self.speak(&phrase);
        }
        now_muted
    }

    /// Cancel any in-flight utterance and clear the speaking flag
    pub fn cancel(&self) {
        self.inner.generation.fetch_add(1, Ordering::SeqCst);
        self.inner.backend.cancel();
        if self.inner.speaking.swap(false, Ordering::SeqCst) {
            self.inner.emit(SpeakingEvent::Finished);
        }
    }

    /// Store the identity used by [`VoiceAssistant::personalize`]
    pub fn set_user(&self, session: Option<&Session>) {
        *self.inner.user.lock() = session.cloned();
    }

    /// Prefix role framing and first name onto `text`
    ///
    /// Without a stored user, `text` comes back unchanged.
    #[must_use]
    pub fn personalize(&self, text: &str) -> String {
        match self.inner.user.lock().as_ref() {
            Some(session) => format!(
                "{}, as a {}: {}",
                session.first_name(),
                session.role.label(),
                text
            ),
            None => text.to_string(),
        }
    }

    /// Current mute state
    #[inline]
    #[must_use]
    pub fn muted(&self) -> bool {
        self.inner.muted.load(Ordering::SeqCst)
    }

    /// Whether an utterance is in flight
    #[inline]
    #[must_use]
    pub fn speaking(&self) -> bool {
        self.inner.speaking.load(Ordering::SeqCst)
    }

    /// Register an observer for utterance start/stop
    pub fn subscribe(&self, observer: impl Fn(SpeakingEvent) + Send + Sync + 'static) {
        self.inner.observers.lock().push(Box::new(observer));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex as PlMutex;
    use taxflow_types::{Role, UserId};

    /// Backend that records utterances and holds completions until released
    #[derive(Default)]
    struct RecordingBackend {
        spoken: PlMutex<Vec<String>>,
        cancels: AtomicU64,
        pending: PlMutex<Vec<Box<dyn FnOnce() + Send>>>,
    }

    impl RecordingBackend {
        fn finish_all(&self) {
            for done in self.pending.lock().drain(..) {
                done();
            }
        }
    }

    impl SpeechBackend for RecordingBackend {
        fn available(&self) -> bool {
            true
        }

        fn speak(&self, utterance: &Utterance, done: Box<dyn FnOnce() + Send>) {
            self.spoken.lock().push(utterance.text.clone());
            self.pending.lock().push(done);
        }

        fn cancel(&self) {
            self.cancels.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn session() -> Session {
        Session {
            user_id: UserId::new(),
            email: "user@example.com".to_string(),
            name: "John Taxpayer".to_string(),
            role: Role::Taxpayer,
            avatar: None,
        }
    }

    #[test]
    fn muted_speak_is_a_no_op() {
        let backend = Arc::new(RecordingBackend::default());
        let engine = VoiceAssistant::new(backend.clone());

        assert!(engine.toggle()); // now muted
        engine.speak("hello");
        assert!(backend.spoken.lock().is_empty());
        assert!(!engine.speaking());
    }

    #[test]
    fn unavailable_backend_never_speaks() {
        let engine = VoiceAssistant::new(Arc::new(crate::SilentBackend));
        engine.speak("hello");
        assert!(!engine.speaking());
    }

    #[test]
    fn speak_is_single_flight() {
        let backend = Arc::new(RecordingBackend::default());
        let engine = VoiceAssistant::new(backend.clone());

        engine.speak("first");
        engine.speak("second");

        // Second speak cancelled the first
        assert_eq!(backend.cancels.load(Ordering::SeqCst), 2);
        assert!(engine.speaking());

        // Stale completion of "first" must not clear the flag for "second"
        let first_done = backend.pending.lock().remove(0);
        first_done();
        assert!(engine.speaking());

        backend.finish_all();
        assert!(!engine.speaking());
    }

    #[test]
    fn unmute_speaks_personalized_activation() {
        let backend = Arc::new(RecordingBackend::default());
        let engine = VoiceAssistant::new(backend.clone());
        engine.set_user(Some(&session()));

        engine.toggle(); // mute
        engine.toggle(); // unmute

        let spoken = backend.spoken.lock();
        assert_eq!(spoken.len(), 1);
        assert!(spoken[0].starts_with("John, as a taxpayer:"));
    }

    #[test]
    fn speak_never_personalizes_on_its_own() {
        let backend = Arc::new(RecordingBackend::default());
        let engine = VoiceAssistant::new(backend.clone());
        engine.set_user(Some(&session()));

        engine.speak("Plain text.");
        assert_eq!(backend.spoken.lock()[0], "Plain text.");
    }

    #[test]
    fn unknown_phrase_keys_are_skipped() {
        let backend = Arc::new(RecordingBackend::default());
        let engine = VoiceAssistant::new(backend.clone());

        engine.speak_element("no_such_element");
        engine.speak_page(RouteKey::NotFound);
        assert!(backend.spoken.lock().is_empty());
    }

    #[test]
    fn observers_see_start_and_finish() {
        let backend = Arc::new(RecordingBackend::default());
        let engine = VoiceAssistant::new(backend.clone());

        let events = Arc::new(PlMutex::new(Vec::new()));
        let sink = events.clone();
        engine.subscribe(move |e| sink.lock().push(e));

        engine.speak("watched");
        backend.finish_all();

        assert_eq!(
            *events.lock(),
            vec![SpeakingEvent::Started, SpeakingEvent::Finished]
        );
    }
}
