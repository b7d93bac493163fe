//! Testing utilities for the Taxflow workspace
//!
//! Shared test doubles and app fixtures.

#![allow(missing_docs)]

use parking_lot::Mutex;
use std::sync::Arc;
use taxflow_app::{AppConfig, TaxApp};
use taxflow_store::MemoryStore;
use taxflow_types::{NoticeLevel, Notifier};
use taxflow_voice::{SpeechBackend, Utterance};

/// Notifier that records every notification for assertions
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<(NoticeLevel, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices shown so far
    pub fn notices(&self) -> Vec<(NoticeLevel, String)> {
        self.notices.lock().clone()
    }

    /// Messages at a given level
    pub fn messages_at(&self, level: NoticeLevel) -> Vec<String> {
        self.notices
            .lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.notices.lock().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        self.notices.lock().push((level, message.to_string()));
    }
}

/// Speech backend that records utterances and completes them immediately
#[derive(Debug, Default)]
pub struct RecordingSpeech {
    spoken: Mutex<Vec<String>>,
}

impl RecordingSpeech {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything spoken so far, in order
    pub fn spoken(&self) -> Vec<String> {
        self.spoken.lock().clone()
    }

    pub fn clear(&self) {
        self.spoken.lock().clear();
    }
}

impl SpeechBackend for RecordingSpeech {
    fn available(&self) -> bool {
        true
    }

    fn speak(&self, utterance: &Utterance, done: Box<dyn FnOnce() + Send>) {
        self.spoken.lock().push(utterance.text.clone());
        done();
    }

    fn cancel(&self) {}
}

/// Fully wired in-memory app plus handles to its recording doubles
pub struct TestApp {
    pub app: TaxApp,
    pub notifier: Arc<RecordingNotifier>,
    pub speech: Arc<RecordingSpeech>,
    pub store: Arc<MemoryStore>,
}

/// Build an app over an in-memory store with all delays zeroed
#[must_use]
pub fn test_app() -> TestApp {
    test_app_with_config(AppConfig::for_tests())
}

/// Build an app with a custom config, keeping the recording doubles
#[must_use]
pub fn test_app_with_config(config: AppConfig) -> TestApp {
    let notifier = Arc::new(RecordingNotifier::new());
    let speech = Arc::new(RecordingSpeech::new());
    let store = Arc::new(MemoryStore::new());
    let app = TaxApp::new(config, store.clone(), speech.clone(), notifier.clone());
    TestApp {
        app,
        notifier,
        speech,
        store,
    }
}
