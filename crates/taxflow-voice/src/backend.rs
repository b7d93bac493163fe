//! Platform speech boundary
//!
//! The engine never talks to a speech API directly; it goes through
//! [`SpeechBackend`] so the platform capability stays swappable and tests
//! can record what would have been spoken.

/// One utterance handed to the platform
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    /// Text to synthesize
    pub text: String,
    /// Speech rate, 1.0 being the platform default
    pub rate: f32,
}

/// Platform speech synthesis capability
pub trait SpeechBackend: Send + Sync {
    /// Whether synthesis is available at all
    ///
    /// When false, the engine treats every operation as a no-op.
    fn available(&self) -> bool;

    /// Start synthesizing `utterance`; call `done` exactly once when the
    /// utterance finishes or is cancelled
    fn speak(&self, utterance: &Utterance, done: Box<dyn FnOnce() + Send>);

    /// Cancel any in-flight utterance
    fn cancel(&self);
}

/// Backend for platforms without speech synthesis
///
/// Reports unavailable; the engine silently skips all speech.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentBackend;

impl SpeechBackend for SilentBackend {
    fn available(&self) -> bool {
        false
    }

    fn speak(&self, _utterance: &Utterance, done: Box<dyn FnOnce() + Send>) {
        done();
    }

    fn cancel(&self) {}
}

/// Backend that prints utterances to stdout and completes immediately
///
/// Used by the demo binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleBackend;

impl SpeechBackend for ConsoleBackend {
    fn available(&self) -> bool {
        true
    }

    fn speak(&self, utterance: &Utterance, done: Box<dyn FnOnce() + Send>) {
        println!("[voice] {}", utterance.text);
        done();
    }

    fn cancel(&self) {}
}
