//! Taxflow voice assistant
//!
//! Speech-synthesis narration of pages and UI actions:
//! - [`VoiceAssistant`]: the engine. Mute state, single-flight utterances,
//!   canned phrase lookup, personalization, and observer callbacks on
//!   utterance start/stop.
//! - [`RouteNarrator`]: the bridge between navigation/session changes and
//!   the engine.
//!
//! The platform speech capability sits behind [`SpeechBackend`]; when it is
//! unavailable every operation is a silent no-op and nothing propagates.
//! The engine is an explicitly constructed service, injected where needed —
//! there is no global instance.

pub mod backend;
pub mod engine;
pub mod narrator;
pub mod phrases;

pub use backend::{ConsoleBackend, SilentBackend, SpeechBackend, Utterance};
pub use engine::{SpeakingEvent, VoiceAssistant, SPEECH_RATE};
pub use narrator::RouteNarrator;
