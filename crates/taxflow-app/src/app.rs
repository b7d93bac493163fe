//! The application orchestrator
//!
//! Wires the injected services together and owns the two pieces of client
//! state: the session state and the current route. Every navigation runs
//! the gate and acts on its decision (render + narrate, or notify +
//! redirect).

use crate::config::AppConfig;
use parking_lot::Mutex;
use std::sync::Arc;
use taxflow_auth::{AuthError, AuthService, Session};
use taxflow_gate::{AccessGate, GateDecision, SessionState};
use taxflow_returns::ReturnsRepository;
use taxflow_store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};
use taxflow_types::{Notifier, RouteKey};
use taxflow_voice::{RouteNarrator, SpeechBackend, VoiceAssistant};

/// One running client instance
pub struct TaxApp {
    config: AppConfig,
    auth: AuthService,
    returns: ReturnsRepository,
    voice: VoiceAssistant,
    narrator: RouteNarrator,
    gate: AccessGate,
    notifier: Arc<dyn Notifier>,
    session_state: Mutex<SessionState>,
    current_route: Mutex<RouteKey>,
}

impl std::fmt::Debug for TaxApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaxApp")
            .field("route", &*self.current_route.lock())
            .finish_non_exhaustive()
    }
}

impl TaxApp {
    /// Assemble an app over the injected store, speech backend, and notifier
    #[must_use]
    pub fn new(
        config: AppConfig,
        store: Arc<dyn KeyValueStore>,
        backend: Arc<dyn SpeechBackend>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let auth = AuthService::new(
            store.clone(),
            notifier.clone(),
            config.simulated_network_delay,
        );
        let returns = ReturnsRepository::new(store, notifier.clone())
            .with_missing_policy(config.missing_record_policy)
            .with_simulated_delay(config.simulated_network_delay);
        let voice = VoiceAssistant::new(backend);
        let narrator = RouteNarrator::new(voice.clone(), config.narration_settle_delay);
        Self {
            config,
            auth,
            returns,
            voice,
            narrator,
            gate: AccessGate::with_defaults(),
            notifier,
            session_state: Mutex::new(SessionState::Restoring),
            current_route: Mutex::new(RouteKey::Login),
        }
    }

    /// Assemble an app whose store follows `config.data_file`
    ///
    /// A configured file opens a [`JsonFileStore`]; otherwise state lives
    /// in a fresh [`MemoryStore`].
    ///
    /// # Errors
    /// `StoreError` if the backing file exists but cannot be opened.
    pub fn with_default_store(
        config: AppConfig,
        backend: Arc<dyn SpeechBackend>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, StoreError> {
        let store: Arc<dyn KeyValueStore> = match &config.data_file {
            Some(path) => Arc::new(JsonFileStore::open(path)?),
            None => Arc::new(MemoryStore::new()),
        };
        Ok(Self::new(config, store, backend, notifier))
    }

    /// Restore any persisted session and land on the first page
    ///
    /// # Errors
    /// `AuthError::Store` if session storage is unreadable.
    pub async fn start(&self) -> Result<(), AuthError> {
        let restored = self.auth.restore()?;
        self.narrator.user_changed(restored.as_ref());
        *self.session_state.lock() = match restored {
            Some(session) => SessionState::Active(session),
            None => SessionState::Anonymous,
        };
        let landing = match &*self.session_state.lock() {
            SessionState::Active(_) => RouteKey::Dashboard,
            _ => RouteKey::Login,
        };
        self.navigate(landing).await;
        Ok(())
    }

    /// Navigate to `route`, honoring the gate's decision
    ///
    /// Renders and narrates on success; on denial notifies, narrates the
    /// denial, and lands on the unauthorized page.
    pub async fn navigate(&self, route: RouteKey) -> GateDecision {
        let decision = {
            let state = self.session_state.lock();
            self.gate.evaluate(&state, route, self.auth.permissions())
        };

        match decision {
            GateDecision::Render => {
                *self.current_route.lock() = route;
                self.narrator.route_changed(route).await;
            }
            GateDecision::RedirectToLogin => {
                *self.current_route.lock() = RouteKey::Login;
                self.narrator.route_changed(RouteKey::Login).await;
            }
            GateDecision::RedirectToUnauthorized => {
                self.notifier
                    .error("You do not have permission to access this page.");
                self.voice.speak_element("access_denied");
                *self.current_route.lock() = RouteKey::Unauthorized;
            }
            GateDecision::Loading => {}
        }
        decision
    }

    /// Log in and land on the dashboard
    ///
    /// # Errors
    /// Propagates [`AuthError`]; the session state is untouched on failure.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let session = self.auth.login(email, password).await?;
        self.voice.set_user(Some(&session));
        *self.session_state.lock() = SessionState::Active(session.clone());
        self.navigate(RouteKey::Dashboard).await;
        Ok(session)
    }

    /// Create an account, log in, and land on the dashboard
    ///
    /// # Errors
    /// Propagates [`AuthError`].
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<Session, AuthError> {
        let session = self.auth.signup(email, password, name).await?;
        self.voice.set_user(Some(&session));
        *self.session_state.lock() = SessionState::Active(session.clone());
        self.navigate(RouteKey::Dashboard).await;
        Ok(session)
    }

    /// Log out and return to the login page
    ///
    /// # Errors
    /// `AuthError::Store` if clearing the persisted session fails.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.auth.logout()?;
        self.voice.set_user(None);
        *self.session_state.lock() = SessionState::Anonymous;
        self.navigate(RouteKey::Login).await;
        Ok(())
    }

    /// The configuration this app was built with
    #[inline]
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Authentication service
    #[inline]
    #[must_use]
    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    /// Returns repository
    #[inline]
    #[must_use]
    pub fn returns(&self) -> &ReturnsRepository {
        &self.returns
    }

    /// Voice engine
    #[inline]
    #[must_use]
    pub fn voice(&self) -> &VoiceAssistant {
        &self.voice
    }

    /// Narration bridge
    #[inline]
    #[must_use]
    pub fn narrator(&self) -> &RouteNarrator {
        &self.narrator
    }

    /// Route currently shown
    #[must_use]
    pub fn current_route(&self) -> RouteKey {
        *self.current_route.lock()
    }

    /// Snapshot of the session state
    #[must_use]
    pub fn session_state(&self) -> SessionState {
        self.session_state.lock().clone()
    }
}
