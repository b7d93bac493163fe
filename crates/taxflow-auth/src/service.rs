//! Authentication service
//!
//! Owns the single active session, the user directory, and the permission
//! table. Login and signup simulate network latency with a configured
//! delay; the timer always completes, there is no retry path.

use crate::directory::{UserDirectory, UserRecord};
use crate::error::AuthError;
use crate::permissions::PermissionTable;
use crate::session::Session;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use taxflow_store::KeyValueStore;
use taxflow_types::{Notifier, Role, UserId};

/// Store key holding the persisted session blob
pub const SESSION_KEY: &str = "taxflow_session";

/// Session lifecycle and permission checks
#[derive(Clone)]
pub struct AuthService {
    directory: Arc<UserDirectory>,
    permissions: Arc<PermissionTable>,
    session: Arc<Mutex<Option<Session>>>,
    store: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn Notifier>,
    simulated_delay: Duration,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("directory_len", &self.directory.len())
            .field("active", &self.session.lock().is_some())
            .finish_non_exhaustive()
    }
}

impl AuthService {
    /// Create a service over the demo user directory
    #[must_use]
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
        simulated_delay: Duration,
    ) -> Self {
        Self::with_directory(
            UserDirectory::with_demo_users(),
            store,
            notifier,
            simulated_delay,
        )
    }

    /// Create a service over a custom directory
    #[must_use]
    pub fn with_directory(
        directory: UserDirectory,
        store: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
        simulated_delay: Duration,
    ) -> Self {
        Self {
            directory: Arc::new(directory),
            permissions: Arc::new(PermissionTable::with_defaults()),
            session: Arc::new(Mutex::new(None)),
            store,
            notifier,
            simulated_delay,
        }
    }

    /// The permission table in force
    #[inline]
    #[must_use]
    pub fn permissions(&self) -> &PermissionTable {
        &self.permissions
    }

    /// Currently active session, if any
    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.session.lock().clone()
    }

    /// Restore a persisted session at startup
    ///
    /// Absence of the blob means unauthenticated. A corrupt blob is treated
    /// the same way after clearing it, so a bad write can never lock the
    /// user out.
    pub fn restore(&self) -> Result<Option<Session>, AuthError> {
        let Some(raw) = self.store.get(SESSION_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => {
                tracing::info!(email = %session.email, role = %session.role, "session restored");
                *self.session.lock() = Some(session.clone());
                Ok(Some(session))
            }
            Err(e) => {
                tracing::warn!(error = %e, "persisted session corrupt, clearing");
                self.store.delete(SESSION_KEY)?;
                Ok(None)
            }
        }
    }

    /// Authenticate against the directory
    ///
    /// Email lookup is case-insensitive, the password match exact. Failure
    /// leaves any prior session untouched.
    ///
    /// # Errors
    /// - `AuthError::InvalidCredentials` on any mismatch
    /// - `AuthError::Store` if persisting the session fails
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        tokio::time::sleep(self.simulated_delay).await;

        let matched = self
            .directory
            .find(email)
            .filter(|user| user.password == password);

        let Some(user) = matched else {
            tracing::warn!(email, "login rejected");
            self.notifier.error("Invalid email or password.");
            return Err(AuthError::InvalidCredentials);
        };

        let session = self.establish(&user)?;
        self.notifier
            .success(&format!("Welcome back, {}!", session.first_name()));
        Ok(session)
    }

    /// Create an account and log straight in
    ///
    /// New accounts always get [`Role::Taxpayer`].
    ///
    /// # Errors
    /// - `AuthError::EmailAlreadyExists` on a duplicate email (case-insensitive)
    /// - `AuthError::Store` if persisting the session fails
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<Session, AuthError> {
        tokio::time::sleep(self.simulated_delay).await;

        if self.directory.contains(email) {
            self.notifier
                .error("An account with this email already exists.");
            return Err(AuthError::EmailAlreadyExists(email.to_string()));
        }

        let user = UserRecord {
            id: UserId::new(),
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
            role: Role::Taxpayer,
            avatar: None,
        };
        self.directory.insert(user.clone());

        let session = self.establish(&user)?;
        self.notifier
            .success(&format!("Welcome to Taxflow, {}!", session.first_name()));
        Ok(session)
    }

    /// Clear the session and its persisted copy
    pub fn logout(&self) -> Result<(), AuthError> {
        let prior = self.session.lock().take();
        if let Some(session) = prior {
            tracing::info!(email = %session.email, "logged out");
        }
        self.store.delete(SESSION_KEY)?;
        self.notifier.success("You have been signed out.");
        Ok(())
    }

    /// Exact-match permission check against the active session's role
    ///
    /// Always false without a session.
    #[must_use]
    pub fn has_permission(&self, token: &str) -> bool {
        self.session
            .lock()
            .as_ref()
            .is_some_and(|s| self.permissions.allows(s.role, token))
    }

    fn establish(&self, user: &UserRecord) -> Result<Session, AuthError> {
        let session = Session {
            user_id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
            avatar: user.avatar.clone(),
        };
        let raw = serde_json::to_string(&session)?;
        self.store.put(SESSION_KEY, &raw)?;
        tracing::info!(email = %session.email, role = %session.role, "session established");
        *self.session.lock() = Some(session.clone());
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taxflow_store::MemoryStore;
    use taxflow_types::NullNotifier;

    fn service() -> AuthService {
        AuthService::new(
            Arc::new(MemoryStore::new()),
            Arc::new(NullNotifier),
            Duration::ZERO,
        )
    }

    #[tokio::test]
    async fn login_succeeds_for_demo_taxpayer() {
        let auth = service();
        let session = auth.login("user@example.com", "password").await.unwrap();
        assert_eq!(session.role, Role::Taxpayer);
        assert!(auth.has_permission("file_taxes"));
        assert!(!auth.has_permission("manage_users"));
    }

    #[tokio::test]
    async fn bad_password_leaves_prior_session_untouched() {
        let auth = service();
        auth.login("user@example.com", "password").await.unwrap();

        let err = auth.login("user@example.com", "wrong").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        // Prior session still active
        assert_eq!(auth.session().unwrap().email, "user@example.com");
    }

    #[tokio::test]
    async fn login_without_session_has_no_permissions() {
        let auth = service();
        assert!(!auth.has_permission("view_dashboard"));
    }

    #[tokio::test]
    async fn signup_defaults_to_taxpayer_and_rejects_duplicates() {
        let auth = service();
        let session = auth
            .signup("new@example.com", "hunter2", "New Person")
            .await
            .unwrap();
        assert_eq!(session.role, Role::Taxpayer);

        let err = auth
            .signup("NEW@example.com", "other", "Other")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::EmailAlreadyExists(_)));
    }

    #[tokio::test]
    async fn logout_clears_persisted_session() {
        let store = Arc::new(MemoryStore::new());
        let auth = AuthService::new(store.clone(), Arc::new(NullNotifier), Duration::ZERO);

        auth.login("admin@example.com", "admin123").await.unwrap();
        assert!(store.get(SESSION_KEY).unwrap().is_some());

        auth.logout().unwrap();
        assert!(auth.session().is_none());
        assert!(store.get(SESSION_KEY).unwrap().is_none());
    }

    #[tokio::test]
    async fn restore_roundtrips_and_clears_corrupt_blobs() {
        let store = Arc::new(MemoryStore::new());
        {
            let auth = AuthService::new(store.clone(), Arc::new(NullNotifier), Duration::ZERO);
            auth.login("accountant@example.com", "account123")
                .await
                .unwrap();
        }

        let auth = AuthService::new(store.clone(), Arc::new(NullNotifier), Duration::ZERO);
        let restored = auth.restore().unwrap().unwrap();
        assert_eq!(restored.role, Role::Accountant);

        store.put(SESSION_KEY, "{not json").unwrap();
        let auth = AuthService::new(store.clone(), Arc::new(NullNotifier), Duration::ZERO);
        assert!(auth.restore().unwrap().is_none());
        assert!(store.get(SESSION_KEY).unwrap().is_none());
    }
}
