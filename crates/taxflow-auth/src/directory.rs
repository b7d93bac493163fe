//! Fixed demo user directory
//!
//! Credentials are plaintext-compared. There is deliberately no hashing and
//! no credential storage requirement beyond this process: the directory is
//! the mock backend the application ships with.

use dashmap::DashMap;
use taxflow_types::{Role, UserId};

/// One account in the directory
#[derive(Debug, Clone)]
pub struct UserRecord {
    /// Stable user identifier
    pub id: UserId,
    /// Login email (stored as given; looked up case-insensitively)
    pub email: String,
    /// Plaintext password
    pub password: String,
    /// Display name
    pub name: String,
    /// Immutable role
    pub role: Role,
    /// Optional avatar reference
    pub avatar: Option<String>,
}

/// In-memory account directory keyed by lowercase email
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: DashMap<String, UserRecord>,
}

impl UserDirectory {
    /// Create an empty directory
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory seeded with the demo accounts
    #[must_use]
    pub fn with_demo_users() -> Self {
        let dir = Self::new();
        dir.insert(UserRecord {
            id: UserId::new(),
            email: "user@example.com".to_string(),
            password: "password".to_string(),
            name: "John Taxpayer".to_string(),
            role: Role::Taxpayer,
            avatar: None,
        });
        dir.insert(UserRecord {
            id: UserId::new(),
            email: "admin@example.com".to_string(),
            password: "admin123".to_string(),
            name: "Sarah Admin".to_string(),
            role: Role::Admin,
            avatar: None,
        });
        dir.insert(UserRecord {
            id: UserId::new(),
            email: "support@example.com".to_string(),
            password: "support123".to_string(),
            name: "Mike Support".to_string(),
            role: Role::Support,
            avatar: None,
        });
        dir.insert(UserRecord {
            id: UserId::new(),
            email: "accountant@example.com".to_string(),
            password: "account123".to_string(),
            name: "Lisa Accountant".to_string(),
            role: Role::Accountant,
            avatar: None,
        });
        dir
    }

    /// Insert or replace an account
    pub fn insert(&self, record: UserRecord) {
        self.users.insert(record.email.to_lowercase(), record);
    }

    /// Look up by email, case-insensitively
    #[must_use]
    pub fn find(&self, email: &str) -> Option<UserRecord> {
        self.users.get(&email.to_lowercase()).map(|r| r.clone())
    }

    /// Check whether an email is taken, case-insensitively
    #[must_use]
    pub fn contains(&self, email: &str) -> bool {
        self.users.contains_key(&email.to_lowercase())
    }

    /// Number of accounts
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Check whether the directory is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let dir = UserDirectory::with_demo_users();
        let user = dir.find("USER@Example.COM").unwrap();
        assert_eq!(user.role, Role::Taxpayer);
        assert!(dir.contains("Admin@Example.com"));
    }

    #[test]
    fn demo_directory_covers_all_roles() {
        let dir = UserDirectory::with_demo_users();
        assert_eq!(dir.len(), 4);
    }
}
