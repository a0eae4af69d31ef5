//! User entity referenced by group ownership.
//!
//! Users are created by the signup/signin subsystem; this crate only reads
//! them to confirm that a cited `user_id` exists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier (AUTO_INCREMENT)
    pub id: i64,

    /// Display name chosen at signup
    pub username: String,

    /// Email address used for signin
    pub email: String,

    /// Timestamp when the user registered
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: i64, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = User::new(1, "tester", "test@test2.test");
        assert_eq!(user.id, 1);
        assert_eq!(user.username, "tester");
        assert_eq!(user.email, "test@test2.test");
    }
}
