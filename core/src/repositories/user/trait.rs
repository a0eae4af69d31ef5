//! User repository trait defining the read-side interface for user data.
//!
//! Group creation only ever reads users: the referenced `user_id` must
//! exist before a dependent group row is accepted. User creation and
//! mutation belong to the signup/signin subsystem and are not part of
//! this contract.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity lookups
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given id
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Check whether a user exists with the given id
    ///
    /// Referential-integrity primitive for foreign keys pointing at users.
    ///
    /// # Returns
    /// * `Ok(true)` - User exists
    /// * `Ok(false)` - User does not exist
    /// * `Err(DomainError)` - Database error occurred
    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError>;
}
