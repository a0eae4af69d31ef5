//! Group repository trait defining the interface for group persistence.

use async_trait::async_trait;

use crate::domain::entities::group::{Group, NewGroup};
use crate::errors::DomainError;

/// Repository trait for Group entity persistence operations
///
/// Implementations handle the actual database operations while keeping the
/// abstraction boundary between domain and infrastructure layers. Callers
/// pass a [`NewGroup`] that has already been validated; the store assigns
/// the identifier.
#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Persist a new group and return the stored row
    ///
    /// # Returns
    /// * `Ok(Group)` - The created group with its store-assigned id
    /// * `Err(DomainError)` - Insert failed
    ///
    /// No uniqueness constraint exists on the name: inserting the same
    /// payload twice creates two distinct groups.
    async fn create(&self, group: NewGroup) -> Result<Group, DomainError>;

    /// Find a group by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Group))` - Group found
    /// * `Ok(None)` - No group found with given id
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_id(&self, id: i64) -> Result<Option<Group>, DomainError>;

    /// Count all stored groups
    ///
    /// Used by tests to assert that failure paths leave the store
    /// unmodified.
    async fn count(&self) -> Result<u64, DomainError>;
}
