//! Group creation command handler.

use std::sync::Arc;

use crate::domain::entities::group::{Group, NewGroup};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{GroupRepository, UserRepository};

use super::validator::validate_fields;

/// Raw group-creation payload as received from the transport layer
///
/// Fields are optional because missing JSON keys must reach the ordered
/// validator rather than being rejected at deserialization time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateGroupCommand {
    pub group_name: Option<String>,
    pub description: Option<String>,
    pub user_id: Option<i64>,
}

/// Service orchestrating group creation
///
/// Stages, each short-circuiting with its own failure: field validation,
/// owner existence check, insert. Authentication happens upstream in the
/// transport layer; by the time a command reaches this service the caller
/// identity has already been established.
pub struct GroupService<U, G>
where
    U: UserRepository,
    G: GroupRepository,
{
    /// User repository for the owner existence check
    user_repository: Arc<U>,
    /// Group repository for persistence
    group_repository: Arc<G>,
}

impl<U, G> GroupService<U, G>
where
    U: UserRepository,
    G: GroupRepository,
{
    /// Create a new group service
    pub fn new(user_repository: Arc<U>, group_repository: Arc<G>) -> Self {
        Self {
            user_repository,
            group_repository,
        }
    }

    /// Create a group from a raw command
    ///
    /// Performs exactly one read (owner existence) and one write (insert)
    /// on the success path, and zero writes on every failure path. Any
    /// persistence failure propagates unretried.
    ///
    /// # Returns
    ///
    /// * `Ok(Group)` - The persisted group with its store-assigned id
    /// * `Err(DomainError)` - Validation, reference, or database failure
    pub async fn create_group(&self, command: CreateGroupCommand) -> DomainResult<Group> {
        validate_fields(&command)?;

        // An absent user_id can never reference an existing user.
        let user_id = command.user_id.ok_or(DomainError::ReferenceNotFound)?;
        if !self.user_repository.exists_by_id(user_id).await? {
            return Err(DomainError::ReferenceNotFound);
        }

        // Both fields are guaranteed present once validation has passed.
        let new_group = NewGroup {
            group_name: command.group_name.unwrap_or_default(),
            description: command.description.unwrap_or_default(),
            user_id,
        };

        let group = self.group_repository.create(new_group).await?;
        tracing::info!(group_id = group.id, user_id, "group created");

        Ok(group)
    }
}
