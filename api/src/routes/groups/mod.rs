//! Group endpoints.

pub mod create;

use std::sync::Arc;

use gb_core::repositories::{GroupRepository, UserRepository};
use gb_core::services::group::GroupService;

/// Application state that holds shared services
pub struct AppState<U, G>
where
    U: UserRepository,
    G: GroupRepository,
{
    pub group_service: Arc<GroupService<U, G>>,
}
