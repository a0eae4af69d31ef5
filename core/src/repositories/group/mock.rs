//! Mock implementation of GroupRepository for testing

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::group::{Group, NewGroup};
use crate::errors::DomainError;

use super::trait_::GroupRepository;

/// In-memory group repository for testing
///
/// Ids are assigned from a monotonically increasing counter, mirroring
/// AUTO_INCREMENT semantics.
pub struct MockGroupRepository {
    groups: Arc<RwLock<HashMap<i64, Group>>>,
    next_id: AtomicI64,
    fail_inserts: bool,
}

impl MockGroupRepository {
    /// Create an empty mock repository
    pub fn new() -> Self {
        Self {
            groups: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
            fail_inserts: false,
        }
    }

    /// Create a mock repository whose inserts fail with a database error
    pub fn failing() -> Self {
        Self {
            fail_inserts: true,
            ..Self::new()
        }
    }
}

impl Default for MockGroupRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GroupRepository for MockGroupRepository {
    async fn create(&self, group: NewGroup) -> Result<Group, DomainError> {
        if self.fail_inserts {
            return Err(DomainError::Database {
                message: "mock insert failure".to_string(),
            });
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let group = group.into_group(id, Utc::now());

        let mut groups = self.groups.write().await;
        groups.insert(id, group.clone());
        Ok(group)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Group>, DomainError> {
        let groups = self.groups.read().await;
        Ok(groups.get(&id).cloned())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let groups = self.groups.read().await;
        Ok(groups.len() as u64)
    }
}
