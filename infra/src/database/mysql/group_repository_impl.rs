//! MySQL implementation of the GroupRepository trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::MySqlPool;

use gb_core::domain::entities::group::{Group, NewGroup};
use gb_core::errors::DomainError;
use gb_core::repositories::GroupRepository;

use super::queries;

/// MySQL implementation of GroupRepository
pub struct MySqlGroupRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlGroupRepository {
    /// Create a new MySQL group repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GroupRepository for MySqlGroupRepository {
    async fn create(&self, group: NewGroup) -> Result<Group, DomainError> {
        queries::insert_group(&self.pool, group, Utc::now())
            .await
            .map_err(|e| DomainError::Database {
                message: format!("failed to create group: {}", e),
            })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Group>, DomainError> {
        queries::find_group_by_id(&self.pool, id)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("group lookup failed: {}", e),
            })
    }

    async fn count(&self) -> Result<u64, DomainError> {
        queries::count_groups(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("group count failed: {}", e),
            })
    }
}
