//! MySQL implementation of the UserRepository trait.
//!
//! Read-only: user rows are created by the signup subsystem. This
//! implementation only answers the lookups group creation depends on.

use async_trait::async_trait;
use sqlx::MySqlPool;

use gb_core::domain::entities::user::User;
use gb_core::errors::DomainError;
use gb_core::repositories::UserRepository;

use super::queries;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        queries::find_user_by_id(&self.pool, id)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("user lookup failed: {}", e),
            })
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        queries::user_exists_by_id(&self.pool, id)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("user existence check failed: {}", e),
            })
    }
}
