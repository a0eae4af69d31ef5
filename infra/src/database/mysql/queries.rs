//! Raw SQL behind the MySQL repositories.
//!
//! Every query is generic over the executor so the same statements run
//! against the shared pool in production and against a per-test
//! transaction (always rolled back) in the integration suite.

use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, Executor, MySql, Row};

use gb_core::domain::entities::group::{Group, NewGroup};
use gb_core::domain::entities::user::User;

/// Map a `users` row to the domain entity
fn row_to_user(row: &MySqlRow) -> Result<User, sqlx::Error> {
    Ok(User {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        email: row.try_get("email")?,
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
    })
}

/// Map a `groups` row to the domain entity
fn row_to_group(row: &MySqlRow) -> Result<Group, sqlx::Error> {
    Ok(Group {
        id: row.try_get("id")?,
        group_name: row.try_get("group_name")?,
        description: row.try_get("description")?,
        user_id: row.try_get("user_id")?,
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
    })
}

pub async fn find_user_by_id<'e, E>(executor: E, id: i64) -> Result<Option<User>, sqlx::Error>
where
    E: Executor<'e, Database = MySql>,
{
    let query = r#"
        SELECT id, username, email, created_at
        FROM users
        WHERE id = ?
        LIMIT 1
    "#;

    let row = sqlx::query(query).bind(id).fetch_optional(executor).await?;

    match row {
        Some(row) => Ok(Some(row_to_user(&row)?)),
        None => Ok(None),
    }
}

pub async fn user_exists_by_id<'e, E>(executor: E, id: i64) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = MySql>,
{
    let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE id = ?) AS present")
        .bind(id)
        .fetch_one(executor)
        .await?;

    let present: i64 = row.try_get("present")?;
    Ok(present != 0)
}

/// Insert a validated group and return it with the store-assigned id
pub async fn insert_group<'e, E>(
    executor: E,
    group: NewGroup,
    created_at: DateTime<Utc>,
) -> Result<Group, sqlx::Error>
where
    E: Executor<'e, Database = MySql>,
{
    let query = r#"
        INSERT INTO groups (group_name, description, user_id, created_at)
        VALUES (?, ?, ?, ?)
    "#;

    let result = sqlx::query(query)
        .bind(&group.group_name)
        .bind(&group.description)
        .bind(group.user_id)
        .bind(created_at)
        .execute(executor)
        .await?;

    let id = result.last_insert_id() as i64;
    Ok(group.into_group(id, created_at))
}

pub async fn find_group_by_id<'e, E>(executor: E, id: i64) -> Result<Option<Group>, sqlx::Error>
where
    E: Executor<'e, Database = MySql>,
{
    let query = r#"
        SELECT id, group_name, description, user_id, created_at
        FROM groups
        WHERE id = ?
        LIMIT 1
    "#;

    let row = sqlx::query(query).bind(id).fetch_optional(executor).await?;

    match row {
        Some(row) => Ok(Some(row_to_group(&row)?)),
        None => Ok(None),
    }
}

pub async fn count_groups<'e, E>(executor: E) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = MySql>,
{
    let row = sqlx::query("SELECT COUNT(*) AS total FROM groups")
        .fetch_one(executor)
        .await?;

    let total: i64 = row.try_get("total")?;
    Ok(total as u64)
}
