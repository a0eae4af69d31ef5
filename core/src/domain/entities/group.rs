//! Group entity: a named collection owned by a user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted group row
///
/// The identifier is assigned by the store (AUTO_INCREMENT); domain code
/// never fabricates one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Unique identifier, system-generated and immutable
    pub id: i64,

    /// Group display name; never empty once persisted
    pub group_name: String,

    /// Group description; at least 10 characters once persisted
    pub description: String,

    /// Owning user; must reference an existing user
    pub user_id: i64,

    /// Timestamp when the group was created
    pub created_at: DateTime<Utc>,
}

/// A validated group that has not been persisted yet
///
/// Constructed only after field validation and the owner existence check
/// have passed, so repositories can insert it without re-checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGroup {
    pub group_name: String,
    pub description: String,
    pub user_id: i64,
}

impl NewGroup {
    /// Attach the store-assigned id and creation timestamp
    pub fn into_group(self, id: i64, created_at: DateTime<Utc>) -> Group {
        Group {
            id,
            group_name: self.group_name,
            description: self.description,
            user_id: self.user_id,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_group_keeps_fields() {
        let new_group = NewGroup {
            group_name: "climbing club".to_string(),
            description: "weekend climbing sessions".to_string(),
            user_id: 7,
        };

        let now = Utc::now();
        let group = new_group.into_group(42, now);

        assert_eq!(group.id, 42);
        assert_eq!(group.group_name, "climbing club");
        assert_eq!(group.description, "weekend climbing sessions");
        assert_eq!(group.user_id, 7);
        assert_eq!(group.created_at, now);
    }

    #[test]
    fn test_group_serialization_shape() {
        let group = Group {
            id: 1,
            group_name: "new test group".to_string(),
            description: "new test group description".to_string(),
            user_id: 1,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&group).unwrap();
        assert_eq!(json["group_name"], "new test group");
        assert_eq!(json["description"], "new test group description");
        assert_eq!(json["user_id"], 1);
    }
}
