//! DTOs for the group endpoints.

use serde::{Deserialize, Serialize};

use gb_core::domain::entities::group::Group;
use gb_core::services::group::CreateGroupCommand;

/// Request body for `POST /groups`
///
/// All fields are optional on purpose: a missing key must flow into the
/// ordered field validator (which reports the contract's message for it)
/// instead of being bounced by the JSON deserializer.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGroupRequest {
    pub group_name: Option<String>,
    pub description: Option<String>,
    pub user_id: Option<i64>,
}

impl From<CreateGroupRequest> for CreateGroupCommand {
    fn from(request: CreateGroupRequest) -> Self {
        Self {
            group_name: request.group_name,
            description: request.description,
            user_id: request.user_id,
        }
    }
}

/// Success envelope for a created group (`201 Created`)
#[derive(Debug, Serialize)]
pub struct GroupCreatedResponse {
    pub group: Group,
}

/// Message-only body used by every error response
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageBody {
    pub msg: String,
}

impl MessageBody {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
