//! Request and response data transfer objects.

pub mod group;

pub use group::{CreateGroupRequest, GroupCreatedResponse, MessageBody};
