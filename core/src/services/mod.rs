//! Business services orchestrating domain operations.

pub mod group;
pub mod token;

pub use group::{CreateGroupCommand, GroupService};
pub use token::TokenService;
