//! Repository interfaces (ports) for the persistence layer.

pub mod group;
pub mod user;

pub use group::{GroupRepository, MockGroupRepository};
pub use user::{MockUserRepository, UserRepository};
