//! Domain entities.

pub mod group;
pub mod token;
pub mod user;

pub use group::{Group, NewGroup};
pub use token::Claims;
pub use user::User;
