//! MySQL repository implementations.

pub mod queries;

mod group_repository_impl;
mod user_repository_impl;

pub use group_repository_impl::MySqlGroupRepository;
pub use user_repository_impl::MySqlUserRepository;
