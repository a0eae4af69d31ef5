//! Group creation service and its field validator.

pub mod validator;

mod service;

pub use service::{CreateGroupCommand, GroupService};

#[cfg(test)]
mod tests;
