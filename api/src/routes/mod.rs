//! Route handlers.

pub mod groups;
