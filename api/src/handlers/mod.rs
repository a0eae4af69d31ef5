//! Response translation helpers.

pub mod error;

pub use error::ApiError;
