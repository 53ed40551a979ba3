//! Error handling for the scoring engine.

pub mod domain;
pub mod error_code;

#[cfg(test)]
mod tests_error_mapping;

pub use domain::GameError;
pub use error_code::ErrorCode;
