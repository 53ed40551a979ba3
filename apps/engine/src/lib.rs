#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;
pub mod errors;
pub mod services;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use domain::frame::{Frame, FrameKind};
pub use domain::game::{FrameAppended, Game};
pub use domain::snapshot::{FrameSnapshot, GameSnapshot};
pub use errors::domain::GameError;
pub use errors::error_code::ErrorCode;
pub use services::session::GameSession;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
