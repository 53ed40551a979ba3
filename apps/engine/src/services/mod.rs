//! Service layer: async wrappers around the pure domain.

pub mod session;

pub use session::GameSession;
