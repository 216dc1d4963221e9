//! System orchestration, startup, and shutdown logic.

pub mod portal_system;
pub mod tracing;

pub use portal_system::*;
pub use tracing::*;
