// Re-exports so callers can "use crate::config::*".
pub mod logging;
pub mod types;

pub use logging::*;
pub use types::*;
