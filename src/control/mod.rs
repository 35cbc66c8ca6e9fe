//! Cursor control core

pub mod platform;
pub mod sampler;
pub mod service;
pub mod session;
pub mod timer;

// Re-exports for library consumers
pub use platform::{CursorLocator, CursorWarp, EnigoBackend, Point};
pub use sampler::PositionSampler;
pub use service::CursorControlService;
pub use session::{update, Effect, Event, MoveError, SessionState};
