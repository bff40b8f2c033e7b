

pub mod config;
pub mod error;
pub mod events;

pub use config::CleanerConfig;
pub use error::{CleanerError, Result};
pub use events::{Action, CleanupEvent, EventSink, MemorySink, ResourceKind, TracingSink};
