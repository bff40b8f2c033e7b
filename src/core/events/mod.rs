

pub mod base;
pub mod sink;

pub use base::{Action, CleanupEvent, ResourceKind};
pub use sink::{EventSink, MemorySink, TracingSink};
