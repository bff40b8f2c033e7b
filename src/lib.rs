

pub mod cleaner;
pub mod core;
pub mod gcp;
pub mod utils;


pub use cleaner::{ExclusionSet, OrgCleaner, RunScope};
pub use core::config::CleanerConfig;
pub use core::error::{CleanerError, Result};
pub use core::events::{CleanupEvent, EventSink, TracingSink};
pub use gcp::{ApiError, ResourceManagerClient};


pub const DEFAULT_API_BASE_URL: &str = "https://cloudresourcemanager.googleapis.com/v3";


pub const DEFAULT_PAGE_SIZE: u32 = 100;


pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
