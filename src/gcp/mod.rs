

pub mod client;
pub mod error;
pub mod models;
pub mod traits;

#[cfg(test)]
pub(crate) mod fake;

pub use client::ResourceManagerClient;
pub use error::{classify_error, ApiError};
pub use models::{Folder, Lien, Project, ProjectState};
pub use traits::{FolderService, LienService, ProjectService};
