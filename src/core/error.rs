
use thiserror::Error;

use crate::gcp::ApiError;


#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid organization id: {0}")]
    InvalidOrganization(String),

    #[error("Failed to list folders under {parent}: {source}")]
    FolderListing {
        parent: String,
        #[source]
        source: ApiError,
    },

    #[error("Failed to list projects under {parent}: {source}")]
    ProjectListing {
        parent: String,
        #[source]
        source: ApiError,
    },

    #[error("Resource Manager error: {0}")]
    Api(#[from] ApiError),
}

impl CleanerError {
    pub fn folder_listing(parent: impl Into<String>, source: ApiError) -> Self {
        Self::FolderListing {
            parent: parent.into(),
            source,
        }
    }

    pub fn project_listing(parent: impl Into<String>, source: ApiError) -> Self {
        Self::ProjectListing {
            parent: parent.into(),
            source,
        }
    }
}

impl From<config::ConfigError> for CleanerError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}


pub type Result<T> = std::result::Result<T, CleanerError>;
