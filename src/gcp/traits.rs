

use async_trait::async_trait;

use super::error::ApiError;
use super::models::{Folder, Lien, Project};


#[async_trait]
pub trait FolderService: Send + Sync {
    /// Immediate children of `parent`, every page.
    async fn list_child_folders(&self, parent: &str) -> Result<Vec<Folder>, ApiError>;

    async fn delete_folder(&self, name: &str) -> Result<(), ApiError>;
}


#[async_trait]
pub trait ProjectService: Send + Sync {
    /// Projects matching a Resource Manager search query, every page.
    async fn search_active_projects(&self, query: &str) -> Result<Vec<Project>, ApiError>;

    async fn delete_project(&self, name: &str) -> Result<(), ApiError>;
}


#[async_trait]
pub trait LienService: Send + Sync {
    async fn list_liens(&self, parent: &str) -> Result<Vec<Lien>, ApiError>;

    async fn delete_lien(&self, name: &str) -> Result<(), ApiError>;
}

