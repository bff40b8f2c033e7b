use std::sync::Arc;

use tracing::info;

use crate::core::error::{CleanerError, Result};
use crate::gcp::{Folder, Project, ProjectService};


pub struct ProjectLocator {
    projects: Arc<dyn ProjectService>,
}

impl ProjectLocator {
    pub fn new(projects: Arc<dyn ProjectService>) -> Self {
        Self { projects }
    }

    pub fn active_projects_query(folder: &Folder) -> String {
        format!(
            "parent.type:{} parent.id:{} state:ACTIVE",
            folder.parent_type(),
            folder.id()
        )
    }

    pub async fn list_active_projects(&self, folder: &Folder) -> Result<Vec<Project>> {
        let query = Self::active_projects_query(folder);
        let projects = self
            .projects
            .search_active_projects(&query)
            .await
            .map_err(|e| CleanerError::project_listing(&folder.name, e))?;

        info!("Retrieved {} project(s) under {}", projects.len(), folder.name);
        Ok(projects)
    }
}
