use std::collections::HashSet;

use crate::utils::{resource_collection, resource_id, split_csv};


/// Operator-supplied folder and project exclusions, keyed by bare identifier.
///
/// Folder entries may be written as `folders/{id}` or `{id}`. Excluding a
/// folder excludes every descendant folder and project; that inheritance is
/// applied by the walker and planner, not stored here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    folders: HashSet<String>,
    projects: HashSet<String>,
}

impl ExclusionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lists<F, P>(folders: F, projects: P) -> Self
    where
        F: IntoIterator,
        F::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        let mut set = Self::new();
        for folder in folders {
            set.exclude_folder(folder.as_ref());
        }
        for project in projects {
            set.exclude_project(project.as_ref());
        }
        set
    }

    pub fn from_csv(folders: Option<&str>, projects: Option<&str>) -> Self {
        Self::from_lists(split_csv(folders), split_csv(projects))
    }

    pub fn exclude_folder(&mut self, folder: &str) -> &mut Self {
        let id = resource_id(folder.trim());
        if !id.is_empty() {
            self.folders.insert(id.to_string());
        }
        self
    }

    pub fn exclude_project(&mut self, project: &str) -> &mut Self {
        let id = resource_id(project.trim());
        if !id.is_empty() {
            self.projects.insert(id.to_string());
        }
        self
    }

    pub fn excludes_folder(&self, folder_id: &str) -> bool {
        self.folders.contains(folder_id)
    }

    // Organization names never match: the root cannot be excluded.
    pub fn excludes_folder_name(&self, name: &str) -> bool {
        resource_collection(name) == Some("folders") && self.excludes_folder(resource_id(name))
    }

    pub fn excludes_project(&self, project_id: &str) -> bool {
        self.projects.contains(project_id)
    }

    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.projects.is_empty()
    }
}
