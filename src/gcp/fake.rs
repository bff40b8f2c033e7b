use std::collections::{HashMap, HashSet, VecDeque};

use async_trait::async_trait;
use parking_lot::Mutex;

use super::error::ApiError;
use super::models::{Folder, Lien, Project, ProjectState};
use super::traits::{FolderService, LienService, ProjectService};
use crate::utils::resource_id;


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListFolders(String),
    DeleteFolder(String),
    SearchProjects(String),
    DeleteProject(String),
    ListLiens(String),
    DeleteLien(String),
}

impl Call {
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::DeleteFolder(_) | Self::DeleteProject(_) | Self::DeleteLien(_)
        )
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    NotFound,
    Lien,
    Precondition,
    Unavailable,
}

impl Failure {
    fn into_error(self, name: &str) -> ApiError {
        match self {
            Self::NotFound => ApiError::NotFound(format!("{name} not found")),
            Self::Lien => ApiError::LienBlocked(format!(
                "A lien to prevent deletion was placed on {name}"
            )),
            Self::Precondition => ApiError::FailedPrecondition(format!("{name} is not empty")),
            Self::Unavailable => ApiError::Status {
                code: 503,
                status: "UNAVAILABLE".to_string(),
                message: "backend unavailable".to_string(),
            },
        }
    }
}


#[derive(Default)]
struct FakeState {
    folders: Vec<Folder>,
    projects: Vec<Project>,
    liens: HashMap<String, Vec<Lien>>,
    delete_failures: HashMap<String, VecDeque<Failure>>,
    listing_failures: HashSet<String>,
    search_failures: HashSet<String>,
    calls: Vec<Call>,
}

impl FakeState {
    fn next_failure(&mut self, name: &str) -> Option<Failure> {
        self.delete_failures.get_mut(name).and_then(VecDeque::pop_front)
    }
}


/// In-memory Resource Manager: records every call and replays scripted failures.
#[derive(Default)]
pub struct FakeResourceManager {
    state: Mutex<FakeState>,
}

impl FakeResourceManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_folder(self, name: &str, parent: &str) -> Self {
        self.state.lock().folders.push(Folder::new(name, parent));
        self
    }

    pub fn with_project(self, project_id: &str, parent: &str) -> Self {
        self.state.lock().projects.push(Project::new(project_id, parent));
        self
    }

    pub fn with_project_in_state(self, project_id: &str, parent: &str, state: ProjectState) -> Self {
        let mut project = Project::new(project_id, parent);
        project.state = state;
        self.state.lock().projects.push(project);
        self
    }

    pub fn with_lien(self, project_id: &str, lien_name: &str) -> Self {
        let parent = format!("projects/{project_id}");
        self.state
            .lock()
            .liens
            .entry(parent.clone())
            .or_default()
            .push(Lien::new(lien_name, parent));
        self
    }

    // Each scripted failure is consumed by one delete call on `name`.
    pub fn failing_delete(self, name: &str, failure: Failure) -> Self {
        self.state
            .lock()
            .delete_failures
            .entry(name.to_string())
            .or_default()
            .push_back(failure);
        self
    }

    pub fn failing_listing(self, parent: &str) -> Self {
        self.state.lock().listing_failures.insert(parent.to_string());
        self
    }

    pub fn failing_search(self, parent: &str) -> Self {
        self.state.lock().search_failures.insert(parent.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().calls.clone()
    }

    pub fn mutations(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_mutation).collect()
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.state.lock().calls.iter().filter(|c| predicate(c)).count()
    }
}

fn parse_query(query: &str) -> HashMap<&str, &str> {
    query
        .split_whitespace()
        .filter_map(|term| term.split_once(':'))
        .collect()
}

#[async_trait]
impl FolderService for FakeResourceManager {
    async fn list_child_folders(&self, parent: &str) -> Result<Vec<Folder>, ApiError> {
        let mut state = self.state.lock();
        state.calls.push(Call::ListFolders(parent.to_string()));
        if state.listing_failures.contains(parent) {
            return Err(Failure::Unavailable.into_error(parent));
        }
        Ok(state
            .folders
            .iter()
            .filter(|f| f.parent.as_deref() == Some(parent))
            .cloned()
            .collect())
    }

    async fn delete_folder(&self, name: &str) -> Result<(), ApiError> {
        let mut state = self.state.lock();
        state.calls.push(Call::DeleteFolder(name.to_string()));
        if let Some(failure) = state.next_failure(name) {
            return Err(failure.into_error(name));
        }
        state.folders.retain(|f| f.name != name);
        Ok(())
    }
}

#[async_trait]
impl ProjectService for FakeResourceManager {
    async fn search_active_projects(&self, query: &str) -> Result<Vec<Project>, ApiError> {
        let mut state = self.state.lock();
        state.calls.push(Call::SearchProjects(query.to_string()));

        let terms = parse_query(query);
        let parent = match (terms.get("parent.type"), terms.get("parent.id")) {
            (Some(kind), Some(id)) => format!("{kind}s/{id}"),
            _ => return Ok(Vec::new()),
        };
        if state.search_failures.contains(&parent) {
            return Err(Failure::Unavailable.into_error(&parent));
        }
        let active_only = terms.get("state") == Some(&"ACTIVE");

        Ok(state
            .projects
            .iter()
            .filter(|p| p.parent.as_deref() == Some(parent.as_str()))
            .filter(|p| !active_only || p.is_active())
            .cloned()
            .collect())
    }

    async fn delete_project(&self, name: &str) -> Result<(), ApiError> {
        let mut state = self.state.lock();
        state.calls.push(Call::DeleteProject(name.to_string()));
        if let Some(failure) = state.next_failure(name) {
            return Err(failure.into_error(name));
        }
        let project_id = resource_id(name).to_string();
        for project in state.projects.iter_mut().filter(|p| p.project_id == project_id) {
            project.state = ProjectState::DeleteRequested;
        }
        Ok(())
    }
}

#[async_trait]
impl LienService for FakeResourceManager {
    async fn list_liens(&self, parent: &str) -> Result<Vec<Lien>, ApiError> {
        let mut state = self.state.lock();
        state.calls.push(Call::ListLiens(parent.to_string()));
        Ok(state.liens.get(parent).cloned().unwrap_or_default())
    }

    async fn delete_lien(&self, name: &str) -> Result<(), ApiError> {
        let mut state = self.state.lock();
        state.calls.push(Call::DeleteLien(name.to_string()));
        if let Some(failure) = state.next_failure(name) {
            return Err(failure.into_error(name));
        }
        for liens in state.liens.values_mut() {
            liens.retain(|l| l.name != name);
        }
        Ok(())
    }
}
