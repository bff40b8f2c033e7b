use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::events::{Action, CleanupEvent, EventSink, ResourceKind};
use crate::gcp::{ApiError, Folder, FolderService, Lien, LienService, Project, ProjectService};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionOutcome {
    Succeeded,
    Simulated,
    Skipped,
    Failed,
}


/// Progress of a single project deletion. `Succeeded` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectDeletionState {
    Attempting,
    LienDetected,
    LienRemoval,
    Retrying,
    Succeeded,
    Failed,
}

impl ProjectDeletionState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}


pub struct DeletionExecutor {
    folders: Arc<dyn FolderService>,
    projects: Arc<dyn ProjectService>,
    liens: Arc<dyn LienService>,
    sink: Arc<dyn EventSink>,
    dry_run: bool,
}

impl DeletionExecutor {
    pub fn new(
        folders: Arc<dyn FolderService>,
        projects: Arc<dyn ProjectService>,
        liens: Arc<dyn LienService>,
        sink: Arc<dyn EventSink>,
        dry_run: bool,
    ) -> Self {
        Self {
            folders,
            projects,
            liens,
            sink,
            dry_run,
        }
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    fn record(&self, action: Action, kind: ResourceKind, id: &str, detail: Option<String>) {
        let event = CleanupEvent::new(action, kind, id, self.dry_run);
        self.sink.record(match detail {
            Some(detail) => event.with_detail(detail),
            None => event,
        });
    }

    pub async fn delete_folder(&self, folder: &Folder) -> DeletionOutcome {
        if folder.is_organization() {
            warn!("Refusing to delete organization node {}", folder.name);
            return DeletionOutcome::Skipped;
        }

        let id = folder.id();
        self.record(Action::Delete, ResourceKind::Folder, id, None);
        if self.dry_run {
            return DeletionOutcome::Simulated;
        }

        match self.folders.delete_folder(&folder.name).await {
            Ok(()) => DeletionOutcome::Succeeded,
            Err(err) => self.settle_failure(ResourceKind::Folder, id, err),
        }
    }

    pub async fn delete_project(&self, project: &Project) -> DeletionOutcome {
        let id = project.project_id.as_str();
        self.record(Action::Delete, ResourceKind::Project, id, None);
        if self.dry_run {
            return DeletionOutcome::Simulated;
        }

        let name = project.resource_name();
        let mut liens: Vec<Lien> = Vec::new();
        let mut state = ProjectDeletionState::Attempting;

        while !state.is_terminal() {
            debug!("Project {} deletion state: {:?}", id, state);
            state = match state {
                ProjectDeletionState::Attempting => match self.projects.delete_project(&name).await {
                    Ok(()) => ProjectDeletionState::Succeeded,
                    Err(ApiError::LienBlocked(message)) => {
                        self.record(Action::LienDetected, ResourceKind::Project, id, Some(message));
                        ProjectDeletionState::LienDetected
                    }
                    Err(err) => return self.settle_failure(ResourceKind::Project, id, err),
                },

                ProjectDeletionState::LienDetected => match self.liens.list_liens(&name).await {
                    Ok(found) if found.is_empty() => {
                        self.record(
                            Action::Anomaly,
                            ResourceKind::Project,
                            id,
                            Some("deletion blocked by a lien but no liens were found".to_string()),
                        );
                        ProjectDeletionState::Failed
                    }
                    Ok(found) => {
                        liens = found;
                        ProjectDeletionState::LienRemoval
                    }
                    Err(err) => {
                        self.record(
                            Action::Fail,
                            ResourceKind::Project,
                            id,
                            Some(format!("listing liens failed: {err}")),
                        );
                        ProjectDeletionState::Failed
                    }
                },

                ProjectDeletionState::LienRemoval => self.remove_liens(id, &liens).await,

                ProjectDeletionState::Retrying => {
                    self.record(Action::Retry, ResourceKind::Project, id, Some("liens removed".to_string()));
                    match self.projects.delete_project(&name).await {
                        Ok(()) => ProjectDeletionState::Succeeded,
                        Err(ApiError::NotFound(message)) => {
                            self.record(Action::NotFound, ResourceKind::Project, id, Some(message));
                            ProjectDeletionState::Succeeded
                        }
                        Err(err) => {
                            self.record(Action::Fail, ResourceKind::Project, id, Some(err.to_string()));
                            ProjectDeletionState::Failed
                        }
                    }
                }

                ProjectDeletionState::Succeeded | ProjectDeletionState::Failed => state,
            };
        }

        match state {
            ProjectDeletionState::Succeeded => DeletionOutcome::Succeeded,
            _ => DeletionOutcome::Failed,
        }
    }

    async fn remove_liens(&self, project_id: &str, liens: &[Lien]) -> ProjectDeletionState {
        for lien in liens {
            self.record(Action::DeleteLien, ResourceKind::Lien, &lien.name, None);
            if let Err(err) = self.liens.delete_lien(&lien.name).await {
                if err.is_not_found() {
                    self.record(Action::NotFound, ResourceKind::Lien, &lien.name, Some(err.to_string()));
                    continue;
                }
                self.record(Action::Fail, ResourceKind::Lien, &lien.name, Some(err.to_string()));
                self.record(
                    Action::Fail,
                    ResourceKind::Project,
                    project_id,
                    Some("lien removal failed, not retrying".to_string()),
                );
                return ProjectDeletionState::Failed;
            }
        }
        ProjectDeletionState::Retrying
    }

    fn settle_failure(&self, kind: ResourceKind, id: &str, err: ApiError) -> DeletionOutcome {
        match err {
            ApiError::NotFound(message) => {
                self.record(Action::NotFound, kind, id, Some(message));
                DeletionOutcome::Succeeded
            }
            ApiError::FailedPrecondition(message) | ApiError::LienBlocked(message) => {
                self.record(Action::Blocked, kind, id, Some(message));
                DeletionOutcome::Skipped
            }
            other => {
                self.record(Action::Fail, kind, id, Some(other.to_string()));
                DeletionOutcome::Failed
            }
        }
    }
}
