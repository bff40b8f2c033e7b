use std::sync::Arc;

use tracing::info;

use super::exclusions::ExclusionSet;
use super::executor::DeletionExecutor;
use super::locator::ProjectLocator;
use super::planner::plan;
use super::walker::HierarchyWalker;
use crate::core::error::Result;
use crate::core::events::{Action, CleanupEvent, EventSink, ResourceKind};
use crate::gcp::{Folder, FolderService, LienService, ProjectService};


/// Which deletions a run performs. Traversal and planning always run in full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunScope {
    pub projects: bool,
    pub folders: bool,
}

impl RunScope {
    pub fn all() -> Self {
        Self {
            projects: true,
            folders: true,
        }
    }

    // No `--only-*` flag means everything.
    pub fn from_flags(only_projects: bool, only_folders: bool) -> Self {
        if !only_projects && !only_folders {
            return Self::all();
        }
        Self {
            projects: only_projects,
            folders: only_folders,
        }
    }
}

impl Default for RunScope {
    fn default() -> Self {
        Self::all()
    }
}


pub struct OrgCleaner {
    folders: Arc<dyn FolderService>,
    projects: Arc<dyn ProjectService>,
    liens: Arc<dyn LienService>,
    sink: Arc<dyn EventSink>,
}

impl OrgCleaner {
    pub fn new(
        folders: Arc<dyn FolderService>,
        projects: Arc<dyn ProjectService>,
        liens: Arc<dyn LienService>,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            folders,
            projects,
            liens,
            sink,
        }
    }

    pub fn from_client<C>(client: Arc<C>, sink: Arc<dyn EventSink>) -> Self
    where
        C: FolderService + ProjectService + LienService + 'static,
    {
        Self::new(client.clone(), client.clone(), client, sink)
    }

    pub async fn run(&self, organization_id: &str, exclusions: &ExclusionSet, dry_run: bool) -> Result<()> {
        self.run_scoped(organization_id, exclusions, dry_run, RunScope::all())
            .await
    }

    pub async fn run_scoped(
        &self,
        organization_id: &str,
        exclusions: &ExclusionSet,
        dry_run: bool,
        scope: RunScope,
    ) -> Result<()> {
        info!(
            "Starting cleanup of organization {} (dry_run={}, projects={}, folders={})",
            organization_id, dry_run, scope.projects, scope.folders
        );

        let walker = HierarchyWalker::new(Arc::clone(&self.folders));
        let discovered = walker.walk(organization_id, exclusions).await?;
        let plan = plan(&discovered, exclusions);
        info!(
            "Planned {} folder(s) for deletion, {} excluded",
            plan.len(),
            plan.excluded().len()
        );

        for folder in plan.excluded() {
            self.sink.record(
                CleanupEvent::new(Action::Skip, ResourceKind::Folder, folder.id(), dry_run)
                    .with_detail("excluded"),
            );
        }

        let locator = ProjectLocator::new(Arc::clone(&self.projects));
        let executor = DeletionExecutor::new(
            Arc::clone(&self.folders),
            Arc::clone(&self.projects),
            Arc::clone(&self.liens),
            Arc::clone(&self.sink),
            dry_run,
        );

        for folder in plan.folders() {
            if scope.projects {
                self.delete_projects_under(folder, &locator, &executor, exclusions)
                    .await?;
            }
            if scope.folders {
                executor.delete_folder(folder).await;
            }
        }

        if scope.projects {
            if let Some(root) = discovered.first().filter(|f| f.is_organization()) {
                self.delete_projects_under(root, &locator, &executor, exclusions)
                    .await?;
            }
        }

        info!("Done processing organization {}", organization_id);
        Ok(())
    }

    async fn delete_projects_under(
        &self,
        folder: &Folder,
        locator: &ProjectLocator,
        executor: &DeletionExecutor,
        exclusions: &ExclusionSet,
    ) -> Result<()> {
        for project in locator.list_active_projects(folder).await? {
            if exclusions.excludes_project(&project.project_id) {
                self.sink.record(
                    CleanupEvent::new(
                        Action::Skip,
                        ResourceKind::Project,
                        &project.project_id,
                        executor.is_dry_run(),
                    )
                    .with_detail("excluded"),
                );
                continue;
            }
            executor.delete_project(&project).await;
        }
        Ok(())
    }
}
