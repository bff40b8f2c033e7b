use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::exclusions::ExclusionSet;
use crate::core::error::{CleanerError, Result};
use crate::gcp::{Folder, FolderService};
use crate::utils::resource_id;


pub struct HierarchyWalker {
    folders: Arc<dyn FolderService>,
}

impl HierarchyWalker {
    pub fn new(folders: Arc<dyn FolderService>) -> Self {
        Self { folders }
    }

    /// Breadth-first discovery of every folder under the organization.
    ///
    /// The organization itself is always the first entry, as a pseudo-folder
    /// with no parent. Excluded folders are returned but never expanded, so
    /// nothing below them is discovered.
    pub async fn walk(&self, organization_id: &str, exclusions: &ExclusionSet) -> Result<Vec<Folder>> {
        let organization_id = resource_id(organization_id.trim());
        if organization_id.is_empty() {
            return Err(CleanerError::InvalidOrganization(organization_id.to_string()));
        }

        let root = Folder::organization(organization_id);
        let mut seen: HashSet<String> = HashSet::from([root.name.clone()]);
        let mut queue = VecDeque::from([root.name.clone()]);
        let mut discovered = vec![root];

        while let Some(parent) = queue.pop_front() {
            if exclusions.excludes_folder_name(&parent) {
                info!("Excluding folder '{}' and its descendants", parent);
                continue;
            }

            debug!("Retrieving folders under {}", parent);
            let children = self
                .folders
                .list_child_folders(&parent)
                .await
                .map_err(|e| CleanerError::folder_listing(&parent, e))?;

            for child in children {
                if !seen.insert(child.name.clone()) {
                    warn!("Folder {} listed more than once, ignoring repeat", child.name);
                    continue;
                }
                debug!("Found folder parent={} folder={}", parent, child.name);
                queue.push_back(child.name.clone());
                discovered.push(child);
            }
        }

        info!(
            "Retrieved {} folder(s) under organization {}",
            discovered.len() - 1,
            organization_id
        );
        Ok(discovered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gcp::fake::{Call, FakeResourceManager};

    fn names(folders: &[Folder]) -> Vec<&str> {
        folders.iter().map(|f| f.name.as_str()).collect()
    }

    fn tree() -> Arc<FakeResourceManager> {
        Arc::new(
            FakeResourceManager::new()
                .with_folder("folders/1", "organizations/123")
                .with_folder("folders/2", "organizations/123")
                .with_folder("folders/11", "folders/1")
                .with_folder("folders/12", "folders/1")
                .with_folder("folders/111", "folders/11")
                .with_folder("folders/21", "folders/2"),
        )
    }

    #[tokio::test]
    async fn test_walk_breadth_first_with_root_first() {
        let fake = tree();
        let walker = HierarchyWalker::new(fake.clone());

        let folders = walker.walk("123", &ExclusionSet::new()).await.unwrap();

        assert_eq!(
            names(&folders),
            vec![
                "organizations/123",
                "folders/1",
                "folders/2",
                "folders/11",
                "folders/12",
                "folders/21",
                "folders/111",
            ]
        );
        assert_eq!(fake.count(|c| matches!(c, Call::ListFolders(_))), 7);
        assert!(fake.mutations().is_empty());
    }

    #[tokio::test]
    async fn test_walk_accepts_full_organization_name() {
        let walker = HierarchyWalker::new(tree());
        let folders = walker.walk("organizations/123", &ExclusionSet::new()).await.unwrap();
        assert_eq!(folders[0].name, "organizations/123");
        assert_eq!(folders.len(), 7);
    }

    #[tokio::test]
    async fn test_walk_prunes_excluded_subtree() {
        let fake = tree();
        let walker = HierarchyWalker::new(fake.clone());
        let exclusions = ExclusionSet::from_csv(Some("folders/1"), None);

        let folders = walker.walk("123", &exclusions).await.unwrap();

        assert_eq!(
            names(&folders),
            vec!["organizations/123", "folders/1", "folders/2", "folders/21"]
        );
        assert!(!fake.calls().contains(&Call::ListFolders("folders/1".to_string())));
    }

    #[tokio::test]
    async fn test_walk_propagates_listing_failure() {
        let fake = Arc::new(
            FakeResourceManager::new()
                .with_folder("folders/1", "organizations/123")
                .failing_listing("folders/1"),
        );
        let walker = HierarchyWalker::new(fake);

        let err = walker.walk("123", &ExclusionSet::new()).await.unwrap_err();
        assert!(matches!(err, CleanerError::FolderListing { ref parent, .. } if parent == "folders/1"));
    }

    #[tokio::test]
    async fn test_walk_rejects_empty_organization() {
        let walker = HierarchyWalker::new(tree());
        let err = walker.walk("  ", &ExclusionSet::new()).await.unwrap_err();
        assert!(matches!(err, CleanerError::InvalidOrganization(_)));
    }
}
