use std::collections::HashMap;

use tracing::debug;

use super::exclusions::ExclusionSet;
use crate::gcp::Folder;


/// Folders in deletion order (every descendant before its ancestors) plus
/// the folders left out because they or an ancestor are excluded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionPlan {
    folders: Vec<Folder>,
    excluded: Vec<Folder>,
}

impl DeletionPlan {
    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn excluded(&self) -> &[Folder] {
        &self.excluded
    }

    pub fn ids(&self) -> Vec<&str> {
        self.folders.iter().map(Folder::id).collect()
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}


pub fn plan(discovered: &[Folder], exclusions: &ExclusionSet) -> DeletionPlan {
    let parents: HashMap<&str, &str> = discovered
        .iter()
        .filter_map(|f| f.parent.as_deref().map(|p| (f.name.as_str(), p)))
        .collect();

    let mut ordered: Vec<(usize, &Folder)> = Vec::with_capacity(discovered.len());
    let mut excluded = Vec::new();

    for folder in discovered.iter().rev() {
        if folder.is_organization() {
            continue;
        }
        if let Some(ancestor) = excluding_ancestor(&folder.name, &parents, exclusions) {
            debug!("Folder {} excluded via {}", folder.name, ancestor);
            excluded.push(folder.clone());
            continue;
        }
        ordered.push((depth(&folder.name, &parents), folder));
    }

    // Reverse breadth-first order already has non-increasing depth; the stable
    // sort keeps children first for any other tree-shaped input.
    ordered.sort_by(|a, b| b.0.cmp(&a.0));

    DeletionPlan {
        folders: ordered.into_iter().map(|(_, f)| f.clone()).collect(),
        excluded,
    }
}


fn excluding_ancestor<'a>(
    name: &'a str,
    parents: &HashMap<&'a str, &'a str>,
    exclusions: &ExclusionSet,
) -> Option<&'a str> {
    let mut current = name;
    for _ in 0..=parents.len() {
        if exclusions.excludes_folder_name(current) {
            return Some(current);
        }
        current = parents.get(current).copied()?;
    }
    None
}

fn depth<'a>(name: &'a str, parents: &HashMap<&'a str, &'a str>) -> usize {
    let mut current = name;
    let mut depth = 0;
    while let Some(parent) = parents.get(current) {
        depth += 1;
        if depth > parents.len() {
            break;
        }
        current = *parent;
    }
    depth
}


#[cfg(test)]
pub(crate) fn is_children_first(order: &[Folder]) -> bool {
    let position: HashMap<&str, usize> = order
        .iter()
        .enumerate()
        .map(|(i, f)| (f.name.as_str(), i))
        .collect();
    order.iter().enumerate().all(|(i, folder)| {
        folder
            .parent
            .as_deref()
            .and_then(|p| position.get(p))
            .is_none_or(|&parent_pos| parent_pos > i)
    })
}
