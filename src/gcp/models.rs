use serde::{Deserialize, Serialize};

use crate::utils::{resource_collection, resource_id};


const ORGANIZATIONS: &str = "organizations";


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl Folder {
    pub fn new(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: Some(parent.into()),
            display_name: None,
            state: None,
        }
    }

    pub fn organization(organization_id: &str) -> Self {
        Self {
            name: format!("{ORGANIZATIONS}/{organization_id}"),
            parent: None,
            display_name: None,
            state: None,
        }
    }

    pub fn id(&self) -> &str {
        resource_id(&self.name)
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.parent.as_deref().map(resource_id)
    }

    pub fn is_organization(&self) -> bool {
        resource_collection(&self.name) == Some(ORGANIZATIONS)
    }

    // Value of the `parent.type` search key for projects held by this node.
    pub fn parent_type(&self) -> &'static str {
        if self.is_organization() { "organization" } else { "folder" }
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectState {
    #[default]
    StateUnspecified,
    Active,
    DeleteRequested,
}


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub name: String,
    pub project_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default)]
    pub state: ProjectState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Project {
    pub fn new(project_id: impl Into<String>, parent: impl Into<String>) -> Self {
        let project_id = project_id.into();
        Self {
            name: format!("projects/{project_id}"),
            project_id,
            parent: Some(parent.into()),
            state: ProjectState::Active,
            display_name: None,
        }
    }

    // Resource Manager accepts `projects/{project_id}` for delete and lien lookups.
    pub fn resource_name(&self) -> String {
        format!("projects/{}", self.project_id)
    }

    pub fn is_active(&self) -> bool {
        self.state == ProjectState::Active
    }
}


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lien {
    pub name: String,
    #[serde(default)]
    pub parent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default)]
    pub restrictions: Vec<String>,
}

impl Lien {
    pub fn new(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: parent.into(),
            reason: None,
            origin: None,
            restrictions: vec!["resourcemanager.projects.delete".to_string()],
        }
    }
}


pub trait Page {
    type Item;

    fn into_parts(self) -> (Vec<Self::Item>, Option<String>);
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFoldersResponse {
    #[serde(default)]
    pub folders: Vec<Folder>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl Page for ListFoldersResponse {
    type Item = Folder;

    fn into_parts(self) -> (Vec<Folder>, Option<String>) {
        (self.folders, self.next_page_token)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchProjectsResponse {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl Page for SearchProjectsResponse {
    type Item = Project;

    fn into_parts(self) -> (Vec<Project>, Option<String>) {
        (self.projects, self.next_page_token)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListLiensResponse {
    #[serde(default)]
    pub liens: Vec<Lien>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl Page for ListLiensResponse {
    type Item = Lien;

    fn into_parts(self) -> (Vec<Lien>, Option<String>) {
        (self.liens, self.next_page_token)
    }
}
