

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};
use uuid::Uuid;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    Skip,
    Delete,
    NotFound,
    Blocked,
    LienDetected,
    DeleteLien,
    Retry,
    Fail,
    Anomaly,
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ResourceKind {
    Folder,
    Project,
    Lien,
}


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanupEvent {
    pub event_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub action: Action,
    pub kind: ResourceKind,
    pub resource_id: String,
    pub simulated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl CleanupEvent {
    #[must_use]
    pub fn new(action: Action, kind: ResourceKind, resource_id: impl Into<String>, simulated: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            action,
            kind,
            resource_id: resource_id.into(),
            simulated,
            detail: None,
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn action_name(&self) -> &'static str {
        self.action.into()
    }

    pub fn kind_name(&self) -> &'static str {
        self.kind.into()
    }

    pub fn mode(&self) -> &'static str {
        if self.simulated { "simulated" } else { "real" }
    }
}

// `[action] kind id (simulated|real)`
impl fmt::Display for CleanupEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {} ({})",
            self.action_name(),
            self.kind_name(),
            self.resource_id,
            self.mode()
        )
    }
}
