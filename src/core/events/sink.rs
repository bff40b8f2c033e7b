

use parking_lot::Mutex;
use tracing::{error, info, warn};

use super::base::{Action, CleanupEvent};


pub trait EventSink: Send + Sync {
    fn record(&self, event: CleanupEvent);
}


#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, event: CleanupEvent) {
        let line = log_line(&event);
        match event.action {
            Action::Fail | Action::Anomaly => error!(
                action = event.action_name(),
                kind = event.kind_name(),
                resource = %event.resource_id,
                simulated = event.simulated,
                "{}",
                line
            ),
            Action::NotFound | Action::Blocked | Action::LienDetected | Action::Retry => warn!(
                action = event.action_name(),
                kind = event.kind_name(),
                resource = %event.resource_id,
                simulated = event.simulated,
                "{}",
                line
            ),
            _ => info!(
                action = event.action_name(),
                kind = event.kind_name(),
                resource = %event.resource_id,
                simulated = event.simulated,
                "{}",
                line
            ),
        }
    }
}

fn log_line(event: &CleanupEvent) -> String {
    match event.detail.as_deref() {
        Some(detail) if !detail.is_empty() => format!("{event}: {detail}"),
        _ => event.to_string(),
    }
}


#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<CleanupEvent>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<CleanupEvent> {
        self.events.lock().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.events.lock().iter().map(ToString::to_string).collect()
    }

    pub fn count(&self, action: Action) -> usize {
        self.events.lock().iter().filter(|e| e.action == action).count()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl EventSink for MemorySink {
    fn record(&self, event: CleanupEvent) {
        self.events.lock().push(event);
    }
}
