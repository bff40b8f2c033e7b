

pub mod exclusions;
pub mod executor;
pub mod locator;
pub mod planner;
pub mod runner;
pub mod walker;

pub use exclusions::ExclusionSet;
pub use executor::{DeletionExecutor, DeletionOutcome, ProjectDeletionState};
pub use locator::ProjectLocator;
pub use planner::{plan, DeletionPlan};
pub use runner::{OrgCleaner, RunScope};
pub use walker::HierarchyWalker;
