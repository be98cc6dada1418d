//! Domain entities: the planned layout and the record of what a run did.

pub mod outcome;
pub mod plan;

pub use outcome::{Action, CreationOutcome, EntryKind, ScaffoldReport};
pub use plan::{FileSpec, FolderSpec, ScaffoldPlan};
