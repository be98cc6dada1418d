use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// What kind of filesystem entry an outcome refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Folder,
    File,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Folder => f.write_str("folder"),
            Self::File => f.write_str("file"),
        }
    }
}

/// What the scaffolder did with one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    Created,
    AlreadyExists,
    /// Only produced under [`crate::domain::ExistingPolicy::Overwrite`].
    Overwritten,
}

/// Observational record for one attempted folder or file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreationOutcome {
    pub path: PathBuf,
    pub entry: EntryKind,
    pub action: Action,
}

impl CreationOutcome {
    pub fn new(path: impl Into<PathBuf>, entry: EntryKind, action: Action) -> Self {
        Self {
            path: path.into(),
            entry,
            action,
        }
    }

    pub fn is_created(&self) -> bool {
        self.action == Action::Created
    }
}

impl fmt::Display for CreationOutcome {
    /// Human-readable line, e.g. `Created folder: Rate/addRate` or
    /// `File Rate/addRate/addRate.mjs already exists.`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path.display();
        match (self.action, self.entry) {
            (Action::Created, entry) => write!(f, "Created {entry}: {path}"),
            (Action::AlreadyExists, EntryKind::Folder) => {
                write!(f, "Folder {path} already exists.")
            }
            (Action::AlreadyExists, EntryKind::File) => write!(f, "File {path} already exists."),
            (Action::Overwritten, entry) => write!(f, "Overwrote {entry}: {path}"),
        }
    }
}

/// Every outcome of one scaffold run, in the order the entries were attempted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub(crate) root: PathBuf,
    pub(crate) outcomes: Vec<CreationOutcome>,
}

impl ScaffoldReport {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            outcomes: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, outcome: CreationOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn outcomes(&self) -> &[CreationOutcome] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn created(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_created()).count()
    }

    pub fn skipped(&self) -> usize {
        self.count(Action::AlreadyExists)
    }

    pub fn overwritten(&self) -> usize {
        self.count(Action::Overwritten)
    }

    /// Outcome recorded for `path`, if that entry was attempted.
    pub fn outcome_for(&self, path: &Path) -> Option<&CreationOutcome> {
        self.outcomes.iter().find(|o| o.path == path)
    }

    fn count(&self, action: Action) -> usize {
        self.outcomes.iter().filter(|o| o.action == action).count()
    }
}
