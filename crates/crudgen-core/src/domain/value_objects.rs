//! Domain value objects: ResourceName, Operation, ArtifactKind, ExistingPolicy.
//!
//! # Design
//!
//! These are pure value types: equality-by-value, no identity. `ResourceName`
//! can only be obtained through validation, so everything downstream of it
//! (planner, templates, scaffolder) may interpolate it without escaping.

use crate::domain::{error::DomainError, validation::DomainValidator};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ResourceName ─────────────────────────────────────────────────────────────

/// The caller-supplied token identifying the entity being scaffolded.
///
/// Case is preserved: `Rate` produces `addRate`, `rate` produces `addrate`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ResourceName(String);

impl ResourceName {
    /// Validate `raw` and wrap it.
    ///
    /// # Errors
    /// [`DomainError::InvalidResourceName`] when `raw` is empty, too long, or
    /// contains anything other than ASCII letters, digits, or `_`.
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        DomainValidator::validate_resource_name(&raw)?;
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResourceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ResourceName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ── Operation ────────────────────────────────────────────────────────────────

/// One of the four CRUD operations, each of which gets its own folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Get,
    Delete,
    Update,
    Add,
}

impl Operation {
    /// Canonical plan order.
    pub const ALL: [Operation; 4] = [Self::Get, Self::Delete, Self::Update, Self::Add];

    /// Lowercase prefix used for folder and export names.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Delete => "delete",
            Self::Update => "update",
            Self::Add => "add",
        }
    }

    /// HTTP method the generated route registers.
    pub const fn route_method(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Delete => "DELETE",
            Self::Update => "PUT",
            Self::Add => "POST",
        }
    }

    /// Artifacts generated inside this operation's folder, handler first.
    pub const fn artifacts(self) -> &'static [ArtifactKind] {
        match self {
            Self::Get => &[ArtifactKind::GetHandler],
            Self::Delete => &[ArtifactKind::DeleteHandler],
            Self::Update => &[ArtifactKind::UpdateHandler, ArtifactKind::UpdateSchema],
            Self::Add => &[ArtifactKind::AddHandler, ArtifactKind::AddSchema],
        }
    }

    /// `<prefix><name>`, shared by the folder, the handler file stem, and the
    /// exported route symbol.
    pub fn qualified_name(self, name: &ResourceName) -> String {
        format!("{}{}", self.prefix(), name)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

// ── ArtifactKind ─────────────────────────────────────────────────────────────

/// Module source extension for every generated file.
pub const MODULE_EXTENSION: &str = "mjs";

/// Kind of generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    AddHandler,
    AddSchema,
    GetHandler,
    DeleteHandler,
    UpdateHandler,
    UpdateSchema,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 6] = [
        Self::AddHandler,
        Self::AddSchema,
        Self::GetHandler,
        Self::DeleteHandler,
        Self::UpdateHandler,
        Self::UpdateSchema,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AddHandler => "add-handler",
            Self::AddSchema => "add-schema",
            Self::GetHandler => "get-handler",
            Self::DeleteHandler => "delete-handler",
            Self::UpdateHandler => "update-handler",
            Self::UpdateSchema => "update-schema",
        }
    }

    pub const fn operation(self) -> Operation {
        match self {
            Self::AddHandler | Self::AddSchema => Operation::Add,
            Self::GetHandler => Operation::Get,
            Self::DeleteHandler => Operation::Delete,
            Self::UpdateHandler | Self::UpdateSchema => Operation::Update,
        }
    }

    pub const fn is_schema(self) -> bool {
        matches!(self, Self::AddSchema | Self::UpdateSchema)
    }

    /// File name for this artifact given the folder's base name:
    /// `<stem>.mjs` for handlers, `<stem>.schema.mjs` for schemas.
    pub fn file_name(self, stem: &str) -> String {
        if self.is_schema() {
            format!("{stem}.schema.{MODULE_EXTENSION}")
        } else {
            format!("{stem}.{MODULE_EXTENSION}")
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| DomainError::UnknownArtifactKind(s.to_string()))
    }
}

// ── ExistingPolicy ───────────────────────────────────────────────────────────

/// What the scaffolder does when an entry it is about to create already
/// exists. Applied the same way to the root, the operation folders, and the
/// files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExistingPolicy {
    /// Fail the run at the first existing entry.
    #[default]
    Abort,
    /// Record the entry as already existing and leave it untouched.
    Skip,
    /// Re-render existing files. Existing directories are kept as they are.
    Overwrite,
}

impl ExistingPolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Abort => "abort",
            Self::Skip => "skip",
            Self::Overwrite => "overwrite",
        }
    }
}

impl fmt::Display for ExistingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExistingPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "abort" | "fail" => Ok(Self::Abort),
            "skip" | "keep" => Ok(Self::Skip),
            "overwrite" | "force" => Ok(Self::Overwrite),
            other => Err(DomainError::UnknownPolicy(other.to_string())),
        }
    }
}
