use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::{ArtifactKind, Operation, ResourceName};

/// Ordered folder/file layout for one resource.
///
/// Produced by [`crate::domain::planner::plan`] and consumed once by the
/// scaffold service. It contains no content, only names and artifact kinds;
/// rendering happens when a file is actually written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldPlan {
    pub(crate) resource: ResourceName,
    pub(crate) folders: Vec<FolderSpec>,
}

impl ScaffoldPlan {
    pub fn resource(&self) -> &ResourceName {
        &self.resource
    }

    pub fn folders(&self) -> &[FolderSpec] {
        &self.folders
    }

    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }

    pub fn file_count(&self) -> usize {
        self.folders.iter().map(|f| f.files.len()).sum()
    }

    /// Every file in plan order, paired with its folder.
    pub fn files(&self) -> impl Iterator<Item = (&FolderSpec, &FileSpec)> {
        self.folders
            .iter()
            .flat_map(|folder| folder.files.iter().map(move |file| (folder, file)))
    }

    /// Find the folder for an operation.
    pub fn folder(&self, operation: Operation) -> Option<&FolderSpec> {
        self.folders.iter().find(|f| f.operation == operation)
    }
}

/// One operation folder and the files it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderSpec {
    pub(crate) name: String,
    pub(crate) operation: Operation,
    pub(crate) files: Vec<FileSpec>,
}

impl FolderSpec {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn files(&self) -> &[FileSpec] {
        &self.files
    }

    /// Path relative to the scaffold root.
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(&self.name)
    }

    /// Path of one of this folder's files, relative to the scaffold root.
    pub fn file_path(&self, file: &FileSpec) -> PathBuf {
        self.relative_path().join(&file.name)
    }
}

/// One generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSpec {
    pub(crate) name: String,
    pub(crate) kind: ArtifactKind,
}

impl FileSpec {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }
}
