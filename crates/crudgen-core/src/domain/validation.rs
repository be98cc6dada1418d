use std::collections::HashSet;

use crate::domain::{entities::ScaffoldPlan, error::DomainError, value_objects::Operation};

/// Longest resource name accepted. The longest generated file name
/// (`update<Name>.schema.mjs`) must still fit in a 255-byte path segment.
pub const MAX_RESOURCE_NAME_LEN: usize = 200;

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Check that `raw` can be used verbatim as a path segment, inside a
    /// JavaScript identifier, and inside a URL path segment.
    pub fn validate_resource_name(raw: &str) -> Result<(), DomainError> {
        let reject = |reason: String| DomainError::InvalidResourceName {
            name: raw.to_string(),
            reason,
        };

        if raw.is_empty() {
            return Err(reject("name cannot be empty".into()));
        }
        if raw.len() > MAX_RESOURCE_NAME_LEN {
            return Err(reject(format!(
                "name is {} bytes long, the limit is {MAX_RESOURCE_NAME_LEN}",
                raw.len()
            )));
        }
        if let Some(bad) = raw
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
        {
            return Err(reject(format!("character {bad:?} is not allowed")));
        }

        Ok(())
    }

    /// Check the structural invariants of a plan: one folder per operation in
    /// canonical order, and no two entries sharing a path.
    pub fn validate_plan(plan: &ScaffoldPlan) -> Result<(), DomainError> {
        let operations: Vec<Operation> = plan.folders().iter().map(|f| f.operation()).collect();
        if operations != Operation::ALL {
            return Err(DomainError::MalformedPlan(format!(
                "expected folders for {:?}, found {:?}",
                Operation::ALL,
                operations
            )));
        }

        let mut seen = HashSet::new();
        for folder in plan.folders() {
            if folder.files().is_empty() {
                return Err(DomainError::MalformedPlan(format!(
                    "folder '{}' has no files",
                    folder.name()
                )));
            }
            for path in std::iter::once(folder.relative_path())
                .chain(folder.files().iter().map(|f| folder.relative_path().join(f.name())))
            {
                let path_str = path.display().to_string();
                if !seen.insert(path_str.clone()) {
                    return Err(DomainError::DuplicatePath { path: path_str });
                }
            }
        }

        Ok(())
    }
}
