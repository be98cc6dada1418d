// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for crudgen.
//!
//! This module contains pure logic with no I/O. Filesystem access is handled
//! via the port defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: Planner and renderer are pure functions
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: Plans are built once and never mutated
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod planner;
pub mod templates;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    outcome::{Action, CreationOutcome, EntryKind, ScaffoldReport},
    plan::{FileSpec, FolderSpec, ScaffoldPlan},
};

pub use error::{DomainError, ErrorCategory};

pub use planner::plan;
pub use templates::{RenderContext, render};

pub use value_objects::{
    ArtifactKind, ExistingPolicy, MODULE_EXTENSION, Operation, ResourceName,
};

pub use validation::{DomainValidator, MAX_RESOURCE_NAME_LEN};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Resource Name Tests
    // ========================================================================

    #[test]
    fn resource_name_accepts_identifier_tokens() {
        for raw in ["Rate", "rate", "HolidayModifier", "contract_rate_2", "_x", "9Lives"] {
            assert!(ResourceName::parse(raw).is_ok(), "rejected: {raw}");
        }
    }

    #[test]
    fn resource_name_rejects_unsafe_tokens() {
        for raw in ["", "a/b", "../x", "a\\b", "a b", "Ráte", "rate-2", "x.y", "a\n"] {
            assert!(
                matches!(
                    ResourceName::parse(raw),
                    Err(DomainError::InvalidResourceName { .. })
                ),
                "accepted: {raw:?}"
            );
        }
    }

    #[test]
    fn resource_name_rejects_overlong_tokens() {
        let ok = "a".repeat(MAX_RESOURCE_NAME_LEN);
        let too_long = "a".repeat(MAX_RESOURCE_NAME_LEN + 1);

        assert!(ResourceName::parse(ok).is_ok());
        assert!(ResourceName::parse(too_long).is_err());
    }

    #[test]
    fn resource_name_error_names_the_culprit() {
        let err = ResourceName::parse("a/b").unwrap_err();
        assert!(err.to_string().contains("'/'"));
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn resource_name_displays_verbatim() {
        let name = ResourceName::from_str("Rate").unwrap();
        assert_eq!(name.to_string(), "Rate");
        assert_eq!(name.as_str(), "Rate");
    }

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn operation_prefixes_and_methods() {
        let name = ResourceName::parse("Rate").unwrap();

        assert_eq!(Operation::Add.qualified_name(&name), "addRate");
        assert_eq!(Operation::Add.route_method(), "POST");
        assert_eq!(Operation::Delete.route_method(), "DELETE");
        assert_eq!(Operation::Update.route_method(), "PUT");
    }

    #[test]
    fn artifact_kind_parses_kebab_and_snake() {
        assert_eq!(
            ArtifactKind::from_str("add-handler").unwrap(),
            ArtifactKind::AddHandler
        );
        assert_eq!(
            ArtifactKind::from_str("UPDATE_SCHEMA").unwrap(),
            ArtifactKind::UpdateSchema
        );
        assert!(ArtifactKind::from_str("list-handler").is_err());
    }

    #[test]
    fn artifact_file_names() {
        assert_eq!(ArtifactKind::AddHandler.file_name("addRate"), "addRate.mjs");
        assert_eq!(
            ArtifactKind::AddSchema.file_name("addRate"),
            "addRate.schema.mjs"
        );
    }

    #[test]
    fn every_artifact_belongs_to_its_operation() {
        for op in Operation::ALL {
            for kind in op.artifacts() {
                assert_eq!(kind.operation(), op);
            }
        }
    }

    #[test]
    fn existing_policy_parses_and_defaults_to_abort() {
        assert_eq!(ExistingPolicy::default(), ExistingPolicy::Abort);
        assert_eq!(
            ExistingPolicy::from_str("Skip").unwrap(),
            ExistingPolicy::Skip
        );
        assert_eq!(
            ExistingPolicy::from_str("force").unwrap(),
            ExistingPolicy::Overwrite
        );
        assert!(matches!(
            ExistingPolicy::from_str("merge"),
            Err(DomainError::UnknownPolicy(_))
        ));
    }
}
