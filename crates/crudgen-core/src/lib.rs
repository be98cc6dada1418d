//! crudgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the crudgen
//! CRUD scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           crudgen-cli (CLI)             │
//! │     (prompt, flags, output, config)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          (Driven: Filesystem)           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    crudgen-adapters (Infrastructure)    │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (ResourceName, planner, templates)     │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crudgen_core::{application::ScaffoldService, domain::ExistingPolicy};
//!
//! // Inject a filesystem adapter, then scaffold ./Rate
//! let service = ScaffoldService::new(filesystem);
//! let report = service.run("Rate", ".", ExistingPolicy::Skip).unwrap();
//! for outcome in report.outcomes() {
//!     println!("{outcome}");
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{ScaffoldService, ports::Filesystem};
    pub use crate::domain::{
        Action, ArtifactKind, CreationOutcome, EntryKind, ExistingPolicy, FileSpec, FolderSpec,
        Operation, ResourceName, ScaffoldPlan, ScaffoldReport, plan, render,
    };
    pub use crate::error::{CrudgenError, CrudgenResult};
}

