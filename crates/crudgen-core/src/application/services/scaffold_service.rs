//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Validate the resource name
//! 2. Plan the folder/file layout
//! 3. Create each entry that is missing, applying the existing-entry policy
//!    to the ones that are not
//!
//! It implements the driving port (incoming) and uses the filesystem driven
//! port (outgoing).

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{
        Action, CreationOutcome, DomainValidator as validator, EntryKind, ExistingPolicy,
        FileSpec, ResourceName, ScaffoldPlan, ScaffoldReport, plan, render,
    },
    error::CrudgenResult,
};

/// Whether entries are actually written or only predicted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Write,
    DryRun,
}

/// Main scaffolding service.
///
/// Runs strictly sequentially: one entry at a time, parents before children,
/// no retries, and no cleanup when a step fails.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given filesystem adapter.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use crudgen_core::application::{ScaffoldService, ports::*};
    ///
    /// let service = ScaffoldService::new(
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Scaffold `parent_dir/<name>` for a raw resource name.
    ///
    /// This is the main use case: the name is validated before anything
    /// touches the filesystem, then planned and scaffolded.
    #[instrument(
        skip_all,
        fields(
            resource = %name,
            parent = %parent_dir.as_ref().display(),
            policy = %policy
        )
    )]
    pub fn run(
        &self,
        name: &str,
        parent_dir: impl AsRef<Path>,
        policy: ExistingPolicy,
    ) -> CrudgenResult<ScaffoldReport> {
        let (root, plan) = Self::prepare(name, parent_dir.as_ref())?;
        info!(folders = plan.folder_count(), files = plan.file_count(), "Plan built");

        let report = self.scaffold(&plan, &root, policy)?;
        info!(
            created = report.created(),
            skipped = report.skipped(),
            overwritten = report.overwritten(),
            "Scaffold completed successfully"
        );
        Ok(report)
    }

    /// Predict what [`Self::run`] would do without writing anything.
    ///
    /// Existence checks still hit the filesystem, so the prediction reflects
    /// what is already on disk; a root conflict under `abort` is reported as
    /// the same error the real run would return.
    #[instrument(skip_all, fields(resource = %name, policy = %policy))]
    pub fn preview(
        &self,
        name: &str,
        parent_dir: impl AsRef<Path>,
        policy: ExistingPolicy,
    ) -> CrudgenResult<ScaffoldReport> {
        let (root, plan) = Self::prepare(name, parent_dir.as_ref())?;
        self.execute(&plan, &root, policy, Mode::DryRun)
    }

    /// Materialize an existing plan under `root`.
    pub fn scaffold(
        &self,
        plan: &ScaffoldPlan,
        root: &Path,
        policy: ExistingPolicy,
    ) -> CrudgenResult<ScaffoldReport> {
        self.execute(plan, root, policy, Mode::Write)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn prepare(name: &str, parent_dir: &Path) -> CrudgenResult<(PathBuf, ScaffoldPlan)> {
        let resource = ResourceName::parse(name)?;
        let joined = parent_dir.join(resource.as_str());
        // `./Rate` is reported as `Rate`.
        let root = joined.strip_prefix(".").unwrap_or(&joined).to_path_buf();
        Ok((root, plan(&resource)))
    }

    fn execute(
        &self,
        plan: &ScaffoldPlan,
        root: &Path,
        policy: ExistingPolicy,
        mode: Mode,
    ) -> CrudgenResult<ScaffoldReport> {
        validator::validate_plan(plan)?;

        let mut report = ScaffoldReport::new(root);

        // Root conflicts are checked before anything else so that an aborted
        // run leaves no trace and reports no outcomes.
        if self.filesystem.exists(root) && policy == ExistingPolicy::Abort {
            return Err(ApplicationError::RootExists {
                path: root.to_path_buf(),
            }
            .into());
        }
        self.ensure_folder(root, policy, mode, &mut report)?;

        for folder in plan.folders() {
            let folder_path = root.join(folder.name());
            self.ensure_folder(&folder_path, policy, mode, &mut report)?;

            for file in folder.files() {
                let file_path = folder_path.join(file.name());
                self.ensure_file(plan.resource(), file, &file_path, policy, mode, &mut report)?;
            }
        }

        Ok(report)
    }

    /// Create a folder unless it exists. An existing folder never blocks
    /// its files from being attempted.
    fn ensure_folder(
        &self,
        path: &Path,
        policy: ExistingPolicy,
        mode: Mode,
        report: &mut ScaffoldReport,
    ) -> CrudgenResult<()> {
        let action = if self.filesystem.exists(path) {
            if policy == ExistingPolicy::Abort {
                return Err(ApplicationError::EntryExists {
                    path: path.to_path_buf(),
                }
                .into());
            }
            Action::AlreadyExists
        } else {
            if mode == Mode::Write {
                self.filesystem.create_dir(path)?;
            }
            Action::Created
        };

        record(report, CreationOutcome::new(path, EntryKind::Folder, action), mode);
        Ok(())
    }

    /// Render and write a file unless it exists. Existing content is only
    /// replaced under [`ExistingPolicy::Overwrite`].
    fn ensure_file(
        &self,
        resource: &ResourceName,
        file: &FileSpec,
        path: &Path,
        policy: ExistingPolicy,
        mode: Mode,
        report: &mut ScaffoldReport,
    ) -> CrudgenResult<()> {
        let action = match (self.filesystem.exists(path), policy) {
            (false, _) => Action::Created,
            (true, ExistingPolicy::Abort) => {
                return Err(ApplicationError::EntryExists {
                    path: path.to_path_buf(),
                }
                .into());
            }
            (true, ExistingPolicy::Skip) => Action::AlreadyExists,
            (true, ExistingPolicy::Overwrite) => Action::Overwritten,
        };

        if action != Action::AlreadyExists && mode == Mode::Write {
            let content = render(resource, file.kind());
            debug!(kind = %file.kind(), bytes = content.len(), "Rendered artifact");
            self.filesystem.write_file(path, &content)?;
        }

        record(report, CreationOutcome::new(path, EntryKind::File, action), mode);
        Ok(())
    }
}

fn record(report: &mut ScaffoldReport, outcome: CreationOutcome, mode: Mode) {
    match mode {
        Mode::Write => info!(path = %outcome.path.display(), "{outcome}"),
        Mode::DryRun => debug!(path = %outcome.path.display(), "(dry run) {outcome}"),
    }
    report.record(outcome);
}
