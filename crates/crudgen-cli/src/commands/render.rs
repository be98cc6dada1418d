//! Implementation of the `crudgen render` command.

use tracing::debug;

use crudgen_core::{
    domain::{ArtifactKind, ResourceName, render},
    error::CrudgenError,
};

use crate::{cli::RenderArgs, error::CliResult, output::OutputManager};

/// Print one artifact exactly as `crudgen new` would write it.
pub fn execute(args: RenderArgs, output: OutputManager) -> CliResult<()> {
    let resource = ResourceName::parse(&args.name).map_err(CrudgenError::from)?;
    let kind = ArtifactKind::from(args.kind);

    let content = render(&resource, kind);
    debug!(
        resource = %resource,
        kind = %kind,
        file = %kind.file_name(&kind.operation().qualified_name(&resource)),
        bytes = content.len(),
        "Rendered artifact"
    );

    output.raw(&content)?;
    Ok(())
}
