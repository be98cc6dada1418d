//! Implementation of the `crudgen plan` command.

use std::path::Path;

use crudgen_core::{
    domain::{ResourceName, ScaffoldPlan, plan},
    error::CrudgenError,
};

use crate::{
    cli::{OutputFormat, PlanArgs, PlanFormat},
    error::CliResult,
    output::OutputManager,
};

/// Print the layout a resource would get. Never touches the filesystem.
pub fn execute(args: PlanArgs, output: OutputManager) -> CliResult<()> {
    let resource = ResourceName::parse(&args.name).map_err(CrudgenError::from)?;
    let layout = plan(&resource);

    // `--output-format json` implies JSON regardless of `--format`.
    let format = if output.format() == OutputFormat::Json {
        PlanFormat::Json
    } else {
        args.format
    };

    match format {
        PlanFormat::Json => output.json(&layout)?,
        PlanFormat::List => {
            for path in file_paths(&layout) {
                output.print(&path)?;
            }
        }
        PlanFormat::Tree => {
            output.header(&format!("{}/", layout.resource()))?;
            for (connector, label) in tree_lines(&layout) {
                output.print(&format!("{}{label}", output.dimmed(&connector)))?;
            }
        }
    }

    Ok(())
}

/// Every file path, relative to the parent directory, in creation order.
fn file_paths(layout: &ScaffoldPlan) -> Vec<String> {
    let root = Path::new(layout.resource().as_str());
    layout
        .files()
        .map(|(folder, file)| root.join(folder.file_path(file)).display().to_string())
        .collect()
}

/// `(connector, label)` pairs for everything below the root line.
fn tree_lines(layout: &ScaffoldPlan) -> Vec<(String, String)> {
    let mut lines = Vec::with_capacity(layout.folder_count() + layout.file_count());
    let folders = layout.folders();

    for (i, folder) in folders.iter().enumerate() {
        let last_folder = i + 1 == folders.len();
        let (branch, indent) = if last_folder {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        lines.push((branch.to_string(), format!("{}/", folder.name())));

        let files = folder.files();
        for (j, file) in files.iter().enumerate() {
            let leaf = if j + 1 == files.len() { "└── " } else { "├── " };
            lines.push((format!("{indent}{leaf}"), file.name().to_string()));
        }
    }

    lines
}
