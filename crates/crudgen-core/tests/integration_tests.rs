//! Integration tests for crudgen-core, driven through the in-memory adapter.

use std::path::{Path, PathBuf};

use crudgen_adapters::MemoryFilesystem;
use crudgen_core::{
    application::ApplicationError,
    prelude::*,
};

const WORKDIR: &str = "/work";

fn setup() -> (ScaffoldService, MemoryFilesystem) {
    let filesystem = MemoryFilesystem::new().with_directory(WORKDIR);
    let service = ScaffoldService::new(Box::new(filesystem.clone()));
    (service, filesystem)
}

fn rate_root() -> PathBuf {
    Path::new(WORKDIR).join("Rate")
}

#[test]
fn test_full_scaffold_workflow() {
    let (service, filesystem) = setup();

    let report = service
        .run("Rate", WORKDIR, ExistingPolicy::Abort)
        .unwrap();

    let root = rate_root();
    assert_eq!(report.root(), root);
    assert_eq!(report.created(), 11);
    assert_eq!(report.skipped(), 0);

    for folder in ["getRate", "deleteRate", "updateRate", "addRate"] {
        assert!(filesystem.exists(&root.join(folder)), "{folder}");
    }

    let files = filesystem.list_files();
    assert_eq!(files.len(), 6);
    assert!(files.contains(&root.join("addRate").join("addRate.schema.mjs")));
    assert!(files.contains(&root.join("updateRate").join("updateRate.schema.mjs")));

    let get = filesystem
        .read_file(&root.join("getRate").join("getRate.mjs"))
        .unwrap();
    assert!(get.is_empty());
}

#[test]
fn test_outcome_messages_follow_creation_order() {
    let (service, _) = setup();

    let report = service
        .run("Rate", WORKDIR, ExistingPolicy::Abort)
        .unwrap();

    let lines: Vec<String> = report.outcomes().iter().map(ToString::to_string).collect();
    let root = rate_root();
    assert_eq!(lines[0], format!("Created folder: {}", root.display()));
    assert_eq!(
        lines[1],
        format!("Created folder: {}", root.join("getRate").display())
    );
    assert_eq!(
        lines[2],
        format!(
            "Created file: {}",
            root.join("getRate").join("getRate.mjs").display()
        )
    );
}

#[test]
fn test_rerun_with_skip_is_idempotent() {
    let (service, filesystem) = setup();
    service.run("Rate", WORKDIR, ExistingPolicy::Abort).unwrap();

    let before: Vec<(PathBuf, Option<String>)> = filesystem
        .list_files()
        .into_iter()
        .map(|path| {
            let content = filesystem.read_file(&path);
            (path, content)
        })
        .collect();
    let writes = filesystem.write_count();

    let report = service.run("Rate", WORKDIR, ExistingPolicy::Skip).unwrap();

    assert_eq!(report.created(), 0);
    assert_eq!(report.skipped(), 11);
    assert_eq!(filesystem.write_count(), writes);
    for (path, content) in before {
        assert_eq!(filesystem.read_file(&path), content);
    }
}

#[test]
fn test_skip_fills_in_missing_folders() {
    // Root already exists but is empty.
    let filesystem = MemoryFilesystem::new().with_directory("/work/Rate");
    let service = ScaffoldService::new(Box::new(filesystem.clone()));

    let report = service.run("Rate", WORKDIR, ExistingPolicy::Skip).unwrap();

    let root = report.outcome_for(&rate_root()).unwrap();
    assert_eq!(root.action, Action::AlreadyExists);
    assert_eq!(report.created(), 10);
    assert_eq!(filesystem.list_files().len(), 6);
}

#[test]
fn test_overwrite_restores_modified_files() {
    let (service, filesystem) = setup();
    service.run("Rate", WORKDIR, ExistingPolicy::Abort).unwrap();

    let handler = rate_root().join("addRate").join("addRate.mjs");
    let original = filesystem.read_file(&handler).unwrap();
    filesystem.tamper(&handler, "// edited by hand\n");

    let report = service
        .run("Rate", WORKDIR, ExistingPolicy::Overwrite)
        .unwrap();

    assert_eq!(report.overwritten(), 6);
    assert_eq!(filesystem.read_file(&handler).unwrap(), original);
    assert_eq!(
        report.outcome_for(&handler).unwrap().to_string(),
        format!("Overwrote file: {}", handler.display())
    );
}

#[test]
fn test_existing_root_aborts_without_outcomes() {
    let filesystem = MemoryFilesystem::new().with_directory("/work/Rate");
    let service = ScaffoldService::new(Box::new(filesystem.clone()));

    let err = service
        .run("Rate", WORKDIR, ExistingPolicy::Abort)
        .unwrap_err();

    assert!(matches!(
        err,
        CrudgenError::Application(ApplicationError::RootExists { .. })
    ));
    assert!(!filesystem.exists(&rate_root().join("getRate")));
    assert!(filesystem.list_files().is_empty());
}

#[test]
fn test_invalid_names_are_rejected() {
    let (service, filesystem) = setup();

    for name in ["", "../Rate", "Rate Card", "Rate/Card", "ñame"] {
        let result = service.run(name, WORKDIR, ExistingPolicy::Abort);
        assert!(matches!(result, Err(CrudgenError::Domain(_))), "{name:?}");
    }
    assert_eq!(filesystem.list_directories(), vec![
        PathBuf::from("/"),
        PathBuf::from(WORKDIR)
    ]);
}

#[test]
fn test_update_handler_contract() {
    let (service, filesystem) = setup();
    service.run("Rate", WORKDIR, ExistingPolicy::Abort).unwrap();

    let update = filesystem
        .read_file(&rate_root().join("updateRate").join("updateRate.mjs"))
        .unwrap();

    assert!(update.contains("export const updateRate = {"));
    assert!(update.contains("url: \"/broncoLogistics/Rate/:id\""));
    assert!(update.contains("method: \"PUT\""));
    assert!(update.contains("import { bodySchema } from \"./updateRate.schema.mjs\""));
    assert!(update.contains("if (!checkDBQuery) return { status: \"Error\", message: \"Item not found\" }"));
    assert!(!update.contains("{{"));
}

#[test]
fn test_preview_matches_real_run() {
    let (service, filesystem) = setup();

    let preview = service
        .preview("Rate", WORKDIR, ExistingPolicy::Abort)
        .unwrap();
    assert!(filesystem.list_files().is_empty());

    let report = service.run("Rate", WORKDIR, ExistingPolicy::Abort).unwrap();
    assert_eq!(preview.outcomes(), report.outcomes());
}

#[test]
fn test_different_resources_share_a_parent() {
    let (service, filesystem) = setup();

    service.run("Rate", WORKDIR, ExistingPolicy::Abort).unwrap();
    service
        .run("Holiday", WORKDIR, ExistingPolicy::Abort)
        .unwrap();

    assert_eq!(filesystem.list_files().len(), 12);
    assert!(filesystem.exists(
        &Path::new(WORKDIR)
            .join("Holiday")
            .join("deleteHoliday")
            .join("deleteHoliday.mjs")
    ));
}

#[test]
fn test_default_output_dir_scaffolds_relative_root() {
    let filesystem = MemoryFilesystem::new();
    let service = ScaffoldService::new(Box::new(filesystem.clone()));

    let report = service.run("Rate", ".", ExistingPolicy::Abort).unwrap();

    assert_eq!(report.root(), Path::new("Rate"));
    assert_eq!(report.created(), 11);
    assert_eq!(
        filesystem.read_file(&Path::new("Rate").join("getRate").join("getRate.mjs")),
        Some(String::new())
    );

    let err = service
        .run("Rate", ".", ExistingPolicy::Abort)
        .unwrap_err();
    assert!(matches!(
        err,
        CrudgenError::Application(ApplicationError::RootExists { .. })
    ));
}
