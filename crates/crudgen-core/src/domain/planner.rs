//! Layout planner: resource name → folder/file layout.
//!
//! ```text
//! <Name>/
//! ├── get<Name>/      get<Name>.mjs                              (empty)
//! ├── delete<Name>/   delete<Name>.mjs
//! ├── update<Name>/   update<Name>.mjs, update<Name>.schema.mjs
//! └── add<Name>/      add<Name>.mjs,    add<Name>.schema.mjs
//! ```

use crate::domain::{
    entities::{FileSpec, FolderSpec, ScaffoldPlan},
    value_objects::{Operation, ResourceName},
};

/// Build the scaffold plan for `name`.
///
/// Pure and total: always four folders (get, delete, update, add) holding six
/// files in total.
pub fn plan(name: &ResourceName) -> ScaffoldPlan {
    let folders = Operation::ALL
        .into_iter()
        .map(|operation| {
            let stem = operation.qualified_name(name);
            let files = operation
                .artifacts()
                .iter()
                .map(|&kind| FileSpec {
                    name: kind.file_name(&stem),
                    kind,
                })
                .collect();

            FolderSpec {
                name: stem,
                operation,
                files,
            }
        })
        .collect();

    ScaffoldPlan {
        resource: name.clone(),
        folders,
    }
}
