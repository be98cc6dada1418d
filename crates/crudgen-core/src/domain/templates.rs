//! Template renderer: `(ResourceName, ArtifactKind)` → file content.
//!
//! Templates are static strings with `{{VARIABLE}}` placeholders filled from a
//! [`RenderContext`]. There are no conditionals or loops; every variation
//! between artifacts is a separate template or a separate variable.
//!
//! ## Generated-artifact contract
//!
//! The downstream router loads these modules by export name and registers
//! them by URL, so the following must stay byte-stable:
//!
//! | Artifact        | Export          | URL                              | Method   |
//! |-----------------|-----------------|----------------------------------|----------|
//! | add handler     | `add<Name>`     | `/broncoLogistics/<Name>`        | `POST`   |
//! | delete handler  | `delete<Name>`  | `/broncoLogistics/<Name>/:id`    | `DELETE` |
//! | update handler  | `update<Name>`  | `/broncoLogistics/<Name>/:id`    | `PUT`    |
//! | get handler     | (empty module)  |                                  |          |
//!
//! Both schemas declare `holidayDate` and `holidayValue` as optional strings
//! with no additional properties.

use std::collections::BTreeMap;

use crate::domain::value_objects::{ArtifactKind, Operation, ResourceName};

/// Render the content of one artifact.
///
/// Pure: the same arguments always produce byte-identical output. The name is
/// interpolated without escaping, which is sound because [`ResourceName`]
/// only admits ASCII letters, digits, and `_`.
pub fn render(name: &ResourceName, kind: ArtifactKind) -> String {
    match kind {
        // Placeholder for the not-yet-implemented read route.
        ArtifactKind::GetHandler => String::new(),
        ArtifactKind::AddSchema | ArtifactKind::UpdateSchema => render_body_schema(),
        ArtifactKind::AddHandler => render_handler(name, Operation::Add, ADD_HANDLER_BODY),
        ArtifactKind::DeleteHandler => {
            render_handler(name, Operation::Delete, DELETE_HANDLER_BODY)
        }
        ArtifactKind::UpdateHandler => {
            render_handler(name, Operation::Update, UPDATE_HANDLER_BODY)
        }
    }
}

// ============================================================================
// Render Context
// ============================================================================

/// Variables available to a template.
///
/// | Variable            | Example                  |
/// |---------------------|--------------------------|
/// | `RESOURCE_NAME`     | `Rate`                   |
/// | `EXPORT_NAME`       | `updateRate`             |
/// | `ROUTE_METHOD`      | `PUT`                    |
/// | `MIDDLEWARE_MODULE` | `validateToken.mjs`      |
/// | `SCHEMA_IMPORT`     | import line or empty     |
/// | `SCHEMA_OPTION`     | `schema:` block or empty |
/// | `BODY`              | handler body             |
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    // BTreeMap keeps substitution order stable across runs.
    variables: BTreeMap<&'static str, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variable(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.variables.insert(key, value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every `{{KEY}}` placeholder with its value.
    ///
    /// Unknown placeholders are left untouched. Values are substituted in key
    /// order, so a value that itself contains a placeholder for a later key
    /// is expanded too (used to splice `BODY` before the body's own
    /// variables are filled).
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            result = result.replace(&format!("{{{{{key}}}}}"), value);
        }
        result
    }
}

// ============================================================================
// Schema
// ============================================================================

/// Shared by `AddSchema` and `UpdateSchema`; both request bodies accept the
/// same two fields.
fn render_body_schema() -> String {
    BODY_SCHEMA.to_string()
}

const BODY_SCHEMA: &str = r#"export const bodySchema = /** @type {const} */ ({
    type: "object",
    properties: {
        holidayDate: { type: "string" },
        holidayValue: { type: "string" },
    },
    required: [],
    additionalProperties: false,
})
/** @typedef {import("json-schema-to-ts").FromSchema<typeof bodySchema>} Body */
"#;

// ============================================================================
// Handlers
// ============================================================================

fn render_handler(name: &ResourceName, operation: Operation, body: &str) -> String {
    let export_name = operation.qualified_name(name);
    let has_schema = operation.artifacts().iter().any(|kind| kind.is_schema());

    let (schema_import, schema_option) = if has_schema {
        (
            format!("import {{ bodySchema }} from \"./{export_name}.schema.mjs\"\n"),
            SCHEMA_OPTION.to_string(),
        )
    } else {
        (String::new(), String::new())
    };

    // Delete imports the middleware barrel module.
    let middleware_module = match operation {
        Operation::Delete => "index.mjs",
        _ => "validateToken.mjs",
    };

    RenderContext::new()
        // "BODY" sorts first, so its placeholders are filled by the later keys.
        .with_variable("BODY", body)
        .with_variable("EXPORT_NAME", export_name)
        .with_variable("MIDDLEWARE_MODULE", middleware_module)
        .with_variable("RESOURCE_NAME", name.as_str())
        .with_variable("ROUTE_METHOD", operation.route_method())
        .with_variable("SCHEMA_IMPORT", schema_import)
        .with_variable("SCHEMA_OPTION", schema_option)
        .render(HANDLER_MODULE)
}

const HANDLER_MODULE: &str = r##"// @ts-nocheck
import { db } from "#src/core/database/index.mjs"
{{SCHEMA_IMPORT}}import { validateToken } from "#src/core/server/middleware/{{MIDDLEWARE_MODULE}}"
import { requestMeta } from "#src/core/helpers/requestMeta.mjs"
import { validateUser } from "#src/app/routes/validateUser.mjs"

/** @type {import("fastify").RouteOptions} */
export const {{EXPORT_NAME}} = {
{{BODY}}}
"##;

const SCHEMA_OPTION: &str = r#"    schema: {
        body: bodySchema,
    },
"#;

const ADD_HANDLER_BODY: &str = r#"    url: "/broncoLogistics/{{RESOURCE_NAME}}",
    method: "{{ROUTE_METHOD}}",
{{SCHEMA_OPTION}}    preValidation: [validateToken],
    handler: async (req) => {
        const body = /** @type {import("./{{EXPORT_NAME}}.schema.mjs").Body} */ (req.body)
        const { userId } = requestMeta(req)
        await validateUser(userId, true)

        try {
            const dbQuery = await db.holidayModifier.create({
                data: body,
            })

            return {
                status: "Success",
                data: dbQuery,
            }
        } catch (error) {
            return {
                status: "Error",
                message: "Failed to add item",
            }
        }
    },
"#;

const DELETE_HANDLER_BODY: &str = r#"    url: "/broncoLogistics/{{RESOURCE_NAME}}/:id",
    method: "{{ROUTE_METHOD}}",
{{SCHEMA_OPTION}}    preValidation: [validateToken],
    handler: async (req) => {
        const { userId } = requestMeta(req)
        const itemIdToDelete = req.params.id
        await validateUser(userId, true)

        const dbQuery = await db.customerContractRates.findUnique({
            where: {
                id: itemIdToDelete,
            },
        })

        if (!dbQuery) {
            return {
                status: "Error",
                message: "Item not found",
            }
        }

        await db.customerContractRates.delete({
            where: {
                id: itemIdToDelete,
            },
        })

        return {
            status: "Success",
            message: "Item deleted successfully",
        }
    },
"#;

const UPDATE_HANDLER_BODY: &str = r#"    url: "/broncoLogistics/{{RESOURCE_NAME}}/:id",
    method: "{{ROUTE_METHOD}}",
{{SCHEMA_OPTION}}    preValidation: [validateToken],
    handler: async (req) => {
        const body = /** @type {import("./{{EXPORT_NAME}}.schema.mjs").Body} */ (req.body)
        const itemIdToUpdate = req.params.id
        const { userId } = requestMeta(req)
        await validateUser(userId, true)

        const checkDBQuery = await db.customerContractRates.findUnique({
            where: {
                id: itemIdToUpdate,
            },
        })

        if (!checkDBQuery) return { status: "Error", message: "Item not found" }

        try {
            const dbQuery = await db.customerContractRates.update({
                where: {
                    id: itemIdToUpdate,
                },
                data: body,
            })

            return {
                status: "Success",
                data: dbQuery,
            }
        } catch (error) {
            return {
                status: "Error",
                message: "Failed to update Item",
            }
        }
    },
"#;
