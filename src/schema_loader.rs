//! JSON Schema validation for catalogue documents.
//!
//! The schema lives at `schema/component_catalog.schema.json` and is compiled
//! into the crate. Structural problems (missing fields, wrong types, unknown
//! framework keys) are reported here with every violation listed; semantic
//! checks such as duplicate ids stay in the index.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;

/// Relative path of the catalogue schema inside the source tree.
pub const CATALOG_SCHEMA_PATH: &str = "schema/component_catalog.schema.json";

pub(crate) const CATALOG_SCHEMA: &str =
    include_str!("../schema/component_catalog.schema.json");

/// Validate `document` against the catalogue schema.
pub(crate) fn validate_catalog_document(document: &Value) -> Result<()> {
    let schema: Value =
        serde_json::from_str(CATALOG_SCHEMA).context("parsing component catalog schema")?;
    let compiled = JSONSchema::compile(&schema)
        .map_err(|err| anyhow!("compiling component catalog schema: {err}"))?;

    if let Err(errors) = compiled.validate(document) {
        let details = errors
            .map(|err| format!("{}: {}", err.instance_path, err))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("component catalog failed schema validation:\n{}", details);
    }
    Ok(())
}
