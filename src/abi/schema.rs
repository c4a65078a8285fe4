//! JSON Schema check for module ABI documents.
//!
//! The schema ships inside the binary so validation does not depend on the
//! working directory. It checks shape only; name uniqueness is enforced by
//! `AbiIndex`.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;

const MODULE_ABI_SCHEMA: &str = include_str!("../../schema/module_abi.schema.json");

/// Validate `abi` against the module ABI schema, reporting every violation.
pub fn validate_abi_value(abi: &Value) -> Result<()> {
    let schema: Value =
        serde_json::from_str(MODULE_ABI_SCHEMA).context("parsing embedded module ABI schema")?;
    let compiled = JSONSchema::compile(&schema)
        .map_err(|err| anyhow!("compiling embedded module ABI schema: {err}"))?;

    if let Err(errors) = compiled.validate(abi) {
        let details = errors
            .map(|err| format!("{}: {}", err.instance_path, err))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("module ABI failed schema validation:\n{details}");
    }
    Ok(())
}
