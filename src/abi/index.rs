//! Indexed view of a module ABI.
//!
//! The index rejects ABIs whose function or struct names collide, so a name
//! lookup can never depend on list order. Lookups are answered from
//! precomputed maps; listings still follow generation order.

use crate::abi::model::{ContractDescriptor, FunctionDescriptor, StructDescriptor};
use crate::abi::schema::validate_abi_value;
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Clone)]
/// Module ABI plus name-keyed positions into its function and struct lists.
pub struct AbiIndex {
    descriptor: ContractDescriptor,
    functions_by_name: BTreeMap<String, usize>,
    structs_by_name: BTreeMap<String, usize>,
}

impl AbiIndex {
    /// Load, schema-check, and index an ABI file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("opening ABI {}", path.display()))?;
        let value: Value = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing ABI {}", path.display()))?;
        validate_abi_value(&value).with_context(|| format!("validating {}", path.display()))?;

        let descriptor: ContractDescriptor = serde_json::from_value(value)
            .with_context(|| format!("decoding ABI {}", path.display()))?;
        Self::from_descriptor(descriptor).with_context(|| format!("indexing {}", path.display()))
    }

    /// Index an in-memory descriptor after checking its naming invariants.
    pub fn from_descriptor(descriptor: ContractDescriptor) -> Result<Self> {
        if !descriptor.address.is_well_formed() {
            bail!("module address '{}' is not a 0x-prefixed hex string", descriptor.address);
        }
        if descriptor.name.trim().is_empty() {
            bail!("module name must not be empty");
        }

        let functions_by_name = index_names(
            "function",
            descriptor.exposed_functions.iter().map(|f| f.name.as_str()),
        )?;
        let structs_by_name =
            index_names("struct", descriptor.structs.iter().map(|s| s.name.as_str()))?;

        for item in &descriptor.structs {
            let mut seen = BTreeSet::new();
            for field in &item.fields {
                if field.name.trim().is_empty() {
                    bail!("struct {} has a field with no name", item.name);
                }
                if !seen.insert(field.name.as_str()) {
                    bail!("struct {} declares field {} twice", item.name, field.name);
                }
            }
        }

        Ok(Self {
            descriptor,
            functions_by_name,
            structs_by_name,
        })
    }

    /// Resolve a function by exact name.
    pub fn function(&self, name: &str) -> Option<&FunctionDescriptor> {
        self.functions_by_name
            .get(name)
            .map(|&pos| &self.descriptor.exposed_functions[pos])
    }

    /// Resolve a struct by exact name.
    pub fn structure(&self, name: &str) -> Option<&StructDescriptor> {
        self.structs_by_name
            .get(name)
            .map(|&pos| &self.descriptor.structs[pos])
    }

    pub fn view_functions(&self) -> Vec<&FunctionDescriptor> {
        self.descriptor.view_functions()
    }

    pub fn entry_functions(&self) -> Vec<&FunctionDescriptor> {
        self.descriptor.entry_functions()
    }

    /// Function names in generation order.
    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.descriptor
            .exposed_functions
            .iter()
            .map(|func| func.name.as_str())
    }

    pub fn descriptor(&self) -> &ContractDescriptor {
        &self.descriptor
    }
}

fn index_names<'a>(
    kind: &str,
    names: impl Iterator<Item = &'a str>,
) -> Result<BTreeMap<String, usize>> {
    let mut map = BTreeMap::new();
    for (pos, name) in names.enumerate() {
        if name.trim().is_empty() {
            bail!("encountered {kind} with no name at position {pos}");
        }
        if map.insert(name.to_string(), pos).is_some() {
            bail!("duplicate {kind} name {name}");
        }
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abi::identity::{AccountAddress, Visibility};
    use crate::abi::model::FieldDescriptor;
    use std::collections::BTreeSet;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn function(name: &str, is_entry: bool, is_view: bool) -> FunctionDescriptor {
        FunctionDescriptor {
            name: name.to_string(),
            visibility: Visibility::Public,
            is_entry,
            is_view,
            generic_type_params: Vec::new(),
            params: Vec::new(),
            returns: Vec::new(),
        }
    }

    fn structure(name: &str, fields: &[&str]) -> StructDescriptor {
        StructDescriptor {
            name: name.to_string(),
            is_native: false,
            is_event: false,
            abilities: BTreeSet::new(),
            generic_type_params: Vec::new(),
            fields: fields
                .iter()
                .map(|field| FieldDescriptor {
                    name: field.to_string(),
                    type_name: "u8".to_string(),
                })
                .collect(),
        }
    }

    fn descriptor() -> ContractDescriptor {
        ContractDescriptor {
            address: AccountAddress("0xbeef".into()),
            name: "ledger".into(),
            friends: Vec::new(),
            exposed_functions: vec![
                function("post", true, false),
                function("total", false, true),
                function("peek", false, true),
            ],
            structs: vec![structure("Entry", &["amount", "memo"])],
        }
    }

    #[test]
    fn resolves_names_through_the_index() {
        let index = AbiIndex::from_descriptor(descriptor()).unwrap();
        assert!(index.function("total").unwrap().is_view);
        assert!(index.function("TOTAL").is_none());
        assert_eq!(index.structure("Entry").unwrap().fields.len(), 2);
        assert!(index.structure("Missing").is_none());
        assert_eq!(index.function_names().collect::<Vec<_>>(), ["post", "total", "peek"]);

        let views: Vec<&str> = index.view_functions().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(views, ["total", "peek"]);
        assert_eq!(index.entry_functions().len(), 1);
    }

    #[test]
    fn rejects_duplicate_function_names() {
        let mut abi = descriptor();
        abi.exposed_functions.push(function("post", false, false));
        let err = AbiIndex::from_descriptor(abi).unwrap_err();
        assert!(err.to_string().contains("duplicate function name post"));
    }

    #[test]
    fn rejects_duplicate_struct_and_field_names() {
        let mut abi = descriptor();
        abi.structs.push(structure("Entry", &[]));
        let err = AbiIndex::from_descriptor(abi).unwrap_err();
        assert!(err.to_string().contains("duplicate struct name Entry"));

        let mut abi = descriptor();
        abi.structs = vec![structure("Entry", &["amount", "amount"])];
        let err = AbiIndex::from_descriptor(abi).unwrap_err();
        assert!(err.to_string().contains("declares field amount twice"));
    }

    #[test]
    fn rejects_function_with_empty_name() {
        let mut abi = descriptor();
        abi.exposed_functions[1].name = String::new();
        let err = AbiIndex::from_descriptor(abi).unwrap_err();
        assert!(
            err.to_string()
                .contains("encountered function with no name at position 1"),
            "{err}"
        );
    }

    #[test]
    fn rejects_struct_with_empty_name() {
        let mut abi = descriptor();
        abi.structs[0].name = "  ".into();
        let err = AbiIndex::from_descriptor(abi).unwrap_err();
        assert!(
            err.to_string()
                .contains("encountered struct with no name at position 0"),
            "{err}"
        );
    }

    #[test]
    fn rejects_field_with_empty_name() {
        let mut abi = descriptor();
        abi.structs = vec![structure("Entry", &["amount", ""])];
        let err = AbiIndex::from_descriptor(abi).unwrap_err();
        assert!(
            err.to_string().contains("struct Entry has a field with no name"),
            "{err}"
        );
    }

    #[test]
    fn rejects_bad_module_identity() {
        let mut abi = descriptor();
        abi.address = AccountAddress("beef".into());
        assert!(AbiIndex::from_descriptor(abi).is_err());

        let mut abi = descriptor();
        abi.name = " ".into();
        assert!(AbiIndex::from_descriptor(abi).is_err());
    }

    #[test]
    fn load_validates_schema_before_indexing() {
        let mut file = NamedTempFile::new().unwrap();
        let mut value = serde_json::to_value(descriptor()).unwrap();
        file.write_all(value.to_string().as_bytes()).unwrap();
        let index = AbiIndex::load(file.path()).unwrap();
        assert_eq!(index.descriptor(), &descriptor());

        value["exposed_functions"][0]["is_view"] = Value::String("yes".into());
        let mut bad = NamedTempFile::new().unwrap();
        bad.write_all(value.to_string().as_bytes()).unwrap();
        let err = AbiIndex::load(bad.path()).unwrap_err();
        assert!(format!("{err:#}").contains("failed schema validation"));
    }
}
