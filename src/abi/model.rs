//! Serde representation of a Move module ABI.
//!
//! Field names follow the JSON the fullnode API serves under a module's
//! `abi` key, so generated files and dumps of the embedded registry share one
//! shape. Lookups on `ContractDescriptor` scan in generation order; use
//! `AbiIndex` when a validated, name-keyed view is preferable.

use crate::abi::identity::{Ability, AccountAddress, ModuleId, Visibility};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// Complete ABI of one published module.
pub struct ContractDescriptor {
    pub address: AccountAddress,
    pub name: String,
    #[serde(default)]
    pub friends: Vec<String>,
    #[serde(default)]
    pub exposed_functions: Vec<FunctionDescriptor>,
    #[serde(default)]
    pub structs: Vec<StructDescriptor>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FunctionDescriptor {
    pub name: String,
    pub visibility: Visibility,
    pub is_entry: bool,
    pub is_view: bool,
    #[serde(default)]
    pub generic_type_params: Vec<GenericTypeParam>,
    #[serde(default)]
    pub params: Vec<String>,
    #[serde(rename = "return", default)]
    pub returns: Vec<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StructDescriptor {
    pub name: String,
    pub is_native: bool,
    #[serde(default)]
    pub is_event: bool,
    #[serde(default)]
    pub abilities: BTreeSet<Ability>,
    #[serde(default)]
    pub generic_type_params: Vec<GenericTypeParam>,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// Named, typed struct field. Types are Move type strings such as `u64` or
/// `0x1::string::String`.
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// Generic type parameter and the abilities its instantiation must carry.
pub struct GenericTypeParam {
    #[serde(default)]
    pub constraints: BTreeSet<Ability>,
}

impl ContractDescriptor {
    pub fn module_id(&self) -> ModuleId {
        ModuleId {
            address: self.address.clone(),
            name: self.name.clone(),
        }
    }

    /// First function whose name matches exactly (case-sensitive).
    pub fn find_function(&self, name: &str) -> Option<&FunctionDescriptor> {
        self.exposed_functions.iter().find(|func| func.name == name)
    }

    /// First struct whose name matches exactly (case-sensitive).
    pub fn find_struct(&self, name: &str) -> Option<&StructDescriptor> {
        self.structs.iter().find(|item| item.name == name)
    }

    /// View functions in generation order.
    pub fn view_functions(&self) -> Vec<&FunctionDescriptor> {
        self.exposed_functions
            .iter()
            .filter(|func| func.is_view)
            .collect()
    }

    /// Entry functions in generation order.
    pub fn entry_functions(&self) -> Vec<&FunctionDescriptor> {
        self.exposed_functions
            .iter()
            .filter(|func| func.is_entry)
            .collect()
    }

    /// `address::module::function` for an exposed function, if it exists.
    pub fn qualified_function_id(&self, name: &str) -> Option<String> {
        self.find_function(name)
            .map(|func| self.module_id().qualified_function(&func.name))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serializing module ABI")
    }
}

impl FunctionDescriptor {
    /// True when the first parameter is the transaction signer.
    pub fn takes_signer(&self) -> bool {
        self.params.first().is_some_and(|param| is_signer_type(param))
    }

    /// Parameter types a caller supplies explicitly.
    ///
    /// Leading `signer`/`&signer` parameters are filled in by the transaction
    /// sender and are not part of an entry-function payload.
    pub fn argument_types(&self) -> &[String] {
        let skip = self
            .params
            .iter()
            .take_while(|param| is_signer_type(param))
            .count();
        &self.params[skip..]
    }
}

impl StructDescriptor {
    pub fn has_ability(&self, ability: Ability) -> bool {
        self.abilities.contains(&ability)
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }
}

fn is_signer_type(param: &str) -> bool {
    matches!(param, "signer" | "&signer")
}

/// Parse a module ABI from JSON text without additional validation.
///
/// Ability lists are normalized to sets: duplicates collapse and order becomes
/// `copy, drop, store, key`.
pub fn parse_abi(data: &str) -> Result<ContractDescriptor> {
    let descriptor: ContractDescriptor = serde_json::from_str(data)?;
    Ok(descriptor)
}

/// Read and parse a module ABI from disk without additional validation.
pub fn load_abi_from_path(path: &Path) -> Result<ContractDescriptor> {
    let data = fs::read_to_string(path)?;
    parse_abi(&data)
}
