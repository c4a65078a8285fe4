//! Embedded ABI of the `truepass` module.
//!
//! Generated from 0x3680dfbdca8eacd6edcf835f5da855e6c7a5cc9e05a1f5ded8f4294810ca0d4
//! on testnet. Function and struct order is the order the fullnode reported
//! and must be kept when regenerating.

use crate::abi::{
    Ability, AccountAddress, ContractDescriptor, FieldDescriptor, FunctionDescriptor,
    StructDescriptor, Visibility,
};
use std::collections::BTreeSet;
use std::sync::LazyLock;

pub const CONTRACT_ADDRESS: &str =
    "0x3680dfbdca8eacd6edcf835f5da855e6c7a5cc9e05a1f5ded8f4294810ca0d4";
pub const MODULE_NAME: &str = "truepass";
/// Network the ABI snapshot was taken from.
pub const NETWORK: &str = "testnet";

const STRING: &str = "0x1::string::String";

static TRUEPASS_ABI: LazyLock<ContractDescriptor> = LazyLock::new(|| ContractDescriptor {
    address: AccountAddress(CONTRACT_ADDRESS.to_string()),
    name: MODULE_NAME.to_string(),
    friends: Vec::new(),
    exposed_functions: vec![
        view_fn("get_message", &["address"], &[STRING]),
        view_fn("get_number", &[], &["u64"]),
        view_fn("get_status", &["address"], &["bool"]),
        entry_fn("init_status", &["signer"]),
        entry_fn("set_message", &["signer", STRING]),
        entry_fn("set_status_true", &["signer"]),
        entry_fn("update_status", &["address", "bool"]),
    ],
    structs: vec![
        struct_def(
            "AddressStatusHolder",
            false,
            &[Ability::Key],
            &[("status", "bool")],
        ),
        struct_def(
            "MessageChange",
            true,
            &[Ability::Drop, Ability::Store],
            &[
                ("account", "address"),
                ("from_message", STRING),
                ("to_message", STRING),
            ],
        ),
        struct_def("MessageHolder", false, &[Ability::Key], &[("message", STRING)]),
    ],
});

/// The full `truepass` ABI, built on first access and never mutated.
pub fn truepass_abi() -> &'static ContractDescriptor {
    &TRUEPASS_ABI
}

pub fn find_function_by_name(name: &str) -> Option<&'static FunctionDescriptor> {
    truepass_abi().find_function(name)
}

pub fn find_struct_by_name(name: &str) -> Option<&'static StructDescriptor> {
    truepass_abi().find_struct(name)
}

pub fn list_view_functions() -> Vec<&'static FunctionDescriptor> {
    truepass_abi().view_functions()
}

pub fn list_entry_functions() -> Vec<&'static FunctionDescriptor> {
    truepass_abi().entry_functions()
}

fn view_fn(name: &str, params: &[&str], returns: &[&str]) -> FunctionDescriptor {
    FunctionDescriptor {
        name: name.to_string(),
        visibility: Visibility::Public,
        is_entry: false,
        is_view: true,
        generic_type_params: Vec::new(),
        params: owned(params),
        returns: owned(returns),
    }
}

fn entry_fn(name: &str, params: &[&str]) -> FunctionDescriptor {
    FunctionDescriptor {
        name: name.to_string(),
        visibility: Visibility::Public,
        is_entry: true,
        is_view: false,
        generic_type_params: Vec::new(),
        params: owned(params),
        returns: Vec::new(),
    }
}

fn struct_def(
    name: &str,
    is_event: bool,
    abilities: &[Ability],
    fields: &[(&str, &str)],
) -> StructDescriptor {
    StructDescriptor {
        name: name.to_string(),
        is_native: false,
        is_event,
        abilities: abilities.iter().copied().collect::<BTreeSet<_>>(),
        generic_type_params: Vec::new(),
        fields: fields
            .iter()
            .map(|(field, type_name)| FieldDescriptor {
                name: field.to_string(),
                type_name: type_name.to_string(),
            })
            .collect(),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
