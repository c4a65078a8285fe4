//! Typed ABI registry for the `truepass` Move module.
//!
//! The crate exposes the module's ABI as an immutable value plus four lookups
//! (`find_function_by_name`, `find_struct_by_name`, `list_view_functions`,
//! `list_entry_functions`). A missing name is `None`, never an error. The
//! `abi` module carries the serde model shared with generated ABI JSON files,
//! schema validation, and `AbiIndex` for ABIs loaded from disk.

pub mod abi;
pub mod registry;

pub use abi::{
    AbiIndex, Ability, AccountAddress, ContractDescriptor, FieldDescriptor, FunctionDescriptor,
    GenericTypeParam, ModuleId, StructDescriptor, Visibility, load_abi_from_path, parse_abi,
    validate_abi_value,
};
pub use registry::{
    CONTRACT_ADDRESS, MODULE_NAME, NETWORK, find_function_by_name, find_struct_by_name,
    list_entry_functions, list_view_functions, truepass_abi,
};
