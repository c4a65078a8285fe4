//! Move module ABI types.
//!
//! `model` mirrors the JSON a fullnode serves for a module's ABI, `identity`
//! holds the small typed pieces (addresses, visibility, abilities), `schema`
//! checks raw JSON before decoding, and `AbiIndex` is the validated,
//! name-keyed view for ABIs loaded from disk.

pub mod identity;
pub mod index;
pub mod model;
pub mod schema;

pub use identity::{Ability, AccountAddress, ModuleId, Visibility};
pub use index::AbiIndex;
pub use model::{
    ContractDescriptor, FieldDescriptor, FunctionDescriptor, GenericTypeParam, StructDescriptor,
};
pub use schema::validate_abi_value;

pub use model::{load_abi_from_path, parse_abi};
