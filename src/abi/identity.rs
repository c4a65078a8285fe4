use serde::{Deserialize, Serialize};
use std::fmt;

/// Hex account address that publishes a module (e.g. `0x1`).
///
/// Kept as the textual form the fullnode API returns so serialized ABIs stay
/// byte-for-byte comparable with generated files.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountAddress(pub String);

impl AccountAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `0x` followed by one to 64 hex digits.
    pub fn is_well_formed(&self) -> bool {
        let Some(digits) = self.0.strip_prefix("0x") else {
            return false;
        };
        !digits.is_empty() && digits.len() <= 64 && digits.chars().all(|c| c.is_ascii_hexdigit())
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fully qualified module identity, rendered as `address::name`.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ModuleId {
    pub address: AccountAddress,
    pub name: String,
}

impl ModuleId {
    pub fn new(address: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            address: AccountAddress(address.into()),
            name: name.into(),
        }
    }

    /// Function identifier in the `address::module::function` form used by
    /// view calls and entry-function payloads.
    pub fn qualified_function(&self, function: &str) -> String {
        format!("{self}::{function}")
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.address, self.name)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
    Friend,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::Friend => "friend",
        }
    }
}

/// Capability tag on a struct or type parameter constraint.
///
/// Variant order is the canonical Move order, so an ability set serializes
/// as `copy, drop, store, key`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    Copy,
    Drop,
    Store,
    Key,
}

impl Ability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ability::Copy => "copy",
            Ability::Drop => "drop",
            Ability::Store => "store",
            Ability::Key => "key",
        }
    }
}
