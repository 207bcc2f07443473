//! Access level enumeration for programs.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Who may see a program once it is created.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessType {
    /// Visible to every user of the platform
    Public,

    /// Visible to the program's admins only
    #[default]
    Private,
}

impl From<bool> for AccessType {
    fn from(is_public: bool) -> Self {
        if is_public {
            AccessType::Public
        } else {
            AccessType::Private
        }
    }
}

impl FromStr for AccessType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "public" => Ok(AccessType::Public),
            "private" => Ok(AccessType::Private),
            _ => Err(format!("Invalid access type: {s}")),
        }
    }
}

impl AccessType {
    /// Wire representation used by the program API.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessType::Public => "PUBLIC",
            AccessType::Private => "PRIVATE",
        }
    }

    /// Label shown next to the visibility choice.
    pub fn label(&self) -> &'static str {
        match self {
            AccessType::Public => "Public",
            AccessType::Private => "Private",
        }
    }
}
