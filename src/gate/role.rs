//! Dashboard roles as issued by the authentication service.
//!
//! The set is closed. Labels are matched exactly; anything else is treated as
//! "no role" by the caller and fails every role check.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Role {
    SuperUser,
    Admin,
    Manager,
    Operator,
    User,
    #[serde(rename = "ITRA")]
    Itra,
    Guest,
}

impl Role {
    /// Every role, in the order the authentication service lists them.
    pub const ALL: [Self; 7] = [
        Self::SuperUser,
        Self::Admin,
        Self::Manager,
        Self::Operator,
        Self::User,
        Self::Itra,
        Self::Guest,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SuperUser => "SuperUser",
            Self::Admin => "Admin",
            Self::Manager => "Manager",
            Self::Operator => "Operator",
            Self::User => "User",
            Self::Itra => "ITRA",
            Self::Guest => "Guest",
        }
    }

    /// Parse a role label, returning `None` for unknown labels.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == label)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| UnknownRole(s.to_string()))
    }
}
