//! Clinic staff roles

use crate::RoleNotFoundError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identity category used to gate access to routes.
///
/// The set is closed: permission tables can only name these roles, and
/// anything else fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum Role {
    Ceo,
    Admin,
    Doctor,
    Nurse,
    Receptionist,
    Pharmacist,
}

impl Role {
    /// Every role, in declaration order
    pub const ALL: [Role; 6] = [
        Role::Ceo,
        Role::Admin,
        Role::Doctor,
        Role::Nurse,
        Role::Receptionist,
        Role::Pharmacist,
    ];

    /// Upper-case identifier used in tables and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Ceo => "CEO",
            Role::Admin => "ADMIN",
            Role::Doctor => "DOCTOR",
            Role::Nurse => "NURSE",
            Role::Receptionist => "RECEPTIONIST",
            Role::Pharmacist => "PHARMACIST",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleNotFoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RoleNotFoundError {
                value: s.to_string(),
                available_roles: Role::ALL.iter().map(|r| r.as_str().to_string()).collect(),
            })
    }
}

impl TryFrom<String> for Role {
    type Error = RoleNotFoundError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
