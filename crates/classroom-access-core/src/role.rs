//! Platform roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::matrix::permissions_for;
use crate::permission::Permission;

/// A platform role.
///
/// Roles are a closed set. Privilege is ordered informally from
/// [`Role::SystemAdmin`] down to [`Role::Student`]; no numeric rank is
/// stored, the hierarchy lives in the permission matrix and the management
/// rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// Platform operator. Not bound to any namespace.
    SystemAdmin,
    /// Administrator of a single namespace.
    NamespaceAdmin,
    /// Teaches classes and runs sessions inside a namespace.
    Instructor,
    /// Joins sessions they are enrolled in.
    Student,
}

impl Role {
    /// Every role, most privileged first.
    pub const ALL: [Role; 4] = [
        Role::SystemAdmin,
        Role::NamespaceAdmin,
        Role::Instructor,
        Role::Student,
    ];

    /// The wire name of the role.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::SystemAdmin => "system-admin",
            Role::NamespaceAdmin => "namespace-admin",
            Role::Instructor => "instructor",
            Role::Student => "student",
        }
    }

    /// Elevated roles bypass per-session enrollment checks.
    pub const fn is_elevated(&self) -> bool {
        !matches!(self, Role::Student)
    }

    /// The permissions granted to this role.
    pub fn permissions(&self) -> &'static [Permission] {
        permissions_for(*self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| CoreError::UnknownRole(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wire_names() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            "Instructor".parse::<Role>(),
            Err(CoreError::UnknownRole("Instructor".into()))
        );
        assert!("admin".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_elevated_roles() {
        assert!(Role::SystemAdmin.is_elevated());
        assert!(Role::NamespaceAdmin.is_elevated());
        assert!(Role::Instructor.is_elevated());
        assert!(!Role::Student.is_elevated());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&Role::NamespaceAdmin).unwrap();
        assert_eq!(json, "\"namespace-admin\"");
        let role: Role = serde_json::from_str("\"system-admin\"").unwrap();
        assert_eq!(role, Role::SystemAdmin);
    }
}
