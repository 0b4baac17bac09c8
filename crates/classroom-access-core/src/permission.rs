//! Permission tokens.
//!
//! A permission is a `resource.action` token. The set is closed: the
//! evaluator only ever grants tokens listed here, and any other string
//! simply misses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

macro_rules! permissions {
    ($($(#[$meta:meta])* $variant:ident => $token:literal,)+) => {
        /// A grantable capability, written as a `resource.action` token.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum Permission {
            $(
                $(#[$meta])*
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl Permission {
            /// Every permission token, in declaration order.
            pub const ALL: &'static [Permission] = &[$(Permission::$variant,)+];

            /// The `resource.action` token.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Permission::$variant => $token,)+
                }
            }
        }
    };
}

permissions! {
    SessionCreate => "session.create",
    SessionJoin => "session.join",
    /// See every session in the namespace, not only enrolled ones.
    SessionViewAll => "session.viewAll",
    SessionDelete => "session.delete",

    /// Umbrella permission for the user administration screens.
    UserManage => "user.manage",
    UserCreate => "user.create",
    UserDelete => "user.delete",
    UserViewAll => "user.viewAll",
    UserChangeRole => "user.changeRole",

    ProblemCreate => "problem.create",
    ProblemRead => "problem.read",
    ProblemUpdate => "problem.update",
    ProblemDelete => "problem.delete",

    ClassCreate => "class.create",
    ClassRead => "class.read",
    ClassUpdate => "class.update",
    ClassDelete => "class.delete",

    SectionCreate => "section.create",
    SectionRead => "section.read",
    SectionUpdate => "section.update",
    SectionDelete => "section.delete",

    /// Read one's own submissions and session history.
    DataViewOwn => "data.viewOwn",
    DataViewAll => "data.viewAll",
    DataExport => "data.export",

    NamespaceCreate => "namespace.create",
    NamespaceManage => "namespace.manage",
    NamespaceDelete => "namespace.delete",
    NamespaceViewAll => "namespace.viewAll",

    SystemAdmin => "system.admin",
}

impl Permission {
    /// The resource half of the token (`session` in `session.create`).
    pub fn resource(&self) -> &'static str {
        self.as_str()
            .split_once('.')
            .map_or(self.as_str(), |(resource, _)| resource)
    }

    /// The action half of the token (`create` in `session.create`).
    pub fn action(&self) -> &'static str {
        self.as_str()
            .split_once('.')
            .map_or("", |(_, action)| action)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| CoreError::UnknownPermission(s.to_owned()))
    }
}
