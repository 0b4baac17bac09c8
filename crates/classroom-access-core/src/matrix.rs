//! The role → permission matrix.
//!
//! The matrix is hand-authored data. Each role maps to a `static` slice, so
//! the same reference is handed out on every call and callers may cache on
//! pointer identity. The hierarchy (student ⊂ instructor ⊂ namespace-admin ⊂
//! system-admin) is a property of the data, checked by the tests below,
//! not something computed at runtime.

use crate::permission::Permission;
use crate::role::Role;

use Permission::*;

static STUDENT: &[Permission] = &[SessionJoin, ProblemRead, ClassRead, SectionRead, DataViewOwn];

static INSTRUCTOR: &[Permission] = &[
    SessionCreate,
    SessionJoin,
    SessionViewAll,
    SessionDelete,
    UserViewAll,
    ProblemCreate,
    ProblemRead,
    ProblemUpdate,
    ProblemDelete,
    ClassCreate,
    ClassRead,
    ClassUpdate,
    ClassDelete,
    SectionCreate,
    SectionRead,
    SectionUpdate,
    SectionDelete,
    DataViewOwn,
    DataViewAll,
    DataExport,
];

static NAMESPACE_ADMIN: &[Permission] = &[
    SessionCreate,
    SessionJoin,
    SessionViewAll,
    SessionDelete,
    UserManage,
    UserCreate,
    UserDelete,
    UserViewAll,
    UserChangeRole,
    ProblemCreate,
    ProblemRead,
    ProblemUpdate,
    ProblemDelete,
    ClassCreate,
    ClassRead,
    ClassUpdate,
    ClassDelete,
    SectionCreate,
    SectionRead,
    SectionUpdate,
    SectionDelete,
    DataViewOwn,
    DataViewAll,
    DataExport,
    NamespaceManage,
];

// System admins hold every token, including the namespace lifecycle ones.
static SYSTEM_ADMIN: &[Permission] = Permission::ALL;

/// The permissions granted to a role.
///
/// Never empty. Returns the same `'static` slice on every call for a given
/// role.
pub fn permissions_for(role: Role) -> &'static [Permission] {
    match role {
        Role::SystemAdmin => SYSTEM_ADMIN,
        Role::NamespaceAdmin => NAMESPACE_ADMIN,
        Role::Instructor => INSTRUCTOR,
        Role::Student => STUDENT,
    }
}

/// Every role holding `permission`, most privileged first.
pub fn roles_with(permission: Permission) -> Vec<Role> {
    Role::ALL
        .into_iter()
        .filter(|role| permissions_for(*role).contains(&permission))
        .collect()
}
