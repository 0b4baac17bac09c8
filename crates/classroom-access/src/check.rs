//! Pure, synchronous checks.
//!
//! These read only the static permission matrix and the users passed in.
//! [`AccessEvaluator`](crate::AccessEvaluator) wraps them with audit
//! logging; route code that has no evaluator at hand can call them directly.

use classroom_access_core::{permissions_for, Permission, Role, User};

/// True if the user's role holds the token.
///
/// Exact, case-sensitive match. Unknown, empty or malformed tokens miss.
pub fn has_permission(user: &User, token: &str) -> bool {
    permissions_for(user.role)
        .iter()
        .any(|p| p.as_str() == token)
}

/// Typed form of [`has_permission`].
pub fn has(user: &User, permission: Permission) -> bool {
    permissions_for(user.role).contains(&permission)
}

/// True if `actor` may manage `target`.
///
/// Rules, first match wins:
/// 1. System admins manage anyone, themselves and other system admins
///    included. Self-management at this level is kept for bootstrapping.
/// 2. Namespace admins manage instructors and students in their namespace.
/// 3. Instructors manage students in their namespace.
/// 4. Students manage nobody.
///
/// Same-role targets are refused below system admin, which rules out
/// self-management there. A missing namespace on either side never matches.
pub fn can_manage_user(actor: &User, target: &User) -> bool {
    match actor.role {
        Role::SystemAdmin => true,
        Role::NamespaceAdmin => {
            matches!(target.role, Role::Instructor | Role::Student) && actor.shares_namespace(target)
        }
        Role::Instructor => target.role == Role::Student && actor.shares_namespace(target),
        Role::Student => false,
    }
}
