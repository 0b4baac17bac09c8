//! Proptest generators for property-based testing.

use proptest::prelude::*;

use classroom_access_core::{NamespaceId, Permission, Role, User, UserId};

/// Generate a role.
pub fn role() -> impl Strategy<Value = Role> {
    prop::sample::select(Role::ALL.to_vec())
}

/// Generate a permission from the closed set.
pub fn permission() -> impl Strategy<Value = Permission> {
    prop::sample::select(Permission::ALL)
}

/// Generate a string that is never a valid permission token.
///
/// Mixes mangled real tokens (wrong case, padding, punctuation) with
/// arbitrary strings.
pub fn invalid_token() -> impl Strategy<Value = String> {
    let mangled = (permission(), 0usize..4).prop_map(|(p, how)| match how {
        0 => p.as_str().to_uppercase(),
        1 => format!(" {}", p.as_str()),
        2 => format!("{}!", p.as_str()),
        _ => p.as_str().replace('.', ":"),
    });
    prop_oneof![
        mangled,
        "[a-z]{0,8}(\\.[a-z]{0,8})?".prop_filter("must not be a real token", |s| {
            s.parse::<Permission>().is_err()
        }),
    ]
}

/// Generate a namespace id from a small pool so collisions happen.
pub fn namespace_id() -> impl Strategy<Value = NamespaceId> {
    prop::sample::select(vec!["ns-a", "ns-b", "ns-c"]).prop_map(NamespaceId::from)
}

/// Generate a user id.
pub fn user_id() -> impl Strategy<Value = UserId> {
    "u-[a-z0-9]{1,8}".prop_map(UserId::from)
}

/// Generate a well-formed user with the given role strategy.
pub fn user_with(role: impl Strategy<Value = Role>) -> impl Strategy<Value = User> {
    (user_id(), role, namespace_id()).prop_map(|(id, role, ns)| {
        let ns = (role != Role::SystemAdmin).then_some(ns);
        User::new(id, role, ns)
    })
}

/// Generate a well-formed user of any role.
pub fn user() -> impl Strategy<Value = User> {
    user_with(role())
}

/// Generate a user whose namespace may be missing regardless of role.
pub fn malformed_user() -> impl Strategy<Value = User> {
    (user_id(), role(), prop::option::of(namespace_id()))
        .prop_map(|(id, role, ns)| User::new(id, role, ns))
}
