//! Test fixtures and helpers.
//!
//! Common setup code for evaluator tests.

use std::sync::Arc;

use classroom_access_core::{NamespaceId, Role, SessionRecord, User, UserId};
use classroom_access_store::{MemorySessionStore, SessionLookup};

pub const NAMESPACE_A: &str = "ns-a";
pub const NAMESPACE_B: &str = "ns-b";

/// A system admin. Never bound to a namespace.
pub fn system_admin(id: &str) -> User {
    User::new(id, Role::SystemAdmin, None).with_display_name(format!("Root {}", id))
}

/// A namespace admin in `namespace`.
pub fn namespace_admin(id: &str, namespace: &str) -> User {
    scoped(id, Role::NamespaceAdmin, namespace)
}

/// An instructor in `namespace`.
pub fn instructor(id: &str, namespace: &str) -> User {
    scoped(id, Role::Instructor, namespace)
}

/// A student in `namespace`.
pub fn student(id: &str, namespace: &str) -> User {
    scoped(id, Role::Student, namespace)
}

/// A user of any role, with the namespace the identity store would give it.
pub fn user_with_role(id: &str, role: Role, namespace: &str) -> User {
    match role {
        Role::SystemAdmin => system_admin(id),
        _ => scoped(id, role, namespace),
    }
}

fn scoped(id: &str, role: Role, namespace: &str) -> User {
    User::new(id, role, Some(NamespaceId::from(namespace)))
        .with_display_name(format!("{} {}", role, id))
}

/// One user per role in a namespace.
#[derive(Debug, Clone)]
pub struct Roster {
    pub system_admin: User,
    pub namespace_admin: User,
    pub instructor: User,
    pub student: User,
}

impl Roster {
    /// Ids are suffixed with the namespace so rosters never collide.
    pub fn in_namespace(namespace: &str) -> Self {
        Self {
            system_admin: system_admin("root"),
            namespace_admin: namespace_admin(&format!("admin@{}", namespace), namespace),
            instructor: instructor(&format!("teacher@{}", namespace), namespace),
            student: student(&format!("student@{}", namespace), namespace),
        }
    }

    /// All four users, most privileged first.
    pub fn all(&self) -> [&User; 4] {
        [
            &self.system_admin,
            &self.namespace_admin,
            &self.instructor,
            &self.student,
        ]
    }
}

/// A test fixture holding a shared memory session store.
pub struct TestFixture {
    pub store: Arc<MemorySessionStore>,
}

impl TestFixture {
    /// Create a fixture with an empty store.
    pub fn new() -> Self {
        Self {
            store: Arc::new(MemorySessionStore::new()),
        }
    }

    /// The store as a lookup capability.
    pub fn lookup(&self) -> Arc<dyn SessionLookup> {
        self.store.clone()
    }

    /// Create a session with the given participants and store it.
    pub fn session<'a>(&self, id: &str, participants: impl IntoIterator<Item = &'a User>) -> SessionRecord {
        let session = SessionRecord::new(id, None)
            .with_participants(participants.into_iter().map(|u| u.id.clone()));
        self.insert(session)
    }

    /// Create a session with `count` generated participants plus `extra`.
    pub fn large_session(&self, id: &str, count: usize, extra: Option<&User>) -> SessionRecord {
        let mut session = SessionRecord::new(id, None)
            .with_participants((0..count).map(|i| UserId::from(format!("member-{}", i))));
        if let Some(user) = extra {
            session.participants.push(user.id.clone());
        }
        self.insert(session)
    }

    fn insert(&self, session: SessionRecord) -> SessionRecord {
        self.store
            .insert(session.clone())
            .expect("memory store lock poisoned");
        session
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_is_well_formed() {
        let roster = Roster::in_namespace(NAMESPACE_A);
        for user in roster.all() {
            assert!(user.is_well_formed(), "{:?}", user);
        }
        assert_ne!(roster.instructor.id, Roster::in_namespace(NAMESPACE_B).instructor.id);
    }

    #[tokio::test]
    async fn test_fixture_sessions() {
        let fixture = TestFixture::new();
        let roster = Roster::in_namespace(NAMESPACE_A);
        fixture.session("s1", [&roster.student]);
        let big = fixture.large_session("big", 5_000, Some(&roster.student));

        assert_eq!(big.participants.len(), 5_001);
        let stored = fixture.lookup().get_session(&"s1".into()).await.unwrap().unwrap();
        assert!(stored.is_enrolled(&roster.student.id));
    }
}
