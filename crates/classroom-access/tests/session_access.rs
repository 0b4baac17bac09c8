//! Session access checks against real and misbehaving session lookups.

use std::sync::Arc;
use std::time::{Duration, Instant};

use classroom_access::{AccessEvaluator, EvaluatorConfig, SessionAccess, SessionId};
use classroom_access_testkit::capture::EventCapture;
use classroom_access_testkit::doubles::{CountingLookup, FailingLookup, SlowLookup};
use classroom_access_testkit::fixtures::{student, Roster, TestFixture, NAMESPACE_A};
use tracing::Level;

fn sid(id: &str) -> SessionId {
    SessionId::from(id)
}

#[tokio::test]
async fn elevated_roles_never_consult_the_lookup() {
    let fixture = TestFixture::new();
    let lookup = Arc::new(CountingLookup::new(fixture.store.clone()));
    let evaluator =
        AccessEvaluator::with_shared_lookup(lookup.clone(), EvaluatorConfig::default());
    let roster = Roster::in_namespace(NAMESPACE_A);

    for user in [&roster.system_admin, &roster.namespace_admin, &roster.instructor] {
        assert!(evaluator.can_access_session(user, &sid("nonexistent")).await);
        assert!(evaluator.can_access_session(user, None).await);
    }
    assert_eq!(lookup.calls(), 0);
}

#[tokio::test]
async fn student_access_follows_enrollment() {
    let fixture = TestFixture::new();
    let roster = Roster::in_namespace(NAMESPACE_A);
    let outsider = student("outsider", NAMESPACE_A);
    fixture.session("enrolled", [&roster.student]);
    fixture.session("empty", []);

    let evaluator = AccessEvaluator::with_shared_lookup(fixture.lookup(), EvaluatorConfig::default());

    assert!(evaluator.can_access_session(&roster.student, &sid("enrolled")).await);
    assert!(!evaluator.can_access_session(&outsider, &sid("enrolled")).await);
    assert!(!evaluator.can_access_session(&roster.student, &sid("empty")).await);
    assert!(!evaluator.can_access_session(&roster.student, &sid("missing")).await);
    assert!(!evaluator.can_access_session(&roster.student, None).await);
}

#[tokio::test]
async fn enrollment_changes_are_seen_immediately() {
    let fixture = TestFixture::new();
    let pupil = student("pupil", NAMESPACE_A);
    fixture.session("s1", []);
    let evaluator = AccessEvaluator::with_shared_lookup(fixture.lookup(), EvaluatorConfig::default());

    assert!(!evaluator.can_access_session(&pupil, &sid("s1")).await);
    fixture.store.enroll(&sid("s1"), pupil.id.clone()).unwrap();
    assert!(evaluator.can_access_session(&pupil, &sid("s1")).await);
    fixture.store.unenroll(&sid("s1"), &pupil.id).unwrap();
    assert!(!evaluator.can_access_session(&pupil, &sid("s1")).await);
}

#[tokio::test]
async fn large_sessions_are_scanned_correctly() {
    let fixture = TestFixture::new();
    let pupil = student("pupil", NAMESPACE_A);
    fixture.large_session("with-pupil", 10_000, Some(&pupil));
    fixture.large_session("without-pupil", 10_000, None);
    let evaluator = AccessEvaluator::with_shared_lookup(fixture.lookup(), EvaluatorConfig::default());

    let start = Instant::now();
    assert!(evaluator.can_access_session(&pupil, &sid("with-pupil")).await);
    assert!(!evaluator.can_access_session(&pupil, &sid("without-pupil")).await);
    assert!(start.elapsed() < Duration::from_secs(1));
}

#[tokio::test]
async fn missing_lookup_denies_and_warns() {
    let capture = EventCapture::new();
    let _guard = capture.set_default();

    let evaluator = AccessEvaluator::new(EvaluatorConfig::default());
    let pupil = student("pupil", NAMESPACE_A);

    assert_eq!(
        evaluator.session_access(&pupil, &sid("s1")).await,
        SessionAccess::NoSessionLookup
    );
    assert!(!evaluator.can_access_session(&pupil, &sid("s1")).await);

    let warnings = capture.warnings();
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0].field("session_id"), Some("s1"));
}

#[tokio::test]
async fn missing_lookup_warns_even_without_session_id() {
    let capture = EventCapture::new();
    let _guard = capture.set_default();

    let evaluator = AccessEvaluator::new(EvaluatorConfig::default());
    let pupil = student("pupil", NAMESPACE_A);

    assert_eq!(
        evaluator.session_access(&pupil, None).await,
        SessionAccess::NoSessionLookup
    );
    let warnings = capture.warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field("session_id"), None);
    assert_eq!(warnings[0].field("user_id"), Some("pupil"));

    assert_eq!(
        evaluator.session_access(&pupil, &sid("")).await,
        SessionAccess::NoSessionLookup
    );
    assert_eq!(capture.warnings().len(), 2);
}

#[tokio::test]
async fn lookup_failure_denies_and_warns() {
    let capture = EventCapture::new();
    let _guard = capture.set_default();

    let evaluator = AccessEvaluator::with_session_lookup(
        FailingLookup::new("database offline"),
        EvaluatorConfig::default(),
    );
    let roster = Roster::in_namespace(NAMESPACE_A);

    assert_eq!(
        evaluator.session_access(&roster.student, &sid("s1")).await,
        SessionAccess::LookupFailed
    );
    let warnings = capture.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0]
        .field("error")
        .is_some_and(|e| e.contains("database offline")));

    // Elevated roles never reach the failing store.
    assert!(evaluator.can_access_session(&roster.instructor, &sid("s1")).await);
    assert_eq!(capture.warnings().len(), 1);
}

#[tokio::test]
async fn denials_are_audited_when_enabled() {
    let capture = EventCapture::new();
    let _guard = capture.set_default();
    let pupil = student("pupil", NAMESPACE_A);

    let audited = AccessEvaluator::with_session_lookup(
        TestFixture::new().store,
        EvaluatorConfig::default(),
    );
    assert!(!audited.can_access_session(&pupil, &sid("s1")).await);
    let audit = capture.with_target("classroom_access::audit");
    assert_eq!(audit.len(), 1);
    assert_eq!(audit[0].level, Level::DEBUG);
    assert!(audit[0].field("action").is_some_and(|a| a.contains("s1")));

    capture.clear();
    let quiet = AccessEvaluator::with_session_lookup(
        TestFixture::new().store,
        EvaluatorConfig {
            audit_denials: false,
        },
    );
    assert!(!quiet.can_access_session(&pupil, &sid("s1")).await);
    assert!(capture.with_target("classroom_access::audit").is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_checks_are_isolated() {
    const PAIRS: usize = 64;

    let fixture = TestFixture::new();
    let users: Vec<_> = (0..PAIRS)
        .map(|i| student(&format!("pupil-{}", i), NAMESPACE_A))
        .collect();
    // Even sessions enroll their paired student, odd ones enroll nobody.
    for (i, user) in users.iter().enumerate() {
        let enrolled: Vec<_> = if i % 2 == 0 { vec![user] } else { vec![] };
        fixture.session(&format!("session-{}", i), enrolled);
    }

    let evaluator = Arc::new(AccessEvaluator::with_session_lookup(
        SlowLookup::new(fixture.store.clone(), Duration::from_millis(50)),
        EvaluatorConfig::default(),
    ));

    let start = Instant::now();
    let handles: Vec<_> = users
        .into_iter()
        .enumerate()
        .map(|(i, user)| {
            let evaluator = Arc::clone(&evaluator);
            tokio::spawn(async move {
                let session = SessionId::from(format!("session-{}", i));
                (i, evaluator.can_access_session(&user, &session).await)
            })
        })
        .collect();

    for handle in handles {
        let (i, granted) = handle.await.unwrap();
        assert_eq!(granted, i % 2 == 0, "pair {} got the wrong answer", i);
    }
    // All lookups overlapped instead of running back to back.
    assert!(start.elapsed() < Duration::from_millis(50 * PAIRS as u64));
}

#[tokio::test]
async fn session_json_without_participants_denies() {
    let record: classroom_access::SessionRecord =
        serde_json::from_str(r#"{"id":"s1","namespaceId":"ns-a"}"#).unwrap();
    let store = classroom_access::store::MemorySessionStore::with_sessions([record]);
    let evaluator = AccessEvaluator::with_session_lookup(store, EvaluatorConfig::default());

    let pupil = student("pupil", NAMESPACE_A);
    assert_eq!(
        evaluator.session_access(&pupil, &sid("s1")).await,
        SessionAccess::NotEnrolled
    );
}
