//! Unit tests for the mock passcode repository

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::passcode::{PasscodeRecord, Purpose};
use crate::domain::entities::subject::SubjectId;
use crate::repositories::passcode::{MockPasscodeRepository, PasscodeRepository};

fn subject() -> SubjectId {
    SubjectId::Canonical(Uuid::new_v4())
}

fn record(subject: &SubjectId, code: &str) -> PasscodeRecord {
    PasscodeRecord::new(
        subject.clone(),
        Purpose::Verification,
        code.to_string(),
        None,
        10,
    )
}

#[tokio::test]
async fn test_insert_assigns_sequential_ids() {
    let repo = MockPasscodeRepository::new();
    let subject = subject();

    let first = repo.insert(record(&subject, "111111")).await.unwrap();
    let second = repo.insert(record(&subject, "222222")).await.unwrap();

    assert_eq!(first.id, Some(1));
    assert_eq!(second.id, Some(2));
}

#[tokio::test]
async fn test_find_active_skips_used_and_expired() {
    let repo = MockPasscodeRepository::new();
    let subject = subject();

    let mut used = record(&subject, "111111");
    used.used = true;
    repo.seed(used).await;

    let mut expired = record(&subject, "222222");
    expired.expires_at = Utc::now() - Duration::minutes(1);
    repo.seed(expired).await;

    assert!(repo
        .find_active(&subject, Purpose::Verification)
        .await
        .unwrap()
        .is_none());

    let live_id = repo.seed(record(&subject, "333333")).await;
    let found = repo
        .find_active(&subject, Purpose::Verification)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, Some(live_id));
}

#[tokio::test]
async fn test_newest_wins_with_ascending_id_tie_break() {
    let repo = MockPasscodeRepository::new();
    let subject = subject();
    let now = Utc::now();

    let mut older = record(&subject, "111111");
    older.created_at = now - Duration::seconds(30);
    repo.seed(older).await;

    // Two records sharing a created_at: the lower id wins the tie
    let mut tied_a = record(&subject, "222222");
    tied_a.created_at = now;
    let tied_a_id = repo.seed(tied_a).await;

    let mut tied_b = record(&subject, "333333");
    tied_b.created_at = now;
    repo.seed(tied_b).await;

    let found = repo
        .find_most_recent(&subject, Purpose::Verification)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, Some(tied_a_id));
}

#[tokio::test]
async fn test_find_most_recent_includes_terminal_records() {
    let repo = MockPasscodeRepository::new();
    let subject = subject();

    let mut used = record(&subject, "111111");
    used.used = true;
    let used_id = repo.seed(used).await;

    let found = repo
        .find_most_recent(&subject, Purpose::Verification)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, Some(used_id));
}

#[tokio::test]
async fn test_invalidate_active_counts_unused_only() {
    let repo = MockPasscodeRepository::new();
    let subject = subject();

    repo.seed(record(&subject, "111111")).await;

    // Expired but unused records are still invalidated
    let mut expired = record(&subject, "222222");
    expired.expires_at = Utc::now() - Duration::minutes(1);
    repo.seed(expired).await;

    let mut already_used = record(&subject, "333333");
    already_used.used = true;
    repo.seed(already_used).await;

    let invalidated = repo
        .invalidate_active(&subject, Purpose::Verification)
        .await
        .unwrap();
    assert_eq!(invalidated, 2);
    assert!(repo.all_records().await.iter().all(|r| r.used));
}

#[tokio::test]
async fn test_invalidate_active_is_scoped_to_purpose() {
    let repo = MockPasscodeRepository::new();
    let subject = subject();

    repo.seed(record(&subject, "111111")).await;
    let mut login = record(&subject, "222222");
    login.purpose = Purpose::Login;
    let login_id = repo.seed(login).await;

    let invalidated = repo
        .invalidate_active(&subject, Purpose::Verification)
        .await
        .unwrap();
    assert_eq!(invalidated, 1);

    let still_active = repo
        .find_active(&subject, Purpose::Login)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(still_active.id, Some(login_id));
}

#[tokio::test]
async fn test_increment_attempts_returns_new_count() {
    let repo = MockPasscodeRepository::new();
    let subject = subject();
    let id = repo.seed(record(&subject, "111111")).await;

    assert_eq!(repo.increment_attempts(id).await.unwrap(), 1);
    assert_eq!(repo.increment_attempts(id).await.unwrap(), 2);

    assert!(repo.increment_attempts(999).await.is_err());
}

#[tokio::test]
async fn test_mark_used_terminates_record() {
    let repo = MockPasscodeRepository::new();
    let subject = subject();
    let id = repo.seed(record(&subject, "111111")).await;

    repo.mark_used(id).await.unwrap();

    assert!(repo
        .find_active(&subject, Purpose::Verification)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_should_fail_surfaces_internal_error() {
    let repo = MockPasscodeRepository::new();
    let subject = subject();
    repo.set_should_fail(true).await;

    let result = repo.find_active(&subject, Purpose::Verification).await;
    assert!(result.is_err());
}
