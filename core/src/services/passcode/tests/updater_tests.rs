//! Unit tests for the subject verification updater

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::subject::SubjectId;
use crate::repositories::subject::{MockSubjectStore, SubjectPartition};
use crate::services::passcode::SubjectVerificationUpdater;

use super::mocks::CountingSubjectStore;

fn subject() -> SubjectId {
    SubjectId::Canonical(Uuid::new_v4())
}

#[tokio::test]
async fn test_email_contact_marks_email_channel() {
    let store = Arc::new(MockSubjectStore::new());
    let updater = SubjectVerificationUpdater::new(store.clone());
    let subject = subject();
    store.seed_subject(SubjectPartition::Riders, &subject).await;

    updater.apply(&subject, Some("rider@example.com")).await;

    let row = store.row(SubjectPartition::Riders, &subject).await.unwrap();
    assert!(row.email_verified);
    assert!(!row.phone_verified);
    assert!(row.verified);
    assert!(row.updated_at.is_some());
}

#[tokio::test]
async fn test_missing_contact_marks_phone_channel() {
    let store = Arc::new(MockSubjectStore::new());
    let updater = SubjectVerificationUpdater::new(store.clone());
    let subject = subject();
    store.seed_subject(SubjectPartition::Riders, &subject).await;

    updater.apply(&subject, None).await;

    let row = store.row(SubjectPartition::Riders, &subject).await.unwrap();
    assert!(row.phone_verified);
    assert!(!row.email_verified);
}

#[tokio::test]
async fn test_probes_riders_then_drivers() {
    let store = Arc::new(MockSubjectStore::new());
    let updater = SubjectVerificationUpdater::new(store.clone());
    let subject = subject();
    store.seed_subject(SubjectPartition::Drivers, &subject).await;

    updater.apply(&subject, Some("+8613812345678")).await;

    let row = store.row(SubjectPartition::Drivers, &subject).await.unwrap();
    assert!(row.phone_verified);
}

#[tokio::test]
async fn test_store_errors_are_swallowed() {
    let store = Arc::new(MockSubjectStore::new());
    let updater = SubjectVerificationUpdater::new(store.clone());
    let subject = subject();
    store.set_should_fail(true).await;

    // Must not panic or propagate
    updater.apply(&subject, Some("rider@example.com")).await;
}

#[tokio::test]
async fn test_temporary_subjects_skip_the_store() {
    let store = Arc::new(CountingSubjectStore::new());
    let updater = SubjectVerificationUpdater::new(store.clone());
    let subject = SubjectId::parse("tmp_signup-A1b2C3d4").unwrap();

    updater.apply(&subject, Some("rider@example.com")).await;

    assert_eq!(store.call_count(), 0);
}

#[tokio::test]
async fn test_unknown_subject_probes_every_partition() {
    let store = Arc::new(CountingSubjectStore::new());
    let updater = SubjectVerificationUpdater::new(store.clone());

    updater.apply(&subject(), None).await;

    assert_eq!(store.call_count(), 2);
}
