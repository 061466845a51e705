//! Unit tests for the mock subject store

use uuid::Uuid;

use crate::domain::entities::subject::SubjectId;
use crate::repositories::subject::{
    ContactChannel, MockSubjectStore, SubjectPartition, SubjectStore,
};

fn subject() -> SubjectId {
    SubjectId::Canonical(Uuid::new_v4())
}

#[tokio::test]
async fn test_mark_verified_sets_channel_and_overall_flags() {
    let store = MockSubjectStore::new();
    let subject = subject();
    store.seed_subject(SubjectPartition::Riders, &subject).await;

    let updated = store
        .mark_verified(SubjectPartition::Riders, &subject, ContactChannel::Email)
        .await
        .unwrap();
    assert!(updated);

    let row = store.row(SubjectPartition::Riders, &subject).await.unwrap();
    assert!(row.email_verified);
    assert!(!row.phone_verified);
    assert!(row.verified);
    assert!(row.updated_at.is_some());
}

#[tokio::test]
async fn test_mark_verified_misses_other_partition() {
    let store = MockSubjectStore::new();
    let subject = subject();
    store.seed_subject(SubjectPartition::Drivers, &subject).await;

    let updated = store
        .mark_verified(SubjectPartition::Riders, &subject, ContactChannel::Phone)
        .await
        .unwrap();
    assert!(!updated);

    let updated = store
        .mark_verified(SubjectPartition::Drivers, &subject, ContactChannel::Phone)
        .await
        .unwrap();
    assert!(updated);
}

#[tokio::test]
async fn test_partition_probe_order() {
    assert_eq!(
        SubjectPartition::all(),
        [SubjectPartition::Riders, SubjectPartition::Drivers]
    );
}
