//! Integration tests for PgStorage.
//! Run with: DATABASE_URL=... cargo test -p box-tracker-storage -- --ignored pg_

#![cfg(feature = "postgres")]
#![allow(clippy::unwrap_used, reason = "integration test code")]

use box_tracker_core::{BoxUpdate, NewBox};
use box_tracker_storage::{BoxStore, MigrationStep, PgPoolSettings, PgStorage};
use chrono::{DurationRound, TimeDelta, Utc};
use uuid::Uuid;

async fn create_pg_storage() -> PgStorage {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for PgStorage integration tests");
    PgStorage::new(&url).await.expect("Failed to connect to PostgreSQL")
}

fn unique_room() -> String {
    format!("test-{}", &Uuid::new_v4().to_string()[..8])
}

#[tokio::test]
#[ignore]
async fn pg_migrations_are_idempotent() {
    let url = std::env::var("DATABASE_URL").unwrap();
    PgStorage::connect(&url, PgPoolSettings::default()).await.unwrap();

    let (_, report) = PgStorage::connect(&url, PgPoolSettings::default()).await.unwrap();
    assert!(report.is_noop());
    assert!(report.skipped.contains(&MigrationStep::AddHiddenColumn));
}

#[tokio::test(flavor = "multi_thread")]
#[ignore]
async fn pg_concurrent_migration_passes_all_succeed() {
    let url = std::env::var("DATABASE_URL").unwrap();
    let mut handles = Vec::new();
    for _ in 0..4 {
        let url = url.clone();
        handles.push(tokio::spawn(async move {
            PgStorage::connect(&url, PgPoolSettings::default()).await.map(|(_, report)| report)
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }
}

#[tokio::test]
#[ignore]
async fn pg_create_and_get_box() {
    let storage = create_pg_storage().await;
    let room = unique_room();
    // TIMESTAMPTZ keeps microseconds.
    let before = Utc::now().duration_trunc(TimeDelta::microseconds(1)).unwrap();

    let created = storage.create_box(NewBox::new(5, room.clone(), "dishes")).await.unwrap();
    assert!(created.id > 0);
    assert!(created.created_at >= before);
    assert!(!created.hidden);

    let fetched = storage.get_box(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.number, 5);
    assert_eq!(fetched.room, room);
    assert_eq!(fetched.contents, "dishes");
    assert!(fetched.image_url.is_none());

    storage.delete_box(created.id).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn pg_update_and_toggle() {
    let storage = create_pg_storage().await;
    let created = storage.create_box(NewBox::new(11, unique_room(), "books")).await.unwrap();

    let update = BoxUpdate {
        room: "Office".to_owned(),
        contents: "more books".to_owned(),
        image_url: Some("https://img/box.jpg".to_owned()),
    };
    let updated = storage.update_box(created.id, update).await.unwrap().unwrap();
    assert_eq!(updated.room, "Office");
    assert_eq!(updated.image_url.as_deref(), Some("https://img/box.jpg"));

    let hidden = storage.set_hidden(created.id, true).await.unwrap().unwrap();
    assert!(hidden.hidden);
    let visible_ids: Vec<i32> =
        storage.list_boxes(false).await.unwrap().iter().map(|b| b.id).collect();
    assert!(!visible_ids.contains(&created.id));

    let shown = storage.set_hidden(created.id, false).await.unwrap().unwrap();
    assert!(!shown.hidden);

    storage.delete_box(created.id).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn pg_unknown_ids() {
    let storage = create_pg_storage().await;
    let before = storage.list_boxes(true).await.unwrap().len();

    assert!(!storage.delete_box(i32::MAX).await.unwrap());
    assert!(storage.set_hidden(i32::MAX, true).await.unwrap().is_none());
    assert_eq!(storage.list_boxes(true).await.unwrap().len(), before);
}

#[tokio::test]
#[ignore]
async fn pg_list_is_ordered_by_number() {
    let storage = create_pg_storage().await;
    let room = unique_room();
    let mut ids = Vec::new();
    for n in [30, 10, 20] {
        ids.push(storage.create_box(NewBox::new(n, room.clone(), "mixed")).await.unwrap().id);
    }

    let numbers: Vec<i32> = storage
        .list_boxes(true)
        .await
        .unwrap()
        .into_iter()
        .filter(|b| b.room == room)
        .map(|b| b.number)
        .collect();
    assert_eq!(numbers, vec![10, 20, 30]);

    for id in ids {
        storage.delete_box(id).await.unwrap();
    }
}
