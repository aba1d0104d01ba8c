//! Tests for the PostgreSQL content repository.
//!
//! These tests require a running PostgreSQL database reachable through
//! `DATABASE_URL`. Migrations are applied on first use.

#![cfg(feature = "postgres")]

use catalog_core::{ContentId, ContentInput};
use catalog_database::{PostgresContentRepository, create_pool, run_migrations};
use catalog_interface::ContentRepository;
use chrono::{TimeZone, Utc};

fn create_test_repository() -> PostgresContentRepository {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for postgres tests");
    let pool = create_pool(&url, 2).expect("Failed to create test pool");
    let mut conn = pool.get().expect("Failed to check out connection");
    run_migrations(&mut conn).expect("Failed to run migrations");
    PostgresContentRepository::new(pool)
}

#[tokio::test]
async fn test_create_get_update_delete() {
    let repo = create_test_repository();
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 21, 0, 0).unwrap();

    let input = ContentInput::builder()
        .title("Postgres Movie")
        .description(Some("Stored in postgres".to_string()))
        .start_time(Some(start))
        .genre_list(vec!["Action".to_string(), "Drama".to_string()])
        .build()
        .unwrap();

    let created = repo.create_content(input).await.unwrap().unwrap();
    assert_eq!(created.genre_list, vec!["Action", "Drama"]);
    assert_eq!(created.start_time, Some(start));

    let fetched = repo.get_content(created.id).await.unwrap();
    assert_eq!(fetched.as_ref(), Some(&created));

    let updated = repo
        .update_content(created.id, ContentInput::titled("Renamed"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Renamed");
    assert!(updated.description.is_none());
    assert!(updated.start_time.is_none());
    assert!(updated.genre_list.is_empty());

    assert_eq!(repo.delete_content(created.id).await.unwrap(), created.id);
    assert!(repo.get_content(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_missing_records() {
    let repo = create_test_repository();
    let unknown = ContentId::generate();

    assert!(repo.get_content(unknown).await.unwrap().is_none());
    assert!(
        repo.update_content(unknown, ContentInput::titled("Ghost"))
            .await
            .unwrap()
            .is_none()
    );
    assert_eq!(repo.delete_content(unknown).await.unwrap(), unknown);
}
