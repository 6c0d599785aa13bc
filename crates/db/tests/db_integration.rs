//! Store integration tests.
//!
//! The `PostgreSQL` tests require a running instance.
//! Run with: `cargo test --test db_integration -- --ignored`
//!
//! Environment variables:
//!   `TEST_DB_HOST` (default: localhost)
//!   `TEST_DB_PORT` (default: 5433)
//!   `TEST_DB_USER` (default: `charity_test`)
//!   `TEST_DB_PASSWORD` (default: `charity_test`)
//!   `TEST_DB_NAME` (default: `charity_test`)

#![allow(clippy::unwrap_used, clippy::expect_used)]

use charity_db::entities::{
    Certification, LogoSettings, ProgramContent, Record, Service, Statistic,
};
use charity_db::repositories::ContentRepository;
use charity_db::store::{ContentStore, Query, SharedStore, Table};
use charity_db::test_utils::{TestDatabase, TestDbConfig, row, seeded_store};
use serde_json::json;

async fn exercise_program_content(store: SharedStore) {
    let repo: ContentRepository<ProgramContent> =
        ContentRepository::new(store.clone(), Table::MedicalContent);

    let mut content = ProgramContent {
        title: "Medical Camp".to_string(),
        description: "Free checkups".to_string(),
        services: vec![Service {
            icon: "stethoscope".to_string(),
            title: "Checkups".to_string(),
            description: "Monthly".to_string(),
        }],
        statistics: vec![Statistic {
            number: "1200+".to_string(),
            label: "Patients".to_string(),
        }],
        ..Default::default()
    };
    content.set_id("mc-1".to_string());
    content.created_at = Some(chrono::Utc::now());
    repo.insert(&content).await.unwrap();

    let latest = repo.find_latest_active().await.unwrap().unwrap();
    assert_eq!(latest.title, "Medical Camp");
    assert_eq!(latest.services, content.services);
    assert_eq!(latest.statistics[0].number, "1200+");

    assert_eq!(repo.set_active("mc-1", false).await.unwrap(), 1);
    assert!(repo.find_latest_active().await.unwrap().is_none());
    assert_eq!(repo.find_all().await.unwrap().len(), 1);

    assert_eq!(repo.delete("mc-1").await.unwrap(), 1);
    assert!(store.select(&Query::select(Table::MedicalContent)).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_memory_store_program_content() {
    let store = seeded_store(vec![]).await;
    exercise_program_content(store).await;
}

#[tokio::test]
async fn test_memory_store_logo_deactivation() {
    let store = seeded_store(vec![(
        Table::LogoSettings,
        vec![
            json!({"id": "a", "logo_url": "a.png", "is_active": true}),
            json!({"id": "b", "logo_url": "b.png", "is_active": false}),
            json!({"id": "c", "logo_url": "c.png", "is_active": true}),
        ],
    )])
    .await;
    let repo: ContentRepository<LogoSettings> =
        ContentRepository::new(store.clone(), Table::LogoSettings);

    repo.deactivate_others("b").await.unwrap();
    repo.set_active("b", true).await.unwrap();

    let active: Vec<String> = repo
        .find_active(None)
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.id)
        .collect();
    assert_eq!(active, vec!["b".to_string()]);
}

#[tokio::test]
async fn test_memory_store_keeps_optional_pdf_null() {
    let store = seeded_store(vec![]).await;
    let repo: ContentRepository<Certification> =
        ContentRepository::new(store.clone(), Table::Certifications);

    let mut cert = Certification {
        certificate_name: "12A Registration".to_string(),
        ..Default::default()
    };
    cert.set_id("cert-1".to_string());
    repo.insert(&cert).await.unwrap();

    let stored = &store.rows(Table::Certifications).await[0];
    assert!(stored["pdf_url"].is_null());
    assert_eq!(repo.find_active(None).await.unwrap()[0].pdf_link(), None);
}

#[test]
fn test_config_from_env() {
    let config = TestDbConfig::default();
    assert!(!config.host.is_empty());
    assert!(config.port > 0);
    assert!(!config.database.is_empty());
    assert!(config.database_url().starts_with("postgres://"));
}

#[test]
fn test_row_helper() {
    let r = row(json!({"id": "x", "is_active": true}));
    assert_eq!(r.len(), 2);
}

#[tokio::test]
#[ignore = "requires running PostgreSQL instance"]
async fn test_postgres_store_program_content() {
    let db = TestDatabase::new().await.expect("Failed to connect");
    db.cleanup().await.unwrap();
    exercise_program_content(db.store()).await;
}

#[tokio::test]
#[ignore = "requires running PostgreSQL instance"]
async fn test_postgres_store_insert_fills_defaults() {
    let db = TestDatabase::new().await.expect("Failed to connect");
    db.cleanup().await.unwrap();
    let store = db.store();

    store
        .insert(
            Table::Causes,
            vec![row(json!({"id": "c1", "title": "Education", "description": "Books"}))],
        )
        .await
        .unwrap();

    let rows = store.select(&Query::select(Table::Causes)).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["is_active"], true);
    assert_eq!(rows[0]["sort_order"], 0);
    assert!(rows[0]["created_at"].is_string());
}
