//! Database migrations.
//!
//! Schema for running against a self-hosted `PostgreSQL` instead of the
//! hosted store.

#![allow(missing_docs)]

use sea_orm_migration::prelude::*;

mod m20250101_000001_create_banner_tables;
mod m20250101_000002_create_content_tables;
mod m20250101_000003_create_gallery_tables;
mod m20250101_000004_create_listing_tables;
mod m20250101_000005_create_settings_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_banner_tables::Migration),
            Box::new(m20250101_000002_create_content_tables::Migration),
            Box::new(m20250101_000003_create_gallery_tables::Migration),
            Box::new(m20250101_000004_create_listing_tables::Migration),
            Box::new(m20250101_000005_create_settings_tables::Migration),
        ]
    }
}
