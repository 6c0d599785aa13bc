//! Create the donate_content and logo_settings tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create donate_content table
        manager
            .create_table(
                Table::create()
                    .table(DonateContent::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(DonateContent::Id).string_len(36).not_null().primary_key())
                    .col(ColumnDef::new(DonateContent::Title).string_len(256).not_null())
                    .col(ColumnDef::new(DonateContent::Description).text().not_null())
                    .col(
                        ColumnDef::new(DonateContent::QrCodes)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(DonateContent::BankAccounts)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(DonateContent::IsActive).boolean().not_null().default(true))
                    .col(
                        ColumnDef::new(DonateContent::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(DonateContent::UpdatedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // Create logo_settings table
        manager
            .create_table(
                Table::create()
                    .table(LogoSettings::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(LogoSettings::Id).string_len(36).not_null().primary_key())
                    .col(ColumnDef::new(LogoSettings::LogoUrl).text().not_null())
                    .col(ColumnDef::new(LogoSettings::AltText).string_len(256))
                    .col(ColumnDef::new(LogoSettings::IsActive).boolean().not_null().default(false))
                    .col(
                        ColumnDef::new(LogoSettings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(LogoSettings::UpdatedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // Index: is_active (footer reads the active logo)
        manager
            .create_index(
                Index::create()
                    .name("idx_logo_settings_is_active")
                    .table(LogoSettings::Table)
                    .col(LogoSettings::IsActive)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LogoSettings::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(DonateContent::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum DonateContent {
    Table,
    Id,
    Title,
    Description,
    QrCodes,
    BankAccounts,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum LogoSettings {
    Table,
    Id,
    LogoUrl,
    AltText,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
