//! Create the about and program content tables.

use sea_orm_migration::prelude::*;

/// Relief, medical, old-age home and children home pages share one shape.
const PROGRAM_TABLES: [&str; 4] = [
    "relief_content",
    "medical_content",
    "oldage_content",
    "children_content",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create about_content table
        manager
            .create_table(
                Table::create()
                    .table(AboutContent::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(AboutContent::Id).string_len(36).not_null().primary_key())
                    .col(ColumnDef::new(AboutContent::Title).string_len(256).not_null())
                    .col(ColumnDef::new(AboutContent::Subtitle).text())
                    .col(ColumnDef::new(AboutContent::Description).text().not_null())
                    .col(ColumnDef::new(AboutContent::Mission).text())
                    .col(ColumnDef::new(AboutContent::Vision).text())
                    .col(ColumnDef::new(AboutContent::ImageUrl).text().not_null().default(""))
                    .col(ColumnDef::new(AboutContent::IsActive).boolean().not_null().default(true))
                    .col(
                        ColumnDef::new(AboutContent::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(AboutContent::UpdatedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // Index: created_at (latest active row wins)
        manager
            .create_index(
                Index::create()
                    .name("idx_about_content_created_at")
                    .table(AboutContent::Table)
                    .col(AboutContent::CreatedAt)
                    .to_owned(),
            )
            .await?;

        for name in PROGRAM_TABLES {
            manager
                .create_table(
                    Table::create()
                        .table(Alias::new(name))
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ProgramContent::Id)
                                .string_len(36)
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(ProgramContent::Title).string_len(256).not_null())
                        .col(ColumnDef::new(ProgramContent::Subtitle).text())
                        .col(ColumnDef::new(ProgramContent::Description).text().not_null())
                        .col(ColumnDef::new(ProgramContent::ImageUrl).text().not_null().default(""))
                        .col(
                            ColumnDef::new(ProgramContent::Services)
                                .json_binary()
                                .not_null()
                                .default(Expr::cust("'[]'::jsonb")),
                        )
                        .col(
                            ColumnDef::new(ProgramContent::Statistics)
                                .json_binary()
                                .not_null()
                                .default(Expr::cust("'[]'::jsonb")),
                        )
                        .col(
                            ColumnDef::new(ProgramContent::HealthTips)
                                .json_binary()
                                .not_null()
                                .default(Expr::cust("'[]'::jsonb")),
                        )
                        .col(
                            ColumnDef::new(ProgramContent::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(ProgramContent::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(ColumnDef::new(ProgramContent::UpdatedAt).timestamp_with_time_zone())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name(format!("idx_{name}_created_at"))
                        .table(Alias::new(name))
                        .col(ProgramContent::CreatedAt)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in PROGRAM_TABLES.into_iter().rev() {
            manager
                .drop_table(Table::drop().table(Alias::new(name)).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(AboutContent::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum AboutContent {
    Table,
    Id,
    Title,
    Subtitle,
    Description,
    Mission,
    Vision,
    ImageUrl,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum ProgramContent {
    Id,
    Title,
    Subtitle,
    Description,
    ImageUrl,
    Services,
    Statistics,
    HealthTips,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
