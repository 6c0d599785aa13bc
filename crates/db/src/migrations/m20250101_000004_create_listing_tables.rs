//! Create the causes, projects, certifications and board_staff tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Columns every listing table ends with.
fn finish(table: &mut TableCreateStatement) -> TableCreateStatement {
    table
        .col(ColumnDef::new(Listing::IsActive).boolean().not_null().default(true))
        .col(ColumnDef::new(Listing::SortOrder).integer().not_null().default(0))
        .col(
            ColumnDef::new(Listing::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(ColumnDef::new(Listing::UpdatedAt).timestamp_with_time_zone())
        .to_owned()
}

fn sort_index(name: &str) -> IndexCreateStatement {
    Index::create()
        .name(format!("idx_{name}_active_sort"))
        .table(Alias::new(name))
        .col(Listing::IsActive)
        .col(Listing::SortOrder)
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create causes table
        manager
            .create_table(finish(
                Table::create()
                    .table(Cause::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Cause::Id).string_len(36).not_null().primary_key())
                    .col(ColumnDef::new(Cause::Title).string_len(256).not_null())
                    .col(ColumnDef::new(Cause::Description).text().not_null())
                    .col(ColumnDef::new(Cause::ImageUrl).text().not_null().default("")),
            ))
            .await?;

        // Create projects table
        manager
            .create_table(finish(
                Table::create()
                    .table(Project::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Project::Id).string_len(36).not_null().primary_key())
                    .col(ColumnDef::new(Project::Title).string_len(256).not_null())
                    .col(ColumnDef::new(Project::Description).text().not_null())
                    .col(ColumnDef::new(Project::ImageUrl).text().not_null().default(""))
                    .col(ColumnDef::new(Project::Location).string_len(256))
                    .col(
                        ColumnDef::new(Project::ProjectStatus)
                            .string_len(16)
                            .not_null()
                            .default("ongoing"),
                    ),
            ))
            .await?;

        // Create certifications table
        manager
            .create_table(finish(
                Table::create()
                    .table(Certification::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Certification::Id)
                            .string_len(36)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Certification::CertificateName).string_len(256).not_null())
                    .col(ColumnDef::new(Certification::Description).text())
                    .col(ColumnDef::new(Certification::ImageUrl).text().not_null().default(""))
                    .col(ColumnDef::new(Certification::PdfUrl).text())
                    .col(ColumnDef::new(Certification::IssuedBy).string_len(256)),
            ))
            .await?;

        // Create board_staff table
        manager
            .create_table(finish(
                Table::create()
                    .table(BoardStaff::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(BoardStaff::Id).string_len(36).not_null().primary_key())
                    .col(ColumnDef::new(BoardStaff::Name).string_len(256).not_null())
                    .col(ColumnDef::new(BoardStaff::Designation).string_len(256).not_null())
                    .col(ColumnDef::new(BoardStaff::Description).text())
                    .col(ColumnDef::new(BoardStaff::ImageUrl).text().not_null().default("")),
            ))
            .await?;

        for name in ["causes", "projects", "certifications", "board_staff"] {
            manager.create_index(sort_index(name)).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BoardStaff::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Certification::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Project::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Cause::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Listing {
    IsActive,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Cause {
    #[iden = "causes"]
    Table,
    Id,
    Title,
    Description,
    ImageUrl,
}

#[derive(Iden)]
enum Project {
    #[iden = "projects"]
    Table,
    Id,
    Title,
    Description,
    ImageUrl,
    Location,
    ProjectStatus,
}

#[derive(Iden)]
enum Certification {
    #[iden = "certifications"]
    Table,
    Id,
    CertificateName,
    Description,
    ImageUrl,
    PdfUrl,
    IssuedBy,
}

#[derive(Iden)]
enum BoardStaff {
    Table,
    Id,
    Name,
    Designation,
    Description,
    ImageUrl,
}
