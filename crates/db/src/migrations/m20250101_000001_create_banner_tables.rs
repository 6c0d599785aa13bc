//! Create the banner tables.

use sea_orm_migration::prelude::*;

/// Home, old-age home and children home carousels share one shape.
const TABLES: [&str; 3] = ["banners", "oldage_banners", "children_banners"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in TABLES {
            manager
                .create_table(
                    Table::create()
                        .table(Alias::new(name))
                        .if_not_exists()
                        .col(ColumnDef::new(Banner::Id).string_len(36).not_null().primary_key())
                        .col(ColumnDef::new(Banner::ImageUrl).text().not_null())
                        .col(ColumnDef::new(Banner::Title).string_len(256))
                        .col(ColumnDef::new(Banner::Subtitle).text())
                        .col(
                            ColumnDef::new(Banner::Position)
                                .string_len(16)
                                .not_null()
                                .default("center"),
                        )
                        .col(ColumnDef::new(Banner::IsActive).boolean().not_null().default(true))
                        .col(ColumnDef::new(Banner::SortOrder).integer().not_null().default(0))
                        .col(
                            ColumnDef::new(Banner::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(ColumnDef::new(Banner::UpdatedAt).timestamp_with_time_zone())
                        .to_owned(),
                )
                .await?;

            // Index: (is_active, sort_order) for the public carousel read
            manager
                .create_index(
                    Index::create()
                        .name(format!("idx_{name}_active_sort"))
                        .table(Alias::new(name))
                        .col(Banner::IsActive)
                        .col(Banner::SortOrder)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in TABLES.into_iter().rev() {
            manager
                .drop_table(Table::drop().table(Alias::new(name)).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(Iden)]
enum Banner {
    Id,
    ImageUrl,
    Title,
    Subtitle,
    Position,
    IsActive,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}
