//! Create the gallery tables.

use sea_orm_migration::prelude::*;

const TABLES: [&str; 6] = [
    "home_gallery",
    "gallery_images",
    "relief_gallery",
    "medical_gallery",
    "oldage_gallery",
    "children_gallery",
];

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
                        .col(
                            ColumnDef::new(GalleryImage::Id)
                                .string_len(36)
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(GalleryImage::ImageUrl).text().not_null())
                        .col(ColumnDef::new(GalleryImage::Caption).text())
                        .col(
                            ColumnDef::new(GalleryImage::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(GalleryImage::SortOrder)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(GalleryImage::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(ColumnDef::new(GalleryImage::UpdatedAt).timestamp_with_time_zone())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name(format!("idx_{name}_active_sort"))
                        .table(Alias::new(name))
                        .col(GalleryImage::IsActive)
                        .col(GalleryImage::SortOrder)
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
enum GalleryImage {
    Id,
    ImageUrl,
    Caption,
    IsActive,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}
