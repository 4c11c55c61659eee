//! Create `products` table with FK to `businesses`.
//!
//! Price is numeric(10,2); products disappear with their business.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(uuid(Products::Id).primary_key())
                    .col(uuid(Products::BusinessId).not_null())
                    .col(string_len(Products::Name, 255).not_null())
                    .col(ColumnDef::new(Products::Description).text().null())
                    .col(ColumnDef::new(Products::WeightGrams).integer().null())
                    .col(ColumnDef::new(Products::QuantityUnits).integer().null())
                    .col(decimal_len(Products::Price, 10, 2).not_null())
                    .col(ColumnDef::new(Products::ImageUrl).string_len(500).null())
                    .col(boolean(Products::IsAvailable).not_null().default(true))
                    .col(timestamp_with_time_zone(Products::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_business")
                            .from(Products::Table, Products::BusinessId)
                            .to(Businesses::Table, Businesses::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Products::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Products { Table, Id, BusinessId, Name, Description, WeightGrams, QuantityUnits, Price, ImageUrl, IsAvailable, CreatedAt }

#[derive(DeriveIden)]
enum Businesses { Table, Id }
