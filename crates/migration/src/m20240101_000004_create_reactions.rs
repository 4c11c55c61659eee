//! Create `reactions` table with FKs to `users` and `products`.
//!
//! Rows are removed when either referent disappears. The one-per
//! (user, product) rule is enforced by a unique index applied in the
//! index migration.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reactions::Table)
                    .if_not_exists()
                    .col(uuid(Reactions::Id).primary_key())
                    .col(uuid(Reactions::UserId).not_null())
                    .col(uuid(Reactions::ProductId).not_null())
                    .col(string_len(Reactions::Kind, 16).not_null())
                    .col(timestamp_with_time_zone(Reactions::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reaction_user")
                            .from(Reactions::Table, Reactions::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reaction_product")
                            .from(Reactions::Table, Reactions::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Reactions::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Reactions { Table, Id, UserId, ProductId, Kind, CreatedAt }

#[derive(DeriveIden)]
enum Users { Table, Id }

#[derive(DeriveIden)]
enum Products { Table, Id }
