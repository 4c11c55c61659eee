use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Businesses: index on owner_id for owner listings
        manager
            .create_index(
                Index::create()
                    .name("idx_business_owner")
                    .table(Businesses::Table)
                    .col(Businesses::OwnerId)
                    .to_owned(),
            )
            .await?;

        // Products: index on business_id for catalog filtering
        manager
            .create_index(
                Index::create()
                    .name("idx_product_business")
                    .table(Products::Table)
                    .col(Products::BusinessId)
                    .to_owned(),
            )
            .await?;

        // Reactions: composite unique (user_id, product_id). One reaction
        // per user per product; the ledger relies on this as the backstop
        // for its check-then-write upsert
        manager
            .create_index(
                Index::create()
                    .name("uniq_reaction_user_product")
                    .table(Reactions::Table)
                    .col(Reactions::UserId)
                    .col(Reactions::ProductId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Reactions: index on product_id for stats and product feeds
        manager
            .create_index(
                Index::create()
                    .name("idx_reaction_product")
                    .table(Reactions::Table)
                    .col(Reactions::ProductId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_business_owner").table(Businesses::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_product_business").table(Products::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_reaction_user_product").table(Reactions::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_reaction_product").table(Reactions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Businesses { Table, OwnerId }

#[derive(DeriveIden)]
enum Products { Table, BusinessId }

#[derive(DeriveIden)]
enum Reactions { Table, UserId, ProductId }
