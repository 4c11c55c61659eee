//! Create `businesses` table with FK to `users`.
//!
//! Removing an owner account removes their businesses.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Businesses::Table)
                    .if_not_exists()
                    .col(uuid(Businesses::Id).primary_key())
                    .col(uuid(Businesses::OwnerId).not_null())
                    .col(string_len(Businesses::Name, 255).not_null())
                    .col(ColumnDef::new(Businesses::Description).text().null())
                    .col(string_len(Businesses::Address, 255).not_null())
                    .col(string_len(Businesses::WhatsappNumber, 32).not_null())
                    .col(ColumnDef::new(Businesses::OpeningHours).json_binary().null())
                    .col(timestamp_with_time_zone(Businesses::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_business_owner")
                            .from(Businesses::Table, Businesses::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Businesses::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Businesses { Table, Id, OwnerId, Name, Description, Address, WhatsappNumber, OpeningHours, CreatedAt }

#[derive(DeriveIden)]
enum Users { Table, Id }
