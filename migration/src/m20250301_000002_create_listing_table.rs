use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_user_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Listings::Table)
                    .if_not_exists()
                    .col(pk_auto(Listings::Id))
                    .col(string(Listings::Img))
                    .col(string_uniq(Listings::Title))
                    .col(string(Listings::Location))
                    .col(string(Listings::ListingType))
                    .col(integer(Listings::Guests))
                    .col(integer(Listings::Bedrooms))
                    .col(integer(Listings::Bathrooms))
                    .col(string(Listings::PricePerNight))
                    .col(string(Listings::Rating))
                    .col(integer(Listings::Creator))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_listings_creator")
                            .from(Listings::Table, Listings::Creator)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Listings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Listings {
    Table,
    Id,
    Img,
    Title,
    Location,
    ListingType,
    Guests,
    Bedrooms,
    Bathrooms,
    PricePerNight,
    Rating,
    Creator,
}
