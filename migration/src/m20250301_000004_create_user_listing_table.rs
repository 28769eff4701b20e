use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_user_table::Users, m20250301_000002_create_listing_table::Listings,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserListings::Table)
                    .if_not_exists()
                    .col(pk_auto(UserListings::Id))
                    .col(integer(UserListings::UserId))
                    .col(integer_uniq(UserListings::ListingId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_listings_user_id")
                            .from(UserListings::Table, UserListings::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_listings_listing_id")
                            .from(UserListings::Table, UserListings::ListingId)
                            .to(Listings::Table, Listings::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserListings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserListings {
    Table,
    Id,
    UserId,
    ListingId,
}
