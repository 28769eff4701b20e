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
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(pk_auto(Bookings::Id))
                    .col(integer(Bookings::ListingId))
                    .col(string(Bookings::Name))
                    .col(string(Bookings::Email))
                    .col(string(Bookings::Phone))
                    .col(timestamp_with_time_zone(Bookings::CheckIn))
                    .col(timestamp_with_time_zone(Bookings::CheckOut))
                    .col(integer(Bookings::BookingUser))
                    // A booked listing must never disappear underneath its bookings
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_listing_id")
                            .from(Bookings::Table, Bookings::ListingId)
                            .to(Listings::Table, Listings::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bookings_booking_user")
                            .from(Bookings::Table, Bookings::BookingUser)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_listing_id")
                    .table(Bookings::Table)
                    .col(Bookings::ListingId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bookings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bookings {
    Table,
    Id,
    ListingId,
    Name,
    Email,
    Phone,
    CheckIn,
    CheckOut,
    BookingUser,
}
