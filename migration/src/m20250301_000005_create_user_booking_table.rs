use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_user_table::Users, m20250301_000003_create_booking_table::Bookings,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserBookings::Table)
                    .if_not_exists()
                    .col(pk_auto(UserBookings::Id))
                    .col(integer(UserBookings::UserId))
                    .col(integer_uniq(UserBookings::BookingId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_bookings_user_id")
                            .from(UserBookings::Table, UserBookings::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_bookings_booking_id")
                            .from(UserBookings::Table, UserBookings::BookingId)
                            .to(Bookings::Table, Bookings::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserBookings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserBookings {
    Table,
    Id,
    UserId,
    BookingId,
}
