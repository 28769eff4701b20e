use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{data::linked::LinkedWrite, model::booking::CreateBookingParams};

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every booking in creation order.
    pub async fn get_all(&self) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .order_by_asc(entity::booking::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find_by_id(id).one(self.db).await
    }

    /// Gets the bookings in a user's booking set, in the order they were added.
    pub async fn get_by_owner(&self, user_id: i32) -> Result<Vec<entity::booking::Model>, DbErr> {
        let linked = entity::prelude::UserBooking::find()
            .filter(entity::user_booking::Column::UserId.eq(user_id))
            .order_by_asc(entity::user_booking::Column::Id)
            .find_also_related(entity::prelude::Booking)
            .all(self.db)
            .await?;

        Ok(linked
            .into_iter()
            .filter_map(|(_, booking)| booking)
            .collect())
    }

    /// Creates a booking and appends it to the booking user's set in one transaction.
    pub async fn create(
        &self,
        params: CreateBookingParams,
    ) -> Result<entity::booking::Model, DbErr> {
        let booking_user = params.booking_user;

        let booking = entity::booking::ActiveModel {
            listing_id: ActiveValue::Set(params.listing_id),
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            check_in: ActiveValue::Set(params.check_in),
            check_out: ActiveValue::Set(params.check_out),
            booking_user: ActiveValue::Set(booking_user),
            ..Default::default()
        };

        LinkedWrite::new(self.db)
            .create(booking, |booking| {
                Ok(entity::user_booking::ActiveModel {
                    user_id: ActiveValue::Set(booking_user),
                    booking_id: ActiveValue::Set(booking.id),
                    ..Default::default()
                })
            })
            .await
    }

    /// Removes a booking from `owner_id`'s booking set and deletes it in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - The booking was deleted
    /// - `Ok(false)` - No booking with that ID existed
    pub async fn delete(&self, id: i32, owner_id: i32) -> Result<bool, DbErr> {
        let deleted = LinkedWrite::new(self.db)
            .delete(
                entity::prelude::UserBooking::delete_many()
                    .filter(entity::user_booking::Column::UserId.eq(owner_id))
                    .filter(entity::user_booking::Column::BookingId.eq(id)),
                entity::prelude::Booking::delete_many()
                    .filter(entity::booking::Column::Id.eq(id)),
            )
            .await?;

        Ok(deleted > 0)
    }
}
