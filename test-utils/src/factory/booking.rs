//! Booking factory for creating test bookings together with their owner link.

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test bookings.
///
/// `build()` inserts the booking and the `user_bookings` row linking it to the
/// booking user.
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    listing_id: i32,
    booking_user: i32,
    name: String,
    email: String,
    phone: String,
    nights: i64,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory for a stay starting tomorrow.
    pub fn new(db: &'a DatabaseConnection, listing_id: i32, booking_user: i32) -> Self {
        let id = next_id();
        Self {
            db,
            listing_id,
            booking_user,
            name: format!("Guest {}", id),
            email: format!("guest{}@example.com", id),
            phone: "555-0100".to_string(),
            nights: 3,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn nights(mut self, nights: i64) -> Self {
        self.nights = nights;
        self
    }

    /// Builds and inserts the booking and its owner link.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        let check_in = Utc::now() + Duration::days(1);
        let check_out = check_in + Duration::days(self.nights);

        let booking = entity::booking::ActiveModel {
            listing_id: ActiveValue::Set(self.listing_id),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            check_in: ActiveValue::Set(check_in),
            check_out: ActiveValue::Set(check_out),
            booking_user: ActiveValue::Set(self.booking_user),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        entity::user_booking::ActiveModel {
            user_id: ActiveValue::Set(self.booking_user),
            booking_id: ActiveValue::Set(booking.id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(booking)
    }
}

/// Creates a booking of `listing_id` made by `booking_user`.
pub async fn create_booking(
    db: &DatabaseConnection,
    listing_id: i32,
    booking_user: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, listing_id, booking_user)
        .build()
        .await
}
