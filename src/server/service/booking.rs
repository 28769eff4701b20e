use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, listing::ListingRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::booking::{Booking, CreateBookingParams},
};

const BOOKING_NOT_FOUND: &str = "Could not find a booking for the provided id.";

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Booking>, AppError> {
        let bookings = BookingRepository::new(self.db).get_all().await?;

        Ok(bookings.into_iter().map(Booking::from_entity).collect())
    }

    /// Gets a user's booking set, oldest first.
    pub async fn get_by_owner(&self, user_id: i32) -> Result<Vec<Booking>, AppError> {
        let bookings = BookingRepository::new(self.db)
            .get_by_owner(user_id)
            .await?;

        Ok(bookings.into_iter().map(Booking::from_entity).collect())
    }

    /// Creates a booking and links it to the booking user.
    ///
    /// No availability or date-order checks are made.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created booking
    /// - `Err(AppError::NotFound)` - The listing does not exist
    pub async fn create(&self, params: CreateBookingParams) -> Result<Booking, AppError> {
        if ListingRepository::new(self.db)
            .get_by_id(params.listing_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(
                "Could not find a listing for the provided id.".to_string(),
            ));
        }

        let booking = BookingRepository::new(self.db).create(params).await?;

        tracing::info!(
            "User {} booked listing {} as booking {}",
            booking.booking_user,
            booking.listing_id,
            booking.id
        );

        Ok(Booking::from_entity(booking))
    }

    /// Deletes a booking on behalf of the user who made it.
    ///
    /// # Returns
    /// - `Ok(())` - Booking and owner link removed
    /// - `Err(AppError::NotFound)` - No booking with that ID
    /// - `Err(AuthError::AccessDenied)` - Caller did not make the booking
    pub async fn delete(&self, caller_id: i32, id: i32) -> Result<(), AppError> {
        let booking = self.find(id).await?;

        if booking.booking_user != caller_id {
            return Err(AuthError::AccessDenied(caller_id, "Unauthorized.".to_string()).into());
        }

        self.remove(booking.id, caller_id).await
    }

    /// Deletes any booking. The caller must already have been checked to be the admin.
    ///
    /// The link removed is the one in the booking user's own set.
    ///
    /// # Returns
    /// - `Ok(())` - Booking and owner link removed
    /// - `Err(AppError::NotFound)` - No booking with that ID, or its user is gone
    pub async fn delete_as_admin(&self, id: i32) -> Result<(), AppError> {
        let booking = self.find(id).await?;

        if UserRepository::new(self.db)
            .find_by_id(booking.booking_user)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(
                "Could not find a user for the provided id.".to_string(),
            ));
        }

        self.remove(booking.id, booking.booking_user).await
    }

    async fn find(&self, id: i32) -> Result<entity::booking::Model, AppError> {
        BookingRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(BOOKING_NOT_FOUND.to_string()))
    }

    async fn remove(&self, id: i32, owner_id: i32) -> Result<(), AppError> {
        if !BookingRepository::new(self.db).delete(id, owner_id).await? {
            return Err(AppError::NotFound(BOOKING_NOT_FOUND.to_string()));
        }

        tracing::info!("Deleted booking {} of user {}", id, owner_id);

        Ok(())
    }
}
