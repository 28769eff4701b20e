//! Booking domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::booking::{BookingDto, CreateBookingDto},
    server::{
        error::{AppError, INVALID_INPUTS},
        util::parse::parse_booking_date,
    },
};

/// Stay reserved by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub listing_id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    /// ID of the user that made the booking.
    pub booking_user: i32,
}

impl Booking {
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            listing_id: entity.listing_id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            check_in: entity.check_in,
            check_out: entity.check_out,
            booking_user: entity.booking_user,
        }
    }

    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            listing_id: self.listing_id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            check_in: self.check_in,
            check_out: self.check_out,
            booking_user: self.booking_user,
        }
    }
}

/// Parameters for creating a booking.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBookingParams {
    pub listing_id: i32,
    pub booking_user: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
}

impl CreateBookingParams {
    /// Validates a booking request made by `booking_user`.
    ///
    /// Dates are not compared with each other or with existing bookings.
    ///
    /// # Returns
    /// - `Ok(CreateBookingParams)` - Every field present and both dates parseable
    /// - `Err(AppError::Validation)` - A field is missing, blank or not a date
    pub fn from_dto(booking_user: i32, dto: CreateBookingDto) -> Result<Self, AppError> {
        let invalid = || AppError::Validation(INVALID_INPUTS.to_string());
        let required = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(invalid)
        };

        let listing_id = dto.listing_id.ok_or_else(invalid)?;
        let name = required(dto.name)?;
        let email = required(dto.email)?;
        let phone = required(dto.phone)?;
        let check_in = parse_booking_date(&required(dto.check_in)?).ok_or_else(invalid)?;
        let check_out = parse_booking_date(&required(dto.check_out)?).ok_or_else(invalid)?;

        Ok(Self {
            listing_id,
            booking_user,
            name,
            email,
            phone,
            check_in,
            check_out,
        })
    }
}
