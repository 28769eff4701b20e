//! Listing domain models and parameters.

use crate::{
    model::listing::{ListingDto, ListingInfoDto},
    server::error::{AppError, INVALID_INPUTS},
};

/// Client-facing message for an unparseable `info` field.
const INVALID_INFO: &str = "Invalid info object.";

/// Capacity of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingInfo {
    pub guests: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,
}

impl ListingInfo {
    /// Parses the JSON encoded `info` form field.
    ///
    /// # Returns
    /// - `Ok(ListingInfo)` - `{guests, bedrooms, bathrooms}` of integers in `0..=i32::MAX`
    /// - `Err(AppError::Validation)` - Anything else, including a missing field
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let invalid = || AppError::Validation(INVALID_INFO.to_string());

        let dto: ListingInfoDto = serde_json::from_str(raw).map_err(|e| {
            tracing::debug!("Rejected listing info '{}': {}", raw, e);
            invalid()
        })?;

        // Counts are stored in signed integer columns
        for count in [dto.guests, dto.bedrooms, dto.bathrooms] {
            if i32::try_from(count).is_err() {
                tracing::debug!("Rejected listing info '{}': count {} out of range", raw, count);
                return Err(invalid());
            }
        }

        Ok(Self {
            guests: dto.guests,
            bedrooms: dto.bedrooms,
            bathrooms: dto.bathrooms,
        })
    }

    pub fn into_dto(self) -> ListingInfoDto {
        ListingInfoDto {
            guests: self.guests,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
        }
    }
}

/// Listing published by a host.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: i32,
    pub img: String,
    pub title: String,
    pub location: String,
    pub listing_type: String,
    pub info: ListingInfo,
    pub price_per_night: String,
    pub rating: String,
    /// ID of the user that created the listing.
    pub creator: i32,
}

impl Listing {
    /// Converts an entity model to a listing domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Listing)` - The converted listing
    /// - `Err(AppError::InternalError)` - A stored capacity count is negative
    pub fn from_entity(entity: entity::listing::Model) -> Result<Self, AppError> {
        let count = |field: &str, value: i32| {
            u32::try_from(value).map_err(|_| {
                AppError::InternalError(format!(
                    "Listing {} has negative {} count {}",
                    entity.id, field, value
                ))
            })
        };

        let info = ListingInfo {
            guests: count("guests", entity.guests)?,
            bedrooms: count("bedrooms", entity.bedrooms)?,
            bathrooms: count("bathrooms", entity.bathrooms)?,
        };

        Ok(Self {
            id: entity.id,
            img: entity.img,
            title: entity.title,
            location: entity.location,
            listing_type: entity.listing_type,
            info,
            price_per_night: entity.price_per_night,
            rating: entity.rating,
            creator: entity.creator,
        })
    }

    /// Converts the listing to its DTO, normalizing path separators in `img`.
    pub fn into_dto(self) -> ListingDto {
        ListingDto {
            id: self.id,
            img: self.img.replace('\\', "/"),
            title: self.title,
            location: self.location,
            listing_type: self.listing_type,
            info: self.info.into_dto(),
            price_per_night: self.price_per_night,
            rating: self.rating,
            creator: self.creator,
        }
    }
}

/// Text fields of a listing creation request, as read from the multipart form.
#[derive(Debug, Clone, Default)]
pub struct ListingFields {
    pub title: Option<String>,
    pub location: Option<String>,
    pub listing_type: Option<String>,
    pub info: Option<String>,
    pub price_per_night: Option<String>,
    pub rating: Option<String>,
}

/// Validated listing data, before an image has been stored for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingDraft {
    pub title: String,
    pub location: String,
    pub listing_type: String,
    pub info: ListingInfo,
    pub price_per_night: String,
    pub rating: String,
}

impl ListingDraft {
    /// Validates the form fields.
    ///
    /// # Returns
    /// - `Ok(ListingDraft)` - Every required field present and `info` parseable
    /// - `Err(AppError::Validation)` - A field is missing or blank, or `info` is missing
    ///   or invalid
    pub fn from_fields(fields: ListingFields) -> Result<Self, AppError> {
        let required = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| AppError::Validation(INVALID_INPUTS.to_string()))
        };

        let title = required(fields.title)?;
        let location = required(fields.location)?;
        let listing_type = required(fields.listing_type)?;
        let price_per_night = required(fields.price_per_night)?;
        let rating = required(fields.rating)?;
        let info = ListingInfo::parse(&fields.info.unwrap_or_default())?;

        Ok(Self {
            title,
            location,
            listing_type,
            info,
            price_per_night,
            rating,
        })
    }

    /// Attaches the creator and the stored image reference.
    pub fn into_params(self, creator: i32, img: String) -> CreateListingParams {
        CreateListingParams {
            creator,
            img,
            title: self.title,
            location: self.location,
            listing_type: self.listing_type,
            info: self.info,
            price_per_night: self.price_per_night,
            rating: self.rating,
        }
    }
}

/// Parameters for creating a listing.
#[derive(Debug, Clone)]
pub struct CreateListingParams {
    pub creator: i32,
    pub img: String,
    pub title: String,
    pub location: String,
    pub listing_type: String,
    pub info: ListingInfo,
    pub price_per_night: String,
    pub rating: String,
}
