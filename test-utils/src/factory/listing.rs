//! Listing factory for creating test listings together with their owner link.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test listings with customizable fields.
///
/// `build()` inserts the listing and the `user_listings` row linking it to its
/// creator, mirroring what the server writes on creation.
pub struct ListingFactory<'a> {
    db: &'a DatabaseConnection,
    creator: i32,
    img: String,
    title: String,
    location: String,
    listing_type: String,
    guests: i32,
    bedrooms: i32,
    bathrooms: i32,
    price_per_night: String,
    rating: String,
}

impl<'a> ListingFactory<'a> {
    /// Creates a new ListingFactory with default values owned by `creator`.
    ///
    /// Defaults:
    /// - title: `"Listing {id}"`
    /// - location: `"Location {id}"`
    /// - type: `"Apartment"`, 2 guests, 1 bedroom, 1 bathroom
    /// - price per night `"100"`, rating `"4.5"`
    pub fn new(db: &'a DatabaseConnection, creator: i32) -> Self {
        let id = next_id();
        Self {
            db,
            creator,
            img: format!("uploads/images/listing-{}.png", id),
            title: format!("Listing {}", id),
            location: format!("Location {}", id),
            listing_type: "Apartment".to_string(),
            guests: 2,
            bedrooms: 1,
            bathrooms: 1,
            price_per_night: "100".to_string(),
            rating: "4.5".to_string(),
        }
    }

    pub fn img(mut self, img: impl Into<String>) -> Self {
        self.img = img.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn listing_type(mut self, listing_type: impl Into<String>) -> Self {
        self.listing_type = listing_type.into();
        self
    }

    pub fn guests(mut self, guests: i32) -> Self {
        self.guests = guests;
        self
    }

    /// Builds and inserts the listing and its owner link.
    ///
    /// # Returns
    /// - `Ok(entity::listing::Model)` - Created listing entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::listing::Model, DbErr> {
        let listing = entity::listing::ActiveModel {
            img: ActiveValue::Set(self.img),
            title: ActiveValue::Set(self.title),
            location: ActiveValue::Set(self.location),
            listing_type: ActiveValue::Set(self.listing_type),
            guests: ActiveValue::Set(self.guests),
            bedrooms: ActiveValue::Set(self.bedrooms),
            bathrooms: ActiveValue::Set(self.bathrooms),
            price_per_night: ActiveValue::Set(self.price_per_night),
            rating: ActiveValue::Set(self.rating),
            creator: ActiveValue::Set(self.creator),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        entity::user_listing::ActiveModel {
            user_id: ActiveValue::Set(self.creator),
            listing_id: ActiveValue::Set(listing.id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(listing)
    }
}

/// Creates a listing with default values owned by `creator`.
pub async fn create_listing(
    db: &DatabaseConnection,
    creator: i32,
) -> Result<entity::listing::Model, DbErr> {
    ListingFactory::new(db, creator).build().await
}
