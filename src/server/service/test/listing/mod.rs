use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::listing::ListingRepository,
    error::{auth::AuthError, AppError},
    model::listing::{CreateListingParams, ListingInfo},
    service::listing::{delete_error, ListingService},
};

mod delete_as_admin;
mod search;

fn params(creator: i32, title: &str) -> CreateListingParams {
    CreateListingParams {
        creator,
        img: "uploads\\images\\reykjavik.webp".to_string(),
        title: title.to_string(),
        location: "Iceland".to_string(),
        listing_type: "Apartment".to_string(),
        info: ListingInfo {
            guests: 2,
            bedrooms: 1,
            bathrooms: 1,
        },
        price_per_night: "$170".to_string(),
        rating: "4.8".to_string(),
    }
}
