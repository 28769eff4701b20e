use sea_orm::{ActiveValue, DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::{linked::LinkedWrite, listing::listing_active_model},
    model::listing::{CreateListingParams, ListingInfo},
};

mod create;

fn listing_params(creator: i32, title: &str) -> CreateListingParams {
    CreateListingParams {
        creator,
        img: "uploads/images/cabin.png".to_string(),
        title: title.to_string(),
        location: "Banff".to_string(),
        listing_type: "Cabin".to_string(),
        info: ListingInfo {
            guests: 4,
            bedrooms: 2,
            bathrooms: 1,
        },
        price_per_night: "$180".to_string(),
        rating: "4.9".to_string(),
    }
}
