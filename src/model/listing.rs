use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListingInfoDto {
    pub guests: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListingDto {
    pub id: i32,
    /// Public URL or server-relative path of the listing image.
    pub img: String,
    pub title: String,
    pub location: String,
    #[serde(rename = "type")]
    pub listing_type: String,
    pub info: ListingInfoDto,
    pub price_per_night: String,
    pub rating: String,
    pub creator: i32,
}

/// Multipart form accepted when creating a listing.
///
/// Only used for API documentation; the handler reads the multipart stream directly.
#[allow(dead_code)]
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateListingForm {
    pub title: String,
    pub location: String,
    #[schema(rename = "type")]
    pub listing_type: String,
    /// JSON encoded `{"guests": 2, "bedrooms": 1, "bathrooms": 1}`.
    pub info: String,
    pub price_per_night: String,
    pub rating: String,
    #[schema(format = Binary)]
    pub img: String,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Matched case-insensitively against title and location.
    pub query: Option<String>,
}
