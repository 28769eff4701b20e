//! OpenAPI document for the HTTP API, served through Swagger UI.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::controller::{
        auth::{self, AUTH_TAG},
        booking::{self, BOOKING_TAG},
        listing::{self, LISTING_TAG},
    },
};

/// Registers the bearer token scheme referenced by protected routes.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&BearerAuth),
    info(
        title = "Stayhub API",
        description = "Short-term rental listings and bookings."
    ),
    paths(
        auth::register,
        auth::login,
        listing::get_all_listings,
        listing::search_listings,
        listing::get_listing_by_id,
        listing::get_listings_by_user,
        listing::create_listing,
        listing::delete_listing,
        listing::delete_listing_as_admin,
        booking::get_all_bookings,
        booking::get_bookings_by_user,
        booking::create_booking,
        booking::delete_booking,
        booking::delete_booking_as_admin,
    ),
    components(schemas(ErrorDto, MessageDto)),
    tags(
        (name = AUTH_TAG, description = "Registration and login"),
        (name = LISTING_TAG, description = "Rental listings"),
        (name = BOOKING_TAG, description = "Bookings of listings")
    )
)]
pub struct ApiDoc;
