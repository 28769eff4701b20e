use axum::{
    extract::{multipart::MultipartRejection, Multipart, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        listing::{CreateListingForm, ListingDto, SearchQuery},
    },
    server::{
        error::AppError,
        extract::AppPath,
        middleware::auth::{AuthGuard, AuthUser, Permission},
        model::listing::{Listing, ListingDraft, ListingFields},
        service::{image::ImageUpload, listing::ListingService},
        state::AppState,
    },
};

/// Tag for grouping listing endpoints in OpenAPI documentation
pub static LISTING_TAG: &str = "listing";

/// Multipart field carrying the listing image.
const IMAGE_FIELD: &str = "img";

/// Get every listing.
///
/// # Returns
/// - `200 OK` - All listings, oldest first
#[utoipa::path(
    get,
    path = "/api/listings",
    tag = LISTING_TAG,
    responses(
        (status = 200, description = "All listings", body = Vec<ListingDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_listings(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let listings = ListingService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(listings))))
}

/// Search listings by title or location.
///
/// Matching is a case-insensitive substring match. A missing or blank query returns
/// every listing; no match returns an empty list.
///
/// # Returns
/// - `200 OK` - Matching listings
#[utoipa::path(
    get,
    path = "/api/listings/search",
    tag = LISTING_TAG,
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching listings", body = Vec<ListingDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_listings(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let listings = ListingService::new(&state.db)
        .search(params.query.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(listings))))
}

/// Get one listing.
///
/// # Returns
/// - `200 OK` - The listing
/// - `404 Not Found` - No listing with that ID
#[utoipa::path(
    get,
    path = "/api/listings/{id}",
    tag = LISTING_TAG,
    params(
        ("id" = i32, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "The listing", body = ListingDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_listing_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let listing = ListingService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(listing.into_dto())))
}

/// Get the listings created by a user.
///
/// # Access Control
/// - `SelfOnly` - Callers may only read their own listings
///
/// # Returns
/// - `200 OK` - The user's listings
/// - `401 Unauthorized` - Missing token or another user's ID
/// - `404 Not Found` - Caller no longer exists
#[utoipa::path(
    get,
    path = "/api/listings/user/{id}",
    tag = LISTING_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user's listings", body = Vec<ListingDto>),
        (status = 401, description = "Not authenticated or not this user", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_listings_by_user(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    AppPath(user_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.config, auth_user)
        .require(&[Permission::SelfOnly(user_id)])
        .await?;

    let listings = ListingService::new(&state.db).get_by_owner(user_id).await?;

    Ok((StatusCode::OK, Json(into_dtos(listings))))
}

/// Create a listing.
///
/// Accepts a multipart form with the listing fields and exactly one image file in
/// the `img` field. The image is stored before the listing is written and discarded
/// again if the write fails.
///
/// # Access Control
/// - `Host` - Only hosts can create listings
///
/// # Returns
/// - `201 Created` - The created listing
/// - `400 Bad Request` - A listing with the same title exists
/// - `401 Unauthorized` - Missing token or caller is not a host
/// - `422 Unprocessable Entity` - Missing or invalid fields, missing or unsupported image
#[utoipa::path(
    post,
    path = "/api/listings",
    tag = LISTING_TAG,
    request_body(content = CreateListingForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Listing created", body = ListingDto),
        (status = 400, description = "Duplicate title", body = ErrorDto),
        (status = 401, description = "Not authenticated or not a host", body = ErrorDto),
        (status = 422, description = "Invalid listing data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_listing(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    let host = AuthGuard::new(&state.db, &state.config, auth_user)
        .require(&[Permission::Host])
        .await?;

    let (fields, image) = read_listing_form(multipart?).await?;
    let draft = ListingDraft::from_fields(fields)?;
    let image = image.ok_or_else(|| AppError::Validation("No image provided.".to_string()))?;

    let img = state.images.store(&image).await?;

    let params = draft.into_params(host.id, img.clone());
    let listing = match ListingService::new(&state.db).create(params).await {
        Ok(listing) => listing,
        Err(err) => {
            state.images.discard(&img).await;
            return Err(err);
        }
    };

    Ok((StatusCode::CREATED, Json(listing.into_dto())))
}

/// Delete one of the caller's listings.
///
/// # Returns
/// - `200 OK` - Listing deleted
/// - `400 Bad Request` - The listing has bookings
/// - `401 Unauthorized` - Missing token or caller did not create the listing
/// - `404 Not Found` - No listing with that ID
#[utoipa::path(
    delete,
    path = "/api/listings/{id}",
    tag = LISTING_TAG,
    params(
        ("id" = i32, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "Listing deleted", body = MessageDto),
        (status = 400, description = "Listing has bookings", body = ErrorDto),
        (status = 401, description = "Not authenticated or not the creator", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_listing(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config, auth_user)
        .require(&[])
        .await?;

    ListingService::new(&state.db).delete(user.id, id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Deleted Successfully"))))
}

/// Delete any listing.
///
/// # Access Control
/// - `Admin` - Only the configured administrator
///
/// # Returns
/// - `200 OK` - Listing deleted
/// - `400 Bad Request` - The listing has bookings
/// - `401 Unauthorized` - Missing token or caller is not the administrator
/// - `404 Not Found` - No listing with that ID
#[utoipa::path(
    delete,
    path = "/api/listings/admin/{id}",
    tag = LISTING_TAG,
    params(
        ("id" = i32, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "Listing deleted", body = MessageDto),
        (status = 400, description = "Listing has bookings", body = ErrorDto),
        (status = 401, description = "Not authenticated or not the administrator", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_listing_as_admin(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.config, auth_user)
        .require(&[Permission::Admin])
        .await?;

    ListingService::new(&state.db).delete_as_admin(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Deleted Successfully"))))
}

/// Reads the listing form, keeping the text fields and at most one image.
///
/// Unknown fields are ignored. A second file in the image field is rejected.
async fn read_listing_form(
    mut multipart: Multipart,
) -> Result<(ListingFields, Option<ImageUpload>), AppError> {
    let mut fields = ListingFields::default();
    let mut image = None;

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == IMAGE_FIELD {
            if image.is_some() {
                return Err(AppError::Validation(
                    "Only one image may be provided.".to_string(),
                ));
            }

            let content_type = field.content_type().unwrap_or_default().to_string();
            let bytes = field.bytes().await?;
            image = Some(ImageUpload {
                content_type,
                bytes,
            });
            continue;
        }

        let slot = match name.as_str() {
            "title" => &mut fields.title,
            "location" => &mut fields.location,
            "type" => &mut fields.listing_type,
            "info" => &mut fields.info,
            "pricePerNight" => &mut fields.price_per_night,
            "rating" => &mut fields.rating,
            _ => continue,
        };
        *slot = Some(field.text().await?);
    }

    Ok((fields, image))
}

fn into_dtos(listings: Vec<Listing>) -> Vec<ListingDto> {
    listings.into_iter().map(Listing::into_dto).collect()
}
