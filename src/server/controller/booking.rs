use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        booking::{BookingDto, CreateBookingDto},
    },
    server::{
        error::AppError,
        extract::{AppJson, AppPath},
        middleware::auth::{AuthGuard, AuthUser, Permission},
        model::booking::{Booking, CreateBookingParams},
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Get every booking.
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "All bookings", body = Vec<BookingDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_bookings(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let bookings = BookingService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(bookings))))
}

/// Get the bookings made by a user.
///
/// # Access Control
/// - `SelfOnly` - Callers may only read their own bookings
///
/// # Returns
/// - `200 OK` - The user's bookings
/// - `401 Unauthorized` - Missing token or another user's ID
/// - `404 Not Found` - Caller no longer exists
#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user's bookings", body = Vec<BookingDto>),
        (status = 401, description = "Not authenticated or not this user", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_bookings_by_user(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    AppPath(user_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.config, auth_user)
        .require(&[Permission::SelfOnly(user_id)])
        .await?;

    let bookings = BookingService::new(&state.db).get_by_owner(user_id).await?;

    Ok((StatusCode::OK, Json(into_dtos(bookings))))
}

/// Book a listing.
///
/// Dates are accepted as given; they are not checked against each other or against
/// existing bookings.
///
/// # Returns
/// - `201 Created` - The created booking
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Caller or listing does not exist
/// - `422 Unprocessable Entity` - Missing fields or unparseable dates
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created", body = BookingDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User or listing not found", body = ErrorDto),
        (status = 422, description = "Invalid booking data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    AppJson(payload): AppJson<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config, auth_user)
        .require(&[])
        .await?;

    let params = CreateBookingParams::from_dto(user.id, payload)?;
    let booking = BookingService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

/// Cancel one of the caller's bookings.
///
/// # Returns
/// - `200 OK` - Booking removed
/// - `401 Unauthorized` - Missing token or caller did not make the booking
/// - `404 Not Found` - No booking with that ID
#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking removed", body = MessageDto),
        (status = 401, description = "Not authenticated or not the booking user", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.config, auth_user)
        .require(&[])
        .await?;

    BookingService::new(&state.db).delete(user.id, id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Booking removed."))))
}

/// Cancel any booking.
///
/// # Access Control
/// - `Admin` - Only the configured administrator
#[utoipa::path(
    delete,
    path = "/api/bookings/admin/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking removed", body = MessageDto),
        (status = 401, description = "Not authenticated or not the administrator", body = ErrorDto),
        (status = 404, description = "Booking or its user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_booking_as_admin(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.config, auth_user)
        .require(&[Permission::Admin])
        .await?;

    BookingService::new(&state.db).delete_as_admin(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Booking removed."))))
}

fn into_dtos(bookings: Vec<Booking>) -> Vec<BookingDto> {
    bookings.into_iter().map(Booking::into_dto).collect()
}
