use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{login, register},
        booking::{
            create_booking, delete_booking, delete_booking_as_admin, get_all_bookings,
            get_bookings_by_user,
        },
        listing::{
            create_listing, delete_listing, delete_listing_as_admin, get_all_listings,
            get_listing_by_id, get_listings_by_user, search_listings,
        },
    },
    doc::ApiDoc,
    middleware::auth::require_auth,
    service::image::PUBLIC_IMAGE_PATH,
    state::AppState,
};

/// Largest accepted request body, sized for listing image uploads.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Builds the application router.
///
/// Protected routes of each resource are registered before the auth layer is
/// applied with `route_layer`, so the public routes added afterwards stay open.
pub fn router(state: AppState) -> Router {
    let uploads = ServeDir::new(&state.config.upload_dir);

    Router::new()
        .nest("/api/listings", listing_routes(&state))
        .nest("/api/bookings", booking_routes(&state))
        .nest("/api/auth", auth_routes())
        .nest_service(&format!("/{}", PUBLIC_IMAGE_PATH), uploads)
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn listing_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_listing))
        .route("/user/{id}", get(get_listings_by_user))
        .route("/{id}", delete(delete_listing))
        .route("/admin/{id}", delete(delete_listing_as_admin))
        .route_layer(from_fn_with_state(state.clone(), require_auth))
        .route("/", get(get_all_listings))
        .route("/search", get(search_listings))
        .route("/{id}", get(get_listing_by_id))
}

fn booking_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_booking))
        .route("/{id}", get(get_bookings_by_user).delete(delete_booking))
        .route("/admin/{id}", delete(delete_booking_as_admin))
        .route_layer(from_fn_with_state(state.clone(), require_auth))
        .route("/", get(get_all_bookings))
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
}

#[cfg(test)]
mod test;
