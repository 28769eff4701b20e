use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthResponseDto, LoginDto, RegisterDto},
    },
    server::{
        error::AppError,
        extract::AppJson,
        model::user::{LoginParams, RegisterUserParams},
        service::auth::{AuthService, AuthSession},
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new user.
///
/// Creates a host or guest account and returns it together with a bearer token valid
/// for one hour.
///
/// # Returns
/// - `201 Created` - The new user and their token
/// - `400 Bad Request` - Email already registered
/// - `422 Unprocessable Entity` - Invalid name, email, password, avatar or role
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "User registered", body = AuthResponseDto),
        (status = 400, description = "Email already registered", body = ErrorDto),
        (status = 422, description = "Invalid registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterUserParams::from_dto(payload)?;

    let session = AuthService::new(&state.db, &state.tokens)
        .register(params)
        .await?;

    Ok((StatusCode::CREATED, Json(into_response_dto(session))))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - The user and a fresh token
/// - `401 Unauthorized` - Wrong password
/// - `404 Not Found` - No user with that email
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthResponseDto),
        (status = 401, description = "Password is incorrect", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = LoginParams {
        email: payload.email,
        password: payload.password,
    };

    let session = AuthService::new(&state.db, &state.tokens)
        .login(params)
        .await?;

    Ok((StatusCode::OK, Json(into_response_dto(session))))
}

fn into_response_dto(session: AuthSession) -> AuthResponseDto {
    AuthResponseDto {
        user: session.user.into_dto(),
        token: session.token,
    }
}
