use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, LoginResponseDto, RegisterUserDto, UserDto},
    },
    server::{
        error::{validation::ValidationError, AppError},
        model::user::RegisterUserParams,
        service::user::UserService,
        state::AppState,
        util::extract::JsonBody,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new user account.
///
/// # Returns
/// - `201 Created` - The registered user without the password
/// - `400 Bad Request` - Invalid fields or username already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/users/register",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "Successfully registered user", body = UserDto),
        (status = 400, description = "Invalid fields or username taken"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let payload = RegisterUserDto::from_json(&body).map_err(ValidationError::Fields)?;

    let user = UserService::new(&state.db, &state.token_service)
        .register(RegisterUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with username and password.
///
/// # Returns
/// - `200 OK` - The user and a bearer access token
/// - `400 Bad Request` - Invalid fields or wrong credentials
/// - `500 Internal Server Error` - Database or token signing error
#[utoipa::path(
    post,
    path = "/api/users/login",
    tag = USER_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = LoginResponseDto),
        (status = 400, description = "Invalid fields or credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let payload = LoginDto::from_json(&body).map_err(ValidationError::Fields)?;

    let (user, access_token) = UserService::new(&state.db, &state.token_service)
        .login(&payload.username, &payload.password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            message: "Successfully logged in".to_string(),
            user: user.into_dto(),
            access_token,
        }),
    ))
}
