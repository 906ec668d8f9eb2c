use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        airplane::{
            AirplaneActionsDto, AirplaneChangedDto, AirplaneDetailDto, AirplaneListDto,
            AirplanesCreatedDto, CreateAirplaneDto, UpdateAirplaneDto,
        },
        api::{DetailDto, ErrorDto, MessageDto},
    },
    server::{
        error::{validation::ValidationError, AppError},
        model::airplane::{CreateAirplaneParams, DeleteAllOutcome, UpdateAirplaneParams},
        service::{airplane::AirplaneService, token::Claims},
        state::AppState,
        util::{extract::JsonBody, validation::validate_batch},
    },
};

/// Tag for grouping airplane endpoints in OpenAPI documentation
pub static AIRPLANE_TAG: &str = "airplane";

/// List all airplanes.
///
/// Returns every airplane, most recently updated first.
///
/// # Returns
/// - `200 OK` - All airplanes, possibly empty
/// - `403 Forbidden` - Missing, invalid or expired token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/airplanes/",
    tag = AIRPLANE_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Successfully retrieved airplanes", body = AirplaneListDto),
        (status = 403, description = "Missing, invalid or expired token", body = DetailDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_airplanes(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let airplanes = AirplaneService::new(&state.db).list_all().await?;

    Ok((
        StatusCode::OK,
        Json(AirplaneListDto {
            airplanes: airplanes.into_iter().map(|a| a.into_dto()).collect(),
        }),
    ))
}

/// Get an airplane by id.
///
/// # Returns
/// - `200 OK` - The airplane with links to update and delete it
/// - `403 Forbidden` - Missing, invalid or expired token
/// - `404 Not Found` - No airplane with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/airplanes/{id}",
    tag = AIRPLANE_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Airplane id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved airplane", body = AirplaneDetailDto),
        (status = 403, description = "Missing, invalid or expired token", body = DetailDto),
        (status = 404, description = "Airplane not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_airplane(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let airplane = AirplaneService::new(&state.db).get(id).await?;

    Ok((
        StatusCode::OK,
        Json(AirplaneDetailDto {
            actions: modify_actions(&state.app_url, airplane.id),
            airplane: airplane.into_dto(),
        }),
    ))
}

/// Create an airplane.
///
/// Derives the fuel tank capacity, fuel consumption and maximum flight time from the
/// id and passenger count.
///
/// # Returns
/// - `201 Created` - The created airplane with links to update and delete it
/// - `400 Bad Request` - Invalid fields or id already in use
/// - `403 Forbidden` - Missing, invalid or expired token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/airplanes/add",
    tag = AIRPLANE_TAG,
    security(("bearer" = [])),
    request_body = CreateAirplaneDto,
    responses(
        (status = 201, description = "Successfully added airplane", body = AirplaneChangedDto),
        (status = 400, description = "Invalid fields or duplicate id"),
        (status = 403, description = "Missing, invalid or expired token", body = DetailDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_airplane(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let payload = CreateAirplaneDto::from_json(&body).map_err(ValidationError::Fields)?;

    tracing::debug!("User {} adding airplane {}", claims.username, payload.id);

    let airplane = AirplaneService::new(&state.db)
        .create(CreateAirplaneParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AirplaneChangedDto {
            message: "Successfully added airplane".to_string(),
            actions: modify_actions(&state.app_url, airplane.id),
            airplane: airplane.into_dto(),
        }),
    ))
}

/// Create several airplanes at once.
///
/// All entries are validated before anything is written. The batch is stored in a
/// single transaction, so either every airplane is created or none is.
///
/// # Returns
/// - `201 Created` - Every created airplane, in request order
/// - `400 Bad Request` - Per-entry field errors, or an id already in use
/// - `403 Forbidden` - Missing, invalid or expired token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/airplanes/bulk_add",
    tag = AIRPLANE_TAG,
    security(("bearer" = [])),
    request_body = Vec<CreateAirplaneDto>,
    responses(
        (status = 201, description = "Successfully added airplanes", body = AirplanesCreatedDto),
        (status = 400, description = "Invalid entries or duplicate id"),
        (status = 403, description = "Missing, invalid or expired token", body = DetailDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn bulk_create_airplanes(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let payload =
        validate_batch(&body, CreateAirplaneDto::from_json).map_err(ValidationError::from)?;

    tracing::debug!(
        "User {} adding {} airplanes in bulk",
        claims.username,
        payload.len()
    );

    let params = payload
        .into_iter()
        .map(CreateAirplaneParams::from_dto)
        .collect();
    let airplanes = AirplaneService::new(&state.db).bulk_create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(AirplanesCreatedDto {
            message: "Successfully added airplanes".to_string(),
            airplanes: airplanes.into_iter().map(|a| a.into_dto()).collect(),
        }),
    ))
}

/// Update an airplane.
///
/// `id` is required. With the path id unchanged `no_of_passengers` may be omitted to
/// keep the current count. A different `id` moves the airplane to that id and
/// requires `no_of_passengers`.
///
/// # Returns
/// - `200 OK` - The updated airplane with links to fetch and delete it
/// - `400 Bad Request` - Invalid fields or new id already in use
/// - `403 Forbidden` - Missing, invalid or expired token
/// - `404 Not Found` - No airplane with the path id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/airplanes/update/{id}",
    tag = AIRPLANE_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Id of the airplane to update")
    ),
    request_body = UpdateAirplaneDto,
    responses(
        (status = 200, description = "Successfully updated airplane", body = AirplaneChangedDto),
        (status = 400, description = "Invalid fields or duplicate id"),
        (status = 403, description = "Missing, invalid or expired token", body = DetailDto),
        (status = 404, description = "Airplane not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_airplane(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i32>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let payload = UpdateAirplaneDto::from_json(&body).map_err(ValidationError::Fields)?;

    tracing::debug!("User {} updating airplane {}", claims.username, id);

    let airplane = AirplaneService::new(&state.db)
        .update(UpdateAirplaneParams::from_dto(id, payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(AirplaneChangedDto {
            message: "Successfully updated airplane".to_string(),
            actions: fetch_actions(&state.app_url, airplane.id),
            airplane: airplane.into_dto(),
        }),
    ))
}

/// Delete an airplane.
///
/// # Returns
/// - `200 OK` - Airplane deleted
/// - `403 Forbidden` - Missing, invalid or expired token
/// - `404 Not Found` - No airplane with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/airplanes/delete/{id}",
    tag = AIRPLANE_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Airplane id")
    ),
    responses(
        (status = 200, description = "Successfully deleted airplane", body = MessageDto),
        (status = 403, description = "Missing, invalid or expired token", body = DetailDto),
        (status = 404, description = "Airplane not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_airplane(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("User {} deleting airplane {}", claims.username, id);

    AirplaneService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Successfully deleted airplane".to_string(),
        }),
    ))
}

/// Delete every airplane.
///
/// An empty store is reported with a distinct message rather than an error.
///
/// # Returns
/// - `200 OK` - All airplanes deleted, or the store was already empty
/// - `403 Forbidden` - Missing, invalid or expired token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/airplanes/delete/all",
    tag = AIRPLANE_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All airplanes deleted or store already empty", body = MessageDto),
        (status = 403, description = "Missing, invalid or expired token", body = DetailDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_all_airplanes(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("User {} deleting all airplanes", claims.username);

    let outcome = AirplaneService::new(&state.db).delete_all().await?;

    let message = match outcome {
        DeleteAllOutcome::AlreadyEmpty => "Database already empty",
        DeleteAllOutcome::Deleted(_) => "Successfully deleted all airplanes",
    };

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: message.to_string(),
        }),
    ))
}

/// Links returned after a fetch or create: update and delete.
fn modify_actions(app_url: &str, id: i32) -> AirplaneActionsDto {
    AirplaneActionsDto {
        fetch: None,
        update: Some(format!("{}/api/airplanes/update/{}", app_url, id)),
        delete: delete_url(app_url, id),
    }
}

/// Links returned after an update: fetch and delete.
fn fetch_actions(app_url: &str, id: i32) -> AirplaneActionsDto {
    AirplaneActionsDto {
        fetch: Some(format!("{}/api/airplanes/{}", app_url, id)),
        update: None,
        delete: delete_url(app_url, id),
    }
}

fn delete_url(app_url: &str, id: i32) -> String {
    format!("{}/api/airplanes/delete/{}", app_url, id)
}
