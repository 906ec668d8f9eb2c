use axum::{
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    model::{
        airplane::{
            AirplaneActionsDto, AirplaneChangedDto, AirplaneDetailDto, AirplaneDto,
            AirplaneListDto, AirplanesCreatedDto, CreateAirplaneDto, UpdateAirplaneDto,
        },
        api::{DetailDto, ErrorDto, HealthDto, MessageDto},
        user::{LoginDto, LoginResponseDto, RegisterUserDto, UserDto},
    },
    server::{
        controller::{airplane, health, user},
        middleware::auth::require_auth,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "KAMI Airlines Fleet API"),
    paths(
        airplane::list_airplanes,
        airplane::get_airplane,
        airplane::create_airplane,
        airplane::bulk_create_airplanes,
        airplane::update_airplane,
        airplane::delete_airplane,
        airplane::delete_all_airplanes,
        user::register,
        user::login,
        health::health,
    ),
    components(schemas(
        AirplaneDto,
        AirplaneActionsDto,
        AirplaneDetailDto,
        AirplaneChangedDto,
        AirplaneListDto,
        AirplanesCreatedDto,
        CreateAirplaneDto,
        UpdateAirplaneDto,
        UserDto,
        RegisterUserDto,
        LoginDto,
        LoginResponseDto,
        ErrorDto,
        DetailDto,
        MessageDto,
        HealthDto,
    )),
    modifiers(&BearerAuth),
)]
pub struct ApiDoc;

/// Registers the `bearer` security scheme referenced by protected endpoints.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
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
}

/// Builds the application router.
///
/// Airplane routes sit behind the bearer token middleware; user, health and OpenAPI
/// routes are public.
pub fn router(state: AppState) -> Router {
    let airplane_routes = Router::new()
        .route("/api/airplanes", get(airplane::list_airplanes))
        .route("/api/airplanes/", get(airplane::list_airplanes))
        .route("/api/airplanes/{id}", get(airplane::get_airplane))
        .route("/api/airplanes/add", post(airplane::create_airplane))
        .route("/api/airplanes/bulk_add", post(airplane::bulk_create_airplanes))
        .route("/api/airplanes/update/{id}", put(airplane::update_airplane))
        .route("/api/airplanes/delete/all", delete(airplane::delete_all_airplanes))
        .route("/api/airplanes/delete/{id}", delete(airplane::delete_airplane))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(airplane_routes)
        .route("/api/users/register", post(user::register))
        .route("/api/users/login", post(user::login))
        .route("/api/health", get(health::health))
        .route("/api/openapi.json", get(openapi))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
