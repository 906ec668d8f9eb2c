use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a user account. The password never leaves the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}

/// Validated body of a registration request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterUserDto {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
}

/// Validated body of a login request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponseDto {
    pub message: String,
    pub user: UserDto,
    pub access_token: String,
}
