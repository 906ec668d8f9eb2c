//! User account domain models and parameters.
//!
//! Users register with a username and password and exchange those credentials for an
//! access token. The stored password hash never leaves the service layer.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{
    model::user::{LoginDto, RegisterUserDto, UserDto},
    server::util::validation::{FieldErrors, ObjectValidator},
};

/// Maximum length of usernames and names.
pub const NAME_MAX_LENGTH: usize = 150;
/// Maximum length of a plain-text password.
pub const PASSWORD_MAX_LENGTH: usize = 128;

/// Registered user account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Salted password hash in `salt$digest` form.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Full display name used in token claims.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash is dropped.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            first_name: self.first_name,
            last_name: self.last_name,
            username: self.username,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            first_name: entity.first_name,
            last_name: entity.last_name,
            password_hash: entity.password_hash,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for registering a new user.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Plain-text password, hashed by the service before storage.
    pub password: String,
}

impl RegisterUserParams {
    pub fn from_dto(dto: RegisterUserDto) -> Self {
        Self {
            username: dto.username,
            first_name: dto.first_name,
            last_name: dto.last_name,
            password: dto.password,
        }
    }
}

/// Parameters for inserting a user row with an already hashed password.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
}

impl RegisterUserDto {
    /// Validates a JSON body as a registration request.
    ///
    /// # Returns
    /// - `Ok(RegisterUserDto)` - Every field is a non-blank string within its length limit
    /// - `Err(FieldErrors)` - Messages for every invalid field
    pub fn from_json(value: &Value) -> Result<Self, FieldErrors> {
        let mut fields = ObjectValidator::new(value)?;
        let first_name = fields.string("first_name", NAME_MAX_LENGTH);
        let last_name = fields.string("last_name", NAME_MAX_LENGTH);
        let username = fields.string("username", NAME_MAX_LENGTH);
        let password = fields.string("password", PASSWORD_MAX_LENGTH);

        let parsed = match (first_name, last_name, username, password) {
            (Some(first_name), Some(last_name), Some(username), Some(password)) => Some(Self {
                first_name,
                last_name,
                username,
                password,
            }),
            _ => None,
        };
        fields.finish(parsed)
    }
}

impl LoginDto {
    /// Validates a JSON body as a login request.
    pub fn from_json(value: &Value) -> Result<Self, FieldErrors> {
        let mut fields = ObjectValidator::new(value)?;
        let username = fields.string("username", NAME_MAX_LENGTH);
        let password = fields.string("password", PASSWORD_MAX_LENGTH);

        let parsed = username
            .zip(password)
            .map(|(username, password)| Self { username, password });
        fields.finish(parsed)
    }
}
