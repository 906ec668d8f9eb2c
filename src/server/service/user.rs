//! User account service.
//!
//! Handles registration and credential login. Login issues an access token through the
//! shared `TokenService`.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, user::UserError, AppError},
    model::user::{CreateUserParams, RegisterUserParams, User},
    service::{
        password::{hash_password, verify_password},
        token::TokenService,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Token service used to sign access tokens on login
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new user, hashing the supplied password.
    ///
    /// # Returns
    /// - `Ok(User)` - The registered user
    /// - `Err(AppError::UserErr(UsernameTaken))` - Username already registered
    /// - `Err(AppError::InternalErr(PasswordHashing))` - Hashing failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_username(&params.username).await?.is_some() {
            return Err(UserError::UsernameTaken(params.username).into());
        }

        let password_hash = hash_password(&params.password)?;
        let username = params.username.clone();
        let user = repo
            .create(CreateUserParams {
                username: params.username,
                first_name: params.first_name,
                last_name: params.last_name,
                password_hash,
            })
            .await
            .map_err(|err| username_taken_or(err, username))?;

        tracing::info!("Registered user {}", user.username);

        Ok(user)
    }

    /// Verifies credentials and issues an access token.
    ///
    /// Unknown usernames and wrong passwords fail identically.
    ///
    /// # Returns
    /// - `Ok((User, String))` - The user and their signed access token
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Username or password wrong
    /// - `Err(AppError::InternalErr(TokenEncoding))` - Token signing failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn login(&self, username: &str, password: &str) -> Result<(User, String), AppError> {
        let repo = UserRepository::new(self.db);

        let user = repo
            .find_by_username(username)
            .await?
            .filter(|user| verify_password(password, &user.password_hash))
            .ok_or(AuthError::InvalidCredentials)?;

        let token = self.tokens.issue(&user)?;

        tracing::info!("User {} logged in", user.username);

        Ok((user, token))
    }
}

/// Maps a unique constraint violation on insert to `UsernameTaken`.
pub(super) fn username_taken_or(err: DbErr, username: String) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => UserError::UsernameTaken(username).into(),
        _ => err.into(),
    }
}
