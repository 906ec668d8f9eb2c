use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::server::{
    error::{auth::AuthError, AppError},
    service::token::{Claims, TokenService},
    state::AppState,
    util::parse::parse_bearer_token,
};

/// Checks the bearer token on a request.
pub struct AuthGuard<'a> {
    tokens: &'a TokenService,
}

impl<'a> AuthGuard<'a> {
    pub fn new(tokens: &'a TokenService) -> Self {
        Self { tokens }
    }

    /// Verifies the `Authorization: Bearer <token>` header.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AuthError::MissingCredentials)` - No `Authorization` header
    /// - `Err(AuthError::InvalidToken)` - Header is not a bearer token, or the token is
    ///   malformed or wrongly signed
    /// - `Err(AuthError::ExpiredToken)` - Token has expired
    pub fn require(&self, headers: &HeaderMap) -> Result<Claims, AuthError> {
        let Some(header) = headers.get(AUTHORIZATION) else {
            return Err(AuthError::MissingCredentials);
        };

        let token = header
            .to_str()
            .ok()
            .and_then(parse_bearer_token)
            .ok_or(AuthError::InvalidToken)?;

        self.tokens.verify(token)
    }
}

/// Rejects requests without a valid bearer token.
///
/// Verified claims are inserted into the request extensions for downstream handlers.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = AuthGuard::new(&state.token_service).require(request.headers())?;

    tracing::debug!("Authenticated user {} ({})", claims.username, claims.id);
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
