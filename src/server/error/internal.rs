use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to sign a JWT for an authenticated user
    ///
    /// Only reachable with a misconfigured key. Results in a 500 Internal Server Error
    /// with a generic message returned to client.
    #[error("Failed to encode access token: {source}")]
    TokenEncoding {
        /// The underlying jsonwebtoken error
        #[source]
        source: jsonwebtoken::errors::Error,
    },

    /// Failure to hash a password during registration
    ///
    /// Only reachable with invalid hashing parameters. Results in a 500 Internal Server
    /// Error with a generic message returned to client.
    #[error("Failed to hash password: {source}")]
    PasswordHashing {
        /// The underlying argon2 error
        #[source]
        source: argon2::password_hash::Error,
    },
}
