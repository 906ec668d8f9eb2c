/// Extracts the token from an `Authorization: Bearer <token>` header value.
///
/// The scheme is matched case-insensitively and surrounding whitespace is ignored.
///
/// # Arguments
/// - `value` - Raw header value
///
/// # Returns
/// - `Some(&str)` - The token portion of a well-formed bearer header
/// - `None` - Any other scheme, a missing token, or extra segments
pub fn parse_bearer_token(value: &str) -> Option<&str> {
    let mut parts = value.split_whitespace();

    let scheme = parts.next()?;
    let token = parts.next()?;

    if !scheme.eq_ignore_ascii_case("bearer") || parts.next().is_some() {
        return None;
    }

    Some(token)
}
