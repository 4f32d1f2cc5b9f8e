use std::fmt;

use http::StatusCode;

/// Errors returned when an API key cannot be extracted from request headers.
///
/// Both kinds are terminal: retrying with the same headers yields the same
/// error. The error never carries the rejected header value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthError {
    /// The authorization header is missing or its first value is empty
    NoAuthHeaderIncluded,
    /// The header is present but does not have the `<scheme> <key>` shape
    MalformedHeader,
}

impl AuthError {
    /// Returns the response status a caller would typically answer with.
    ///
    /// A missing header maps to `401 Unauthorized`, a malformed one to
    /// `400 Bad Request`. Applying the mapping is left to the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use apikey_auth::AuthError;
    /// use http::StatusCode;
    ///
    /// assert_eq!(AuthError::NoAuthHeaderIncluded.status_code(), StatusCode::UNAUTHORIZED);
    /// assert_eq!(AuthError::MalformedHeader.status_code(), StatusCode::BAD_REQUEST);
    /// ```
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::NoAuthHeaderIncluded => StatusCode::UNAUTHORIZED,
            AuthError::MalformedHeader => StatusCode::BAD_REQUEST,
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::NoAuthHeaderIncluded => write!(f, "no authorization header included"),
            AuthError::MalformedHeader => write!(f, "malformed authorization header"),
        }
    }
}

impl std::error::Error for AuthError {}
