//! Extraction boundary for HTTP request types.
//!
//! Middleware holds a full request, its head, or just the header map. This
//! module lets each of them hand its headers to an [`ApiKeyExtractor`] without
//! the caller reaching into the request first.

use http::request::Parts;
use http::{HeaderMap, Request};

use crate::{ApiKeyExtractor, AuthError, Secret};

/// Extracts a redacted API key from a request-like value.
///
/// Implemented for [`HeaderMap`], [`Request<B>`] and request [`Parts`].
/// Framework integrations can implement it for their own request types by
/// delegating to [`ApiKeyExtractor::extract_secret`].
///
/// # Examples
///
/// ```
/// use apikey_auth::{ApiKeyExtractor, AuthError, ExtractApiKey};
/// use http::Request;
///
/// let request = Request::builder()
///     .header("authorization", "ApiKey my-secret-key")
///     .body(())
///     .unwrap();
///
/// let key = request.extract_api_key(&ApiKeyExtractor::new()).unwrap();
/// assert_eq!(key.expose_secret(), "my-secret-key");
///
/// let anonymous = Request::builder().body(()).unwrap();
/// let err = anonymous.extract_api_key(&ApiKeyExtractor::new()).unwrap_err();
/// assert_eq!(err, AuthError::NoAuthHeaderIncluded);
/// ```
pub trait ExtractApiKey {
    /// Extracts the key using `extractor`'s header and scheme.
    ///
    /// # Errors
    ///
    /// Returns the [`AuthError`] produced by the extractor.
    fn extract_api_key(&self, extractor: &ApiKeyExtractor) -> Result<Secret<String>, AuthError>;
}

impl ExtractApiKey for HeaderMap {
    fn extract_api_key(&self, extractor: &ApiKeyExtractor) -> Result<Secret<String>, AuthError> {
        extractor.extract_secret(self)
    }
}

impl<B> ExtractApiKey for Request<B> {
    fn extract_api_key(&self, extractor: &ApiKeyExtractor) -> Result<Secret<String>, AuthError> {
        extractor.extract_secret(self.headers())
    }
}

impl ExtractApiKey for Parts {
    fn extract_api_key(&self, extractor: &ApiKeyExtractor) -> Result<Secret<String>, AuthError> {
        extractor.extract_secret(&self.headers)
    }
}
