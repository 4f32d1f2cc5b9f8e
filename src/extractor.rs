use std::borrow::Cow;

use http::header::{HeaderMap, HeaderName, AUTHORIZATION};

use crate::{AuthError, Secret};

/// Scheme token expected in front of the key: `Authorization: ApiKey <key>`.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Extracts the API key from request headers using the default configuration.
///
/// Reads the first `Authorization` value and expects it to be the literal
/// `ApiKey` followed by whitespace and the key. Tokens after the key are
/// ignored and the scheme comparison is case-sensitive.
///
/// # Errors
///
/// - [`AuthError::NoAuthHeaderIncluded`] if the header is absent or its first
///   value is empty.
/// - [`AuthError::MalformedHeader`] if the value has fewer than two tokens,
///   does not start with `ApiKey`, or is not readable as text.
///
/// # Examples
///
/// ```
/// use apikey_auth::{get_api_key, AuthError};
/// use http::{HeaderMap, HeaderValue, header::AUTHORIZATION};
///
/// let mut headers = HeaderMap::new();
/// assert_eq!(get_api_key(&headers), Err(AuthError::NoAuthHeaderIncluded));
///
/// headers.insert(AUTHORIZATION, HeaderValue::from_static("ApiKey my-secret-key"));
/// assert_eq!(get_api_key(&headers).as_deref(), Ok("my-secret-key"));
/// ```
pub fn get_api_key(headers: &HeaderMap) -> Result<String, AuthError> {
    ApiKeyExtractor::new().extract(headers)
}

/// Configurable API key extractor.
///
/// Defaults to the `Authorization` header and the [`API_KEY_SCHEME`] scheme.
/// Both can be replaced with the builder methods; the parsing rules stay the
/// same. The extractor holds no state between calls and can be shared freely
/// across threads.
///
/// # Examples
///
/// ```
/// use apikey_auth::ApiKeyExtractor;
/// use http::{HeaderMap, HeaderName, HeaderValue};
///
/// let extractor = ApiKeyExtractor::new()
///     .with_header(HeaderName::from_static("x-service-auth"))
///     .with_scheme("Service");
///
/// let mut headers = HeaderMap::new();
/// headers.insert("x-service-auth", HeaderValue::from_static("Service abc123"));
///
/// let key = extractor.extract_secret(&headers).unwrap();
/// assert_eq!(key.expose_secret(), "abc123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeyExtractor {
    header: HeaderName,
    scheme: Cow<'static, str>,
}

impl ApiKeyExtractor {
    /// Creates an extractor reading `Authorization: ApiKey <key>`.
    pub fn new() -> Self {
        Self {
            header: AUTHORIZATION,
            scheme: Cow::Borrowed(API_KEY_SCHEME),
        }
    }

    /// Replaces the scheme token.
    ///
    /// Matching stays exact and case-sensitive. A scheme containing
    /// whitespace can never match, since the header value is split on it.
    pub fn with_scheme(mut self, scheme: impl Into<Cow<'static, str>>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Reads the key from `header` instead of `Authorization`.
    pub fn with_header(mut self, header: HeaderName) -> Self {
        self.header = header;
        self
    }

    /// Returns the configured scheme token.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the configured header name.
    pub fn header(&self) -> &HeaderName {
        &self.header
    }

    /// Extracts the key from `headers`.
    ///
    /// See [`get_api_key`] for the parsing rules and errors.
    pub fn extract(&self, headers: &HeaderMap) -> Result<String, AuthError> {
        let result = self.parse(headers);
        match &result {
            Ok(_) => tracing::trace!(header = %self.header.as_str(), "api key extracted"),
            Err(err) => {
                tracing::debug!(header = %self.header.as_str(), error = %err, "api key rejected")
            }
        }
        result
    }

    /// Extracts the key from `headers` and wraps it in a [`Secret`].
    pub fn extract_secret(&self, headers: &HeaderMap) -> Result<Secret<String>, AuthError> {
        self.extract(headers).map(Secret::new)
    }

    fn parse(&self, headers: &HeaderMap) -> Result<String, AuthError> {
        // `get` yields the first value when the header is repeated.
        let value = headers
            .get(&self.header)
            .ok_or(AuthError::NoAuthHeaderIncluded)?;
        if value.is_empty() {
            return Err(AuthError::NoAuthHeaderIncluded);
        }

        let value = value.to_str().map_err(|_| AuthError::MalformedHeader)?;
        let mut tokens = value.split_whitespace();
        match (tokens.next(), tokens.next()) {
            (Some(scheme), Some(key)) if scheme == self.scheme => Ok(key.to_owned()),
            _ => Err(AuthError::MalformedHeader),
        }
    }
}

impl Default for ApiKeyExtractor {
    fn default() -> Self {
        Self::new()
    }
}
