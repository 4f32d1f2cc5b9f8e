//! API key extraction from HTTP request headers.
//!
//! This crate parses credentials sent with the custom `ApiKey` scheme:
//!
//! ```text
//! Authorization: ApiKey <key>
//! ```
//!
//! # Core Types
//!
//! - [`get_api_key`]: Extracts the key with the default header and scheme
//! - [`ApiKeyExtractor`]: Extractor with a configurable header and scheme
//! - [`AuthError`]: Why a key could not be extracted
//! - [`Secret<T>`]: Wrapper that redacts an extracted key in logs/output
//! - [`ExtractApiKey`]: Extraction from `HeaderMap`, `Request` and `Parts`
//!
//! Validating the key against a store and building the HTTP response are
//! left to the caller. [`AuthError::status_code`] gives the usual mapping.
//!
//! # Examples
//!
//! ```
//! use apikey_auth::{get_api_key, AuthError};
//! use http::{HeaderMap, HeaderValue, StatusCode, header::AUTHORIZATION};
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer somekey"));
//!
//! let err = get_api_key(&headers).unwrap_err();
//! assert_eq!(err, AuthError::MalformedHeader);
//! assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
//!
//! headers.insert(AUTHORIZATION, HeaderValue::from_static("ApiKey my-secret-key"));
//! assert_eq!(get_api_key(&headers).unwrap(), "my-secret-key");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod extract;
mod extractor;
mod secret;

pub use error::AuthError;
pub use extract::ExtractApiKey;
pub use extractor::{API_KEY_SCHEME, ApiKeyExtractor, get_api_key};
pub use secret::Secret;
