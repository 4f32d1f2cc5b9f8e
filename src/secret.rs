use std::fmt;

/// A redacting wrapper for extracted credentials.
///
/// Keys returned by [`ApiKeyExtractor::extract_secret`](crate::ApiKeyExtractor::extract_secret)
/// are wrapped in `Secret` so that they can be carried through request
/// extensions, error paths and `tracing` fields without ever being printed.
///
/// `Debug` and `Display` always render `[REDACTED]`. The value is reachable
/// only through [`expose_secret`](Self::expose_secret) or
/// [`into_exposed`](Self::into_exposed).
///
/// # Examples
///
/// ```
/// use apikey_auth::Secret;
///
/// let key = Secret::new("my-secret-key".to_string());
///
/// assert_eq!(format!("{:?}", key), "[REDACTED]");
/// assert_eq!(format!("{}", key), "[REDACTED]");
/// assert_eq!(key.expose_secret(), "my-secret-key");
/// ```
// No Clone, Copy, Default, Deref or AsRef: copies and implicit access would bypass redaction.
pub struct Secret<T> {
    // Must stay private.
    inner: T,
}

impl<T> Secret<T> {
    /// Wraps a sensitive value.
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Borrows the wrapped value.
    ///
    /// Callers must not log or display the returned reference.
    pub fn expose_secret(&self) -> &T {
        &self.inner
    }

    /// Consumes the wrapper and returns the wrapped value.
    pub fn into_exposed(self) -> T {
        self.inner
    }
}

impl<T> fmt::Debug for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl<T> fmt::Display for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_redacts_debug() {
        let key = Secret::new("my-secret-key".to_string());
        let debug_output = format!("{:?}", key);

        assert_eq!(debug_output, "[REDACTED]");
        assert!(!debug_output.contains("my-secret"));
        assert!(!debug_output.contains("String"));
    }

    #[test]
    fn secret_redacts_display() {
        let key = Secret::new("sk-1234567890");
        assert_eq!(format!("{}", key), "[REDACTED]");
    }

    #[test]
    fn secret_redacts_when_nested() {
        let keys = vec![Some(Secret::new("a".to_string())), None];
        assert_eq!(format!("{:?}", keys), "[Some([REDACTED]), None]");
    }

    #[test]
    fn secret_exposes_when_explicit() {
        let key = Secret::new("abc".to_string());
        assert_eq!(key.expose_secret(), "abc");
        assert_eq!(key.into_exposed(), "abc");
    }
}
