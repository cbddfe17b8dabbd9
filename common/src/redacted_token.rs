//! Secure bearer-token handling with redacted Debug output.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// A bearer token that never exposes its value in logs or debug output.
///
/// Unlike an API key, tokens must round-trip through persistent storage, so
/// this type serializes transparently as a plain string. Redaction applies
/// to `Debug`/`Display` only; use [`RedactedToken::as_str`] at the single
/// point where the value is actually transmitted or persisted.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RedactedToken {
    inner: String,
}

impl RedactedToken {
    /// Wrap a raw token value.
    pub fn new(token: String) -> Self {
        Self { inner: token }
    }

    /// Get the actual token value for transmission or storage.
    ///
    /// # Security Note
    /// Only call this when attaching the token to a request or writing it
    /// to the token store. Never feed the result to a log macro.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Get the token length (safe to log).
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if the token is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl From<&str> for RedactedToken {
    fn from(token: &str) -> Self {
        Self::new(String::from(token))
    }
}

impl fmt::Debug for RedactedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RedactedToken([REDACTED])")
    }
}

impl fmt::Display for RedactedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED TOKEN]")
    }
}

impl Drop for RedactedToken {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}
