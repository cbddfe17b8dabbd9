//! Durable storage for the access/refresh token pair.
//!
//! # Features
//! - One well-known record, serialized as `{"access": ..., "refresh": ...}`
//! - Infallible interface: backends log and degrade on I/O problems
//! - Corrupt or unreadable data reads as absent, never as an error
//! - Injected behind a trait so the client can run against in-memory
//!   storage in tests and file storage in production
//!
//! # Security
//! - Token values wrapped in `RedactedToken` (safe Debug, zeroized on drop)

pub mod file;
pub mod memory;

pub use file::FileTokenStore;
pub use memory::MemoryTokenStore;

use common::RedactedToken;

use serde::{Deserialize, Serialize};

/// An access/refresh credential pair.
///
/// A pair is either fully present or fully absent in storage, never
/// partial: it is created wholesale on login, overwritten wholesale on
/// refresh, and deleted wholesale on logout or unrecoverable auth failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: RedactedToken,
    pub refresh: RedactedToken,
}

impl TokenPair {
    pub fn new(access: &str, refresh: &str) -> Self {
        Self {
            access: RedactedToken::from(access),
            refresh: RedactedToken::from(refresh),
        }
    }
}

/// Key-value persistence for exactly one [`TokenPair`].
///
/// `get` never fails: a missing or unparseable record is simply absent.
/// `set` overwrites any existing pair; `clear` is idempotent. Concurrent
/// writes are last-writer-wins; no locking is implied.
pub trait TokenStore: Send + Sync {
    /// Read the stored pair, if any.
    fn get(&self) -> Option<TokenPair>;

    /// Overwrite any existing pair with `pair`.
    fn set(&self, pair: &TokenPair);

    /// Remove any stored pair. Clearing an empty store is not an error.
    fn clear(&self);
}
