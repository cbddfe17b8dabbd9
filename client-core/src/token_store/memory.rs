use super::{TokenPair, TokenStore};

use std::sync::{Mutex, PoisonError};

/// In-memory backend for tests and sessions that should not outlive the
/// process.
#[derive(Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<TokenPair>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience for tests: a store pre-seeded with a pair.
    pub fn with_pair(pair: TokenPair) -> Self {
        Self {
            slot: Mutex::new(Some(pair)),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<TokenPair> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, pair: &TokenPair) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(pair.clone());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
