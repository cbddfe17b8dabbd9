//! Test helpers for API client integration tests.
//!
//! Builds an [`ApiClient`] pointed at a wiremock server, with an
//! in-memory token store the tests keep a handle on so they can assert
//! stored-credential side effects.

use client_core::api_client::ApiClient;
use client_core::config::ClientConfig;
use client_core::token_store::{MemoryTokenStore, TokenPair};

use std::sync::Arc;

use wiremock::MockServer;

/// Mirror of the deployed layout: every endpoint lives under `/api`.
pub const PROTECTED_PATH: &str = "/api/transactions/";
pub const REFRESH_PATH: &str = "/api/auth/token/refresh/";
pub const LOGIN_PATH: &str = "/api/auth/token/";

/// Test helper: client against `server` using the given store.
pub fn client_for(server: &MockServer, store: Arc<MemoryTokenStore>) -> ApiClient {
    let config = ClientConfig::with_base_url(&format!("{}/api", server.uri()))
        .expect("valid test base URL");
    ApiClient::new(&config, store).expect("client builds")
}

/// Test helper: store pre-seeded with an access/refresh pair.
pub fn seeded_store(access: &str, refresh: &str) -> Arc<MemoryTokenStore> {
    Arc::new(MemoryTokenStore::with_pair(TokenPair::new(access, refresh)))
}

/// Test helper: empty store.
pub fn empty_store() -> Arc<MemoryTokenStore> {
    Arc::new(MemoryTokenStore::new())
}
