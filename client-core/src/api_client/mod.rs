//! Authenticated HTTP access to the dashboard backend.
//!
//! # Features
//! - Attaches `Authorization: Bearer <access>` from an injected [`TokenStore`]
//! - Recovers from access-token expiry with exactly one refresh-and-retry
//!   cycle per logical request
//! - Fail-fast: when recovery is impossible, stored credentials are cleared
//!   and the caller is told to re-authenticate
//!
//! # Security
//! - Tokens held as `RedactedToken`, never logged
//! - The refresh call carries only the refresh token in its body, never a
//!   bearer header

use crate::config::ClientConfig;
use crate::error::api_client::ApiClientError;
use crate::token_store::{TokenPair, TokenStore};

use common::{ErrorLocation, HttpStatusCode, RedactedToken};

use std::sync::Arc;

use log::{debug, info, warn};
use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Client, Method, Request, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

const TOKEN_ENDPOINT: &str = "auth/token/";
const TOKEN_REFRESH_ENDPOINT: &str = "auth/token/refresh/";
const HEALTH_ENDPOINT: &str = "health/";
const BEARER_PREFIX: &str = "Bearer ";

#[derive(Clone)]
pub struct ApiClient {
    base_url: Url,
    client: Client,
    store: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(
        config: &ClientConfig,
        store: Arc<dyn TokenStore>,
    ) -> Result<Self, ApiClientError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
            store,
        })
    }

    /// Join a relative endpoint path onto the configured base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiClientError> {
        Ok(self.base_url.join(path)?)
    }

    /// Start building a request against the backend. Finish it with
    /// [`ApiClient::send`] to get auth attach and 401 recovery.
    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiClientError> {
        Ok(self.client.request(method, self.endpoint(path)?))
    }

    /// Dispatch `request` with auth attached, transparently refreshing the
    /// token pair and retrying once on a 401.
    ///
    /// Any non-401 response is returned verbatim, success or not; this
    /// client interprets no status other than 401. Transport failures on
    /// the original dispatch propagate untouched and never trigger a
    /// refresh.
    ///
    /// # Errors
    /// [`ApiClientError::AuthenticationRequired`] when the 401 cannot be
    /// recovered (no refresh token, refresh rejected, or a second 401 on
    /// the retry). Stored credentials are cleared before it is returned.
    pub async fn send(&self, request: Request) -> Result<Response, ApiClientError> {
        // The clone taken up front is the single retry ticket. Spending it
        // on the one retry dispatch is what makes a second refresh cycle
        // impossible; a streaming-body request has no ticket and cannot be
        // retried at all.
        let retry_ticket = request.try_clone();

        let request = match self.store.get() {
            Some(pair) => with_bearer(request, &pair.access),
            None => {
                debug!("No stored token pair, sending unauthenticated");
                request
            }
        };

        let response = self.client.execute(request).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        debug!("Received 401, attempting token refresh");

        let Some(retry) = retry_ticket else {
            warn!("401 on a request without a replayable body, cannot retry");
            return self.authentication_required(response).await;
        };

        let Some(pair) = self.store.get().filter(|pair| !pair.refresh.is_empty()) else {
            warn!("401 with no refresh token available");
            return self.authentication_required(response).await;
        };

        let fresh = match self.refresh(&pair).await {
            Ok(fresh) => fresh,
            Err(error) => {
                warn!("Token refresh failed: {error}");
                return self.authentication_required(response).await;
            }
        };

        self.store.set(&fresh);
        info!("Token pair refreshed, retrying original request");

        let retried = self
            .client
            .execute(with_bearer(retry, &fresh.access))
            .await?;
        if retried.status() == StatusCode::UNAUTHORIZED {
            // Ticket already spent; a second 401 is surfaced as-is.
            return self.authentication_required(retried).await;
        }

        Ok(retried)
    }

    /// Exchange the refresh token for a new pair.
    ///
    /// Deliberately bypasses [`ApiClient::send`]: the refresh request must
    /// not carry a bearer header, and a 401 here must not recurse.
    async fn refresh(&self, pair: &TokenPair) -> Result<TokenPair, ApiClientError> {
        let url = self.endpoint(TOKEN_REFRESH_ENDPOINT)?;
        let body = serde_json::json!({ "refresh": pair.refresh.as_str() });

        let response = self.client.post(url).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(server_error(response).await);
        }

        // A malformed body counts as a refresh failure, same as a rejection.
        let fresh: TokenPair = response.json().await?;
        Ok(fresh)
    }

    /// Unrecoverable auth failure: clear credentials, then surface the
    /// final 401 outcome. The clear happens regardless of what the caller
    /// does with the returned error.
    async fn authentication_required(
        &self,
        response: Response,
    ) -> Result<Response, ApiClientError> {
        self.store.clear();
        warn!("Authentication required, cleared stored credentials");

        let status = HttpStatusCode::from(response.status().as_u16());
        Err(ApiClientError::AuthenticationRequired {
            status,
            body: response.text().await.unwrap_or_default(),
            location: ErrorLocation::caller(),
        })
    }

    /// Obtain and store a token pair for the given credentials.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ApiClientError> {
        let url = self.endpoint(TOKEN_ENDPOINT)?;
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });

        let response = self.client.post(url).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(server_error(response).await);
        }

        let pair: TokenPair = response.json().await?;
        self.store.set(&pair);
        info!("Login succeeded, stored token pair");

        Ok(())
    }

    /// Discard any stored credentials.
    pub fn logout(&self) {
        self.store.clear();
        info!("Logged out, cleared stored credentials");
    }

    /// Whether a usable access token is currently stored.
    pub fn is_authenticated(&self) -> bool {
        self.store
            .get()
            .is_some_and(|pair| !pair.access.is_empty())
    }

    /// Authenticated GET returning a deserialized JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiClientError> {
        let request = self.request(Method::GET, path)?.build()?;

        let response = self.send(request).await?;
        if !response.status().is_success() {
            return Err(server_error(response).await);
        }

        let value: T = response.json().await?;
        Ok(value)
    }

    /// Authenticated POST with a JSON body, returning a deserialized JSON
    /// response.
    pub async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiClientError> {
        let request = self.request(Method::POST, path)?.json(body).build()?;

        let response = self.send(request).await?;
        if !response.status().is_success() {
            return Err(server_error(response).await);
        }

        let value: T = response.json().await?;
        Ok(value)
    }

    /// Backend liveness probe; unauthenticated by design.
    pub async fn health_check(&self) -> Result<bool, ApiClientError> {
        let url = self.endpoint(HEALTH_ENDPOINT)?;
        let response = self.client.get(url).send().await?;
        Ok(response.status().is_success())
    }
}

fn with_bearer(mut request: Request, access: &RedactedToken) -> Request {
    match HeaderValue::from_str(&format!("{BEARER_PREFIX}{}", access.as_str())) {
        Ok(value) => {
            request.headers_mut().insert(AUTHORIZATION, value);
        }
        Err(error) => {
            // Header stays unset; the backend's 401 takes it from here.
            warn!("Stored access token is not a valid header value: {error}");
        }
    }
    request
}

async fn server_error(response: Response) -> ApiClientError {
    let status = HttpStatusCode::from(response.status().as_u16());
    ApiClientError::Server {
        status,
        message: response.text().await.unwrap_or_default(),
        location: ErrorLocation::caller(),
    }
}
