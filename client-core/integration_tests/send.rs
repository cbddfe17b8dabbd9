use crate::helpers::{PROTECTED_PATH, REFRESH_PATH, client_for, empty_store, seeded_store};

use client_core::api_client::ApiClient;
use client_core::config::ClientConfig;
use client_core::token_store::{TokenPair, TokenStore};

use reqwest::Method;

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies the stored access token is attached as a bearer
/// header on outgoing requests.
///
/// **WHY THIS MATTERS**: Every authenticated endpoint depends on this one
/// header. If attach breaks, the entire dashboard degrades to 401s.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - The store read is skipped before dispatch
/// - The header name or "Bearer " prefix drifts
/// - The refresh token is attached instead of the access token
#[tokio::test]
async fn given_stored_pair_when_sending_then_bearer_access_header_attached() {
    // GIVEN: A server that only answers requests carrying "Bearer A1"
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PROTECTED_PATH))
        .and(header("Authorization", "Bearer A1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, seeded_store("A1", "R1"));

    // WHEN: Sending a request through the client
    let request = client
        .request(Method::GET, "transactions/")
        .expect("request builds")
        .build()
        .expect("request builds");
    let response = client.send(request).await.expect("request succeeds");

    // THEN: The server matched on the bearer header
    assert_eq!(response.status(), 200);
}

/// **VALUE**: Verifies an empty store still dispatches the request,
/// without an Authorization header and without crashing.
///
/// **WHY THIS MATTERS**: Login and health endpoints are reached before
/// any pair exists. The client must not invent a header or refuse to
/// send.
///
/// **BUG THIS CATCHES**: Would catch an unwrap on the absent pair, or a
/// stale/empty bearer header being attached.
#[tokio::test]
async fn given_empty_store_when_sending_then_request_goes_out_unauthenticated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PROTECTED_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, empty_store());

    let request = client
        .request(Method::GET, "transactions/")
        .expect("request builds")
        .build()
        .expect("request builds");
    let response = client.send(request).await.expect("request succeeds");

    assert_eq!(response.status(), 200);

    // THEN: No Authorization header reached the server
    let requests = server.received_requests().await.expect("requests recorded");
    assert_eq!(requests.len(), 1);
    assert!(
        requests[0].headers.get("authorization").is_none(),
        "unauthenticated send must not carry an Authorization header"
    );
}

/// **VALUE**: Verifies non-401 errors pass through verbatim with no
/// refresh attempt.
///
/// **WHY THIS MATTERS**: The client interprets exactly one status: 401.
/// Treating a 500 or 403 as an auth expiry would log users out on
/// unrelated backend failures.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - The 401 check widens to all 4xx/5xx
/// - Error statuses are converted into Err instead of returned as-is
/// - The refresh endpoint is called for a non-401 response
#[tokio::test]
async fn given_server_error_when_sending_then_response_passes_through_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PROTECTED_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend down"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(REFRESH_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let store = seeded_store("A1", "R1");
    let client = client_for(&server, store.clone());

    let request = client
        .request(Method::GET, "transactions/")
        .expect("request builds")
        .build()
        .expect("request builds");
    let response = client.send(request).await.expect("response passes through");

    // THEN: The 500 comes back as a plain response and the pair survives
    assert_eq!(response.status(), 500);
    assert_eq!(response.text().await.expect("body"), "backend down");
    assert!(store.get().is_some(), "non-401 must not touch stored credentials");
}

/// **VALUE**: Verifies the health probe reports backend liveness without
/// touching auth state.
///
/// **BUG THIS CATCHES**: The probe being routed through the 401-recovery
/// path, where an unhealthy backend could clear valid credentials.
#[tokio::test]
async fn given_healthy_backend_when_health_checked_then_true() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ok"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, empty_store());

    assert!(client.health_check().await.expect("probe sends"));
}

/// **VALUE**: Verifies `get_json` deserializes a typed body through the
/// authenticated path and maps non-2xx onto a Server error.
///
/// **WHY THIS MATTERS**: The application's endpoint wrappers are all thin
/// layers over `get_json`/`post_json`; this is their shared contract.
///
/// **BUG THIS CATCHES**: Would catch the success check being dropped so
/// error bodies get fed to the deserializer.
#[tokio::test]
async fn given_json_endpoint_when_get_json_then_typed_body_or_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/notifications/unread-count/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "unread_count": 3
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/budgets/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let client = client_for(&server, seeded_store("A1", "R1"));

    let value: serde_json::Value = client
        .get_json("notifications/unread-count/")
        .await
        .expect("typed body");
    assert_eq!(value["unread_count"], 3);

    let error = client
        .get_json::<serde_json::Value>("budgets/")
        .await
        .expect_err("non-2xx surfaces as error");
    assert!(
        matches!(
            error,
            client_core::error::ApiClientError::Server { status, .. } if status.0 == 503
        ),
        "expected Server error, got: {error}"
    );
}

/// **VALUE**: Verifies a transport failure (no response at all) propagates
/// untouched and never enters the refresh path.
///
/// **WHY THIS MATTERS**: A flaky network must not be mistaken for an
/// expired session. If connection errors reached the 401-recovery path,
/// an offline user would be logged out and a perfectly valid pair
/// discarded.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - A connect error is mapped onto AuthenticationRequired
/// - The failure path clears or rewrites the stored pair
/// - A refresh dispatch is attempted with no original response
#[tokio::test]
async fn given_unreachable_backend_when_sending_then_transport_error_propagates() {
    // GIVEN: A client pointed at the discard port, where nothing listens
    let config =
        ClientConfig::with_base_url("http://127.0.0.1:9/api").expect("valid base URL");
    let store = seeded_store("A1", "R1");
    let client = ApiClient::new(&config, store.clone()).expect("client builds");

    let request = client
        .request(Method::GET, "transactions/")
        .expect("request builds")
        .build()
        .expect("request builds");
    let error = client.send(request).await.expect_err("connection fails");

    // THEN: A plain transport error, not an auth signal
    assert!(
        matches!(error, client_core::error::ApiClientError::Http { .. }),
        "expected Http transport error, got: {error}"
    );
    assert!(!error.is_authentication_required());

    // THEN: The stored pair survives untouched
    assert_eq!(store.get(), Some(TokenPair::new("A1", "R1")));
}
