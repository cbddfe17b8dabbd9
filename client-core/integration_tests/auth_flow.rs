use crate::helpers::{
    LOGIN_PATH, PROTECTED_PATH, REFRESH_PATH, client_for, empty_store, seeded_store,
};

use client_core::token_store::{TokenPair, TokenStore};

use reqwest::Method;

use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies the full transparent-refresh scenario: 401 on the
/// old access token, refresh with the stored refresh token, retry with
/// the new access token, new pair persisted.
///
/// **WHY THIS MATTERS**: This is the one recovery path the client owns.
/// When it works the user never notices an expiry; when it breaks every
/// session dies at the first expiry.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - The refresh body carries the wrong token (or a bearer header)
/// - The retry still carries the OLD access token
/// - The refreshed pair is not written back to the store
/// - More than one refresh or retry dispatch happens
#[tokio::test]
async fn given_expired_access_token_when_sending_then_refreshes_and_retries_once() {
    let server = MockServer::start().await;

    // GIVEN: The backend rejects the old token, accepts a refresh, and
    // serves the retry carrying the new token
    Mock::given(method("GET"))
        .and(path(PROTECTED_PATH))
        .and(header("Authorization", "Bearer A1"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(REFRESH_PATH))
        .and(body_json(serde_json::json!({ "refresh": "R1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access": "A2",
            "refresh": "R2"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(PROTECTED_PATH))
        .and(header("Authorization", "Bearer A2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("fresh data"))
        .expect(1)
        .mount(&server)
        .await;

    let store = seeded_store("A1", "R1");
    let client = client_for(&server, store.clone());

    // WHEN: Sending a request with the expired pair stored
    let request = client
        .request(Method::GET, "transactions/")
        .expect("request builds")
        .build()
        .expect("request builds");
    let response = client.send(request).await.expect("recovered transparently");

    // THEN: The caller sees only the retried success
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.expect("body"), "fresh data");

    // THEN: The new pair replaced the old one wholesale
    assert_eq!(store.get(), Some(TokenPair::new("A2", "R2")));
}

/// **VALUE**: Verifies a second 401 (on the retry) is surfaced as-is with
/// exactly one refresh attempt and cleared credentials.
///
/// **WHY THIS MATTERS**: The single retry ticket is the loop breaker. A
/// backend that keeps answering 401 must produce one refresh call, not an
/// infinite refresh storm.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - The retry path re-enters refresh on the second 401
/// - Credentials survive an unrecoverable failure
/// - The distinguished auth-required signal is lost
#[tokio::test]
async fn given_retry_also_401_when_sending_then_single_refresh_and_auth_required() {
    let server = MockServer::start().await;

    // GIVEN: A backend that answers 401 no matter which token is sent
    Mock::given(method("GET"))
        .and(path(PROTECTED_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string("token_not_valid"))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(REFRESH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access": "A2",
            "refresh": "R2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = seeded_store("A1", "R1");
    let client = client_for(&server, store.clone());

    let request = client
        .request(Method::GET, "transactions/")
        .expect("request builds")
        .build()
        .expect("request builds");
    let error = client.send(request).await.expect_err("unrecoverable 401");

    // THEN: Distinguished signal, final 401 carried along, store cleared
    assert!(error.is_authentication_required(), "got: {error}");
    assert_eq!(store.get(), None, "credentials must be cleared");
}

/// **VALUE**: Verifies a rejected refresh clears credentials and carries
/// the ORIGINAL 401 outcome to the caller.
///
/// **WHY THIS MATTERS**: When the refresh token itself has expired the
/// user must land on the login screen, and the surfaced error must still
/// describe the request that failed, not the refresh call.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - The refresh rejection propagates instead of the original 401
/// - No second dispatch of the original request sneaks in
/// - The store keeps the dead pair
#[tokio::test]
async fn given_refresh_rejected_when_sending_then_credentials_cleared() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PROTECTED_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string("token_not_valid"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(REFRESH_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string("refresh_expired"))
        .expect(1)
        .mount(&server)
        .await;

    let store = seeded_store("A1", "R1");
    let client = client_for(&server, store.clone());

    let request = client
        .request(Method::GET, "transactions/")
        .expect("request builds")
        .build()
        .expect("request builds");
    let error = client.send(request).await.expect_err("refresh rejected");

    match error {
        client_core::error::ApiClientError::AuthenticationRequired { status, body, .. } => {
            assert!(status.is_unauthorized());
            assert_eq!(body, "token_not_valid", "must carry the original 401 body");
        }
        other => panic!("expected AuthenticationRequired, got: {other}"),
    }
    assert_eq!(store.get(), None);
}

/// **VALUE**: Verifies a 401 with no stored refresh token skips straight
/// to the auth-required outcome without calling the refresh endpoint.
///
/// **BUG THIS CATCHES**: Would catch a refresh call with an empty or
/// missing token, which some backends answer with confusing 400s.
#[tokio::test]
async fn given_no_refresh_token_when_401_then_no_refresh_call_made() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PROTECTED_PATH))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(REFRESH_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let store = empty_store();
    let client = client_for(&server, store.clone());

    let request = client
        .request(Method::GET, "transactions/")
        .expect("request builds")
        .build()
        .expect("request builds");
    let error = client.send(request).await.expect_err("auth required");

    assert!(error.is_authentication_required(), "got: {error}");
    assert_eq!(store.get(), None);
}

/// **VALUE**: Verifies login stores the returned pair and logout discards
/// it, flipping `is_authenticated` accordingly.
///
/// **WHY THIS MATTERS**: Login is the only way a pair enters the store;
/// the TokenPair lifecycle starts here.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - The login body shape drifts from {"username", "password"}
/// - The returned pair is dropped instead of stored
/// - Logout leaves credentials behind
#[tokio::test]
async fn given_valid_credentials_when_login_then_pair_stored_until_logout() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .and(body_json(serde_json::json!({
            "username": "maria",
            "password": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access": "A1",
            "refresh": "R1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = empty_store();
    let client = client_for(&server, store.clone());
    assert!(!client.is_authenticated());

    client.login("maria", "hunter2").await.expect("login succeeds");

    assert!(client.is_authenticated());
    assert_eq!(store.get(), Some(TokenPair::new("A1", "R1")));

    client.logout();

    assert!(!client.is_authenticated());
    assert_eq!(store.get(), None);
}

/// **VALUE**: Verifies rejected credentials surface as a Server error and
/// leave the store empty.
///
/// **BUG THIS CATCHES**: Would catch a failed login body being parsed as
/// a TokenPair, or a partial pair reaching the store.
#[tokio::test]
async fn given_bad_credentials_when_login_then_error_and_store_untouched() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid credentials"))
        .expect(1)
        .mount(&server)
        .await;

    let store = empty_store();
    let client = client_for(&server, store.clone());

    let error = client
        .login("maria", "wrong")
        .await
        .expect_err("login rejected");

    assert!(
        matches!(
            error,
            client_core::error::ApiClientError::Server { status, .. } if status.is_unauthorized()
        ),
        "expected Server error, got: {error}"
    );
    assert_eq!(store.get(), None);
}
