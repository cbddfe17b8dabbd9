// Unit tests for HttpStatusCode predicates

use crate::HttpStatusCode;

/// **VALUE**: Verifies status ranges classify correctly at their boundaries.
///
/// **WHY THIS MATTERS**: The client's entire 401 interpretation hinges on
/// these predicates. A misclassified boundary (e.g., 400 counted as success)
/// would silently disable the refresh path or trigger it on the wrong codes.
///
/// **BUG THIS CATCHES**: Off-by-one errors in the range checks.
#[test]
fn given_status_codes_when_classified_then_ranges_are_exact() {
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(299).is_success());
    assert!(!HttpStatusCode(300).is_success());

    assert!(HttpStatusCode(400).is_client_error());
    assert!(HttpStatusCode(499).is_client_error());
    assert!(!HttpStatusCode(500).is_client_error());

    assert!(HttpStatusCode(500).is_server_error());
    assert!(HttpStatusCode(599).is_server_error());
    assert!(!HttpStatusCode(600).is_server_error());
}

/// **VALUE**: Verifies only 401 registers as unauthorized.
///
/// **WHY THIS MATTERS**: 403 (forbidden) must NOT trigger a token refresh:
/// the credentials are valid, the caller just lacks permission. Treating
/// 403 as 401 would log users out on permission errors.
///
/// **BUG THIS CATCHES**: Would catch is_unauthorized widening to all 4xx.
#[test]
fn given_auth_adjacent_codes_when_checked_then_only_401_is_unauthorized() {
    assert!(HttpStatusCode(401).is_unauthorized());
    assert!(!HttpStatusCode(403).is_unauthorized());
    assert!(!HttpStatusCode(400).is_unauthorized());
}

/// **VALUE**: Verifies Display renders the bare numeric code.
///
/// **WHY THIS MATTERS**: Error messages interpolate the status directly
/// ("HTTP 502 - ..."); decorated output would double-wrap the number.
///
/// **BUG THIS CATCHES**: Display format drift.
#[test]
fn given_status_code_when_displayed_then_shows_bare_number() {
    assert_eq!(format!("{}", HttpStatusCode(404)), "404");
    assert_eq!(HttpStatusCode::from(503), HttpStatusCode(503));
}
