use chrono::Utc;
use spotirec::types::{EXPIRY_LEEWAY_SECS, TokenRecord, TokenResponse};

// Helper function to create a token record expiring the given number of
// seconds from now
fn record_expiring_in(seconds: i64) -> TokenRecord {
    TokenRecord {
        access_token: "access-token".to_string(),
        refresh_token: "refresh-token".to_string(),
        expires_at: Utc::now().timestamp() + seconds,
        scope: vec!["user-read-private".to_string()],
    }
}

// Helper function to create a token endpoint response
fn token_response(refresh_token: Option<&str>) -> TokenResponse {
    TokenResponse {
        access_token: "new-access-token".to_string(),
        refresh_token: refresh_token.map(str::to_string),
        expires_in: 3600,
        scope: Some("user-read-private user-read-email".to_string()),
    }
}

#[test]
fn test_is_expired_with_future_expiry() {
    let record = record_expiring_in(3600);
    assert!(!record.is_expired());
}

#[test]
fn test_is_expired_when_past_expiry() {
    let record = record_expiring_in(-10);
    assert!(record.is_expired());
}

#[test]
fn test_is_expired_within_leeway() {
    // A token this close to its deadline must already count as expired
    let record = record_expiring_in(EXPIRY_LEEWAY_SECS - 5);
    assert!(record.is_expired());

    // Just beyond the leeway window it is still usable
    let record = record_expiring_in(EXPIRY_LEEWAY_SECS + 120);
    assert!(!record.is_expired());
}

#[test]
fn test_from_response_sets_absolute_expiry() {
    let before = Utc::now().timestamp();
    let record = TokenRecord::from_response(token_response(Some("refresh")), None);
    let after = Utc::now().timestamp();

    // expires_at is an absolute instant derived from expires_in
    assert!(record.expires_at >= before + 3600);
    assert!(record.expires_at <= after + 3600);
}

#[test]
fn test_from_response_uses_new_refresh_token_when_present() {
    let record = TokenRecord::from_response(token_response(Some("rotated")), Some("previous"));
    assert_eq!(record.refresh_token, "rotated");
}

#[test]
fn test_from_response_preserves_previous_refresh_token() {
    // The refresh grant usually omits the refresh token; the old one stays
    let record = TokenRecord::from_response(token_response(None), Some("previous"));
    assert_eq!(record.refresh_token, "previous");
}

#[test]
fn test_from_response_splits_scope() {
    let record = TokenRecord::from_response(token_response(Some("refresh")), None);
    assert_eq!(
        record.scope,
        vec![
            "user-read-private".to_string(),
            "user-read-email".to_string()
        ]
    );
}

#[test]
fn test_from_response_without_scope() {
    let mut response = token_response(Some("refresh"));
    response.scope = None;
    let record = TokenRecord::from_response(response, None);
    assert!(record.scope.is_empty());
}
