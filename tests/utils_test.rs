use spotirec::utils::*;

#[test]
fn test_generate_session_id() {
    let id = generate_session_id();

    // Should be exactly 64 characters
    assert_eq!(id.len(), 64);

    // Should contain only alphanumeric characters
    assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated ids should be different
    let id2 = generate_session_id();
    assert_ne!(id, id2);
}
