use super::*;

#[test]
fn encode_writes_boolean_literal() {
    assert_eq!(encode(AuthState::new(true)), "true");
    assert_eq!(encode(AuthState::new(false)), "false");
}

#[test]
fn decode_reads_encoded_values() {
    assert!(decode(encode(AuthState::new(true))).is_authenticated());
    assert!(!decode(encode(AuthState::new(false))).is_authenticated());
}

#[test]
fn decode_trims_whitespace() {
    assert!(decode("  true\n").is_authenticated());
}

#[test]
fn decode_rejects_anything_else() {
    for raw in ["", "1", "yes", "TRUE", "garbage"] {
        assert!(!decode(raw).is_authenticated(), "{raw:?}");
    }
}

#[test]
fn read_outside_browser_is_unauthenticated() {
    assert_eq!(read(), AuthState::default());
}
