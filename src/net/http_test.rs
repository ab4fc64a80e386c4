use super::*;

#[test]
fn bearer_header_value_formats_token() {
    assert_eq!(bearer_header_value("tok_123"), "Bearer tok_123");
}

#[test]
fn bearer_header_value_keeps_token_opaque() {
    // Tokens are never parsed or trimmed; whatever was issued is sent back.
    assert_eq!(bearer_header_value(" odd token "), "Bearer  odd token ");
}
