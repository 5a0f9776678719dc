use deepcheck::utils::secrets::{mask_api_key, normalize_api_key};

#[test]
fn test_normalize_strips_quotes_and_whitespace() {
    assert_eq!(normalize_api_key("  \"gsk_123\"  "), "gsk_123");
    assert_eq!(normalize_api_key("“gsk_123”"), "gsk_123");
    assert_eq!(normalize_api_key("'gsk_123'\n"), "gsk_123");
}

#[test]
fn test_normalize_keeps_inner_quotes() {
    assert_eq!(normalize_api_key("ab\"cd"), "ab\"cd");
}

#[test]
fn test_mask_keeps_last_four() {
    assert_eq!(mask_api_key("gsk_abcdef1234"), "**********1234");
    assert_eq!(mask_api_key("abc"), "***");
}
