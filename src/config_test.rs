use super::*;

#[test]
fn defaults_match_deployed_values() {
    let config = ClientConfig::default();
    assert_eq!(config.token_storage_key, "FBIdToken");
    assert_eq!(config.page_size, 15);
    assert_eq!(config.expiry_notice_lead, Duration::from_millis(30));
}

#[test]
fn from_values_uses_defaults_when_unset() {
    assert_eq!(ClientConfig::from_values(None, None), ClientConfig::default());
}

#[test]
fn from_values_trims_trailing_slash_from_api_base() {
    let config = ClientConfig::from_values(Some("https://review.example.edu/"), None);
    assert_eq!(config.api_base, "https://review.example.edu");
}

#[test]
fn from_values_ignores_blank_api_base() {
    let config = ClientConfig::from_values(Some("  "), None);
    assert_eq!(config.api_base, DEFAULT_API_BASE);
}

#[test]
fn from_values_parses_page_size() {
    let config = ClientConfig::from_values(None, Some(" 40 "));
    assert_eq!(config.page_size, 40);
}

#[test]
fn from_values_rejects_invalid_or_zero_page_size() {
    assert_eq!(ClientConfig::from_values(None, Some("lots")).page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(ClientConfig::from_values(None, Some("0")).page_size, DEFAULT_PAGE_SIZE);
}
