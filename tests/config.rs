use remindr::config::Config;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.api.base_url, "http://localhost:8000");
    assert_eq!(config.api.api_token_env, "REMINDR_API_TOKEN");
    assert_eq!(config.api.timeout_secs, 10);
    assert_eq!(config.ui.default_view, "today");
    assert!(config.display.show_channel_badges);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Invalid sidebar width should fail
    config.ui.sidebar_width = 10;
    assert!(config.validate().is_err());

    // Reset and test invalid timeout
    config.ui.sidebar_width = 30;
    config.api.timeout_secs = 0;
    assert!(config.validate().is_err());

    // Reset and test unknown default view
    config.api.timeout_secs = 10;
    config.ui.default_view = "nonsense".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("default_view = \"today\""));
    assert!(toml_str.contains("base_url = \"http://localhost:8000\""));
    assert!(toml_str.contains("api_token_env = \"REMINDR_API_TOKEN\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
sidebar_width = 35

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();
    assert_eq!(config.ui.sidebar_width, 35);
    assert!(config.logging.enabled);
    // Untouched sections fall back to defaults
    assert_eq!(config.ui.default_view, "today");
    assert_eq!(config.api.base_url, "http://localhost:8000");
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_date_format_rejected() {
    let mut config = Config::default();
    config.display.date_format = "%Q".to_string();
    assert!(config.validate().is_err());
}
