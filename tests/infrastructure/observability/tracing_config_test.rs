use tvilling::infrastructure::observability::TracingConfig;

#[test]
fn given_level_when_creating_config_then_crate_and_http_layer_use_it() {
    let config = TracingConfig::new("prod", "debug", true);

    assert_eq!(config.environment, "prod");
    assert!(config.json_format);
    assert_eq!(
        config.default_filter,
        "warn,tvilling=debug,tower_http=debug"
    );
}

#[test]
fn given_default_config_when_created_then_info_level_text_output() {
    let config = TracingConfig::default();

    assert_eq!(config.environment, "local");
    assert!(!config.json_format);
    assert!(config.default_filter.contains("tvilling=info"));
}
