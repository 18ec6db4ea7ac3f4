use genolens::infrastructure::observability::{TracingConfig, init_tracing};

#[test]
fn given_no_env_vars_when_creating_default_then_uses_development() {
    let config = TracingConfig::default();
    assert!(!config.json_format);
}

#[test]
fn given_default_config_when_created_then_environment_is_set() {
    let config = TracingConfig::default();
    assert!(!config.environment.is_empty());
}

#[test]
fn given_a_config_when_initializing_then_subscriber_accepts_events() {
    init_tracing(TracingConfig {
        environment: "test".to_string(),
        json_format: false,
    });

    // Emitting through the installed subscriber must not panic.
    tracing::info!(check = true, "pipeline event after init");
}
