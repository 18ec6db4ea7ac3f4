use genolens::config::Settings;
use genolens::domain::ApiCredential;

#[test]
fn given_blank_key_when_constructing_then_credential_is_rejected() {
    assert!(ApiCredential::new("").is_none());
    assert!(ApiCredential::new("   ").is_none());
    assert!(ApiCredential::new("sk-test").is_some());
}

#[test]
fn given_a_credential_when_debug_formatting_then_key_is_redacted() {
    let credential = ApiCredential::new("sk-secret-value").expect("non-blank key");

    let rendered = format!("{credential:?}");

    assert!(!rendered.contains("sk-secret-value"));
    assert!(rendered.contains("redacted"));
}

#[test]
fn given_default_settings_then_model_knobs_match_the_service_defaults() {
    let settings = Settings::default();

    assert_eq!(settings.llm.model, "gpt-4o-mini");
    assert_eq!(settings.llm.max_output_tokens, 700);
    assert_eq!(settings.llm.temperature, 0.2);
    assert_eq!(settings.preview.max_rows, 20);
    assert_eq!(settings.extraction.pdf_timeout_secs, 30);
}
