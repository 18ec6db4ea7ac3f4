use serde::Deserialize;

/// Session configuration. There are no config files and no persisted state;
/// defaults are overridden from the environment once per process start. The
/// API credential is deliberately not part of this struct. It is read
/// separately via [`crate::domain::ApiCredential`] and passed explicitly
/// into the completion client.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub llm: LlmSettings,
    pub preview: PreviewSettings,
    pub extraction: ExtractionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub base_url: String,
    pub model: String,
    pub max_output_tokens: usize,
    pub temperature: f32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PreviewSettings {
    /// Rows kept in table previews and prompt-embedded CSV.
    pub max_rows: usize,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ExtractionSettings {
    /// Upper bound for one blocking PDF text extraction.
    pub pdf_timeout_secs: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            max_output_tokens: 700,
            temperature: 0.2,
        }
    }
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self { max_rows: 20 }
    }
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            pdf_timeout_secs: 30,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            llm: LlmSettings::default(),
            preview: PreviewSettings::default(),
            extraction: ExtractionSettings::default(),
        }
    }
}

impl Settings {
    /// Defaults with environment overrides for the model endpoint.
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Ok(base_url) = std::env::var("GENOLENS_BASE_URL") {
            settings.llm.base_url = base_url;
        }
        if let Ok(model) = std::env::var("GENOLENS_MODEL") {
            settings.llm.model = model;
        }
        settings
    }
}
