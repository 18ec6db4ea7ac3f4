mod settings;

pub use settings::{ExtractionSettings, LlmSettings, PreviewSettings, Settings};
