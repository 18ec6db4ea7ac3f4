mod analysis_service;
mod prompt_builder;
mod table_preview;

pub use analysis_service::{
    AnalysisError, AnalysisService, DatasetInterpretation, DocumentAnalysis, ExtractionFailure,
    MAX_REPORT_DOCUMENTS, ReportSynthesis,
};
pub use prompt_builder::PromptBuilder;
pub use table_preview::TablePreview;
