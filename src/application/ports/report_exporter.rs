use crate::domain::AnalysisTask;

/// Generated text ready to be serialized into a downloadable document.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDraft {
    pub task: AnalysisTask,
    pub title: String,
    pub body: String,
}

/// A finished downloadable artifact. The filename derives from the task, not
/// from any input filename.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedReport {
    pub filename: String,
    pub bytes: Vec<u8>,
}

pub trait ReportExporter: Send + Sync {
    fn export(&self, draft: &ReportDraft) -> Result<ExportedReport, ExportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("serialization failed: {0}")]
    SerializationFailed(String),
}
