mod completion_client;
mod content_extractor;
mod report_exporter;

pub use completion_client::{CompletionClient, CompletionClientError, CompletionRequest};
pub use content_extractor::{ContentExtractor, ExtractError};
pub use report_exporter::{ExportError, ExportedReport, ReportDraft, ReportExporter};
