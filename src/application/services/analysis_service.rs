use std::sync::Arc;

use crate::application::ports::{
    CompletionClient, CompletionRequest, ContentExtractor, ExtractError,
};
use crate::config::PreviewSettings;
use crate::domain::{
    AnalysisTask, CompletionOutcome, ExtractedContent, PromptOptions, UploadedDocument,
};

use super::prompt_builder::PromptBuilder;
use super::table_preview::TablePreview;

/// Documents beyond this bound are silently ignored when synthesizing a
/// multi-document review; they are never extracted.
pub const MAX_REPORT_DOCUMENTS: usize = 10;

/// The one parameterized pipeline: extract, synthesize a prompt, call the
/// completion service. Task type and detail level are inputs, not separate
/// code paths.
///
/// The completion client is `None` when no API credential was supplied for
/// the session; every operation then short-circuits with
/// [`AnalysisError::MissingCredential`] before any extraction runs.
pub struct AnalysisService<E>
where
    E: ContentExtractor + ?Sized,
{
    extractor: Arc<E>,
    completion: Option<Arc<dyn CompletionClient>>,
    preview: PreviewSettings,
}

/// Result of summarizing one document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentAnalysis {
    pub filename: String,
    pub outcome: CompletionOutcome,
}

/// Result of interpreting one tabular dataset: the bounded preview shown to
/// the user plus the model's interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetInterpretation {
    pub filename: String,
    pub preview: TablePreview,
    pub outcome: CompletionOutcome,
}

/// An extraction error surfaced inline next to the offending file; the rest
/// of the batch is unaffected.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionFailure {
    pub filename: String,
    pub message: String,
}

/// Result of a multi-document report synthesis.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSynthesis {
    /// Filenames whose text made it into the prompt, in upload order.
    pub included: Vec<String>,
    pub failures: Vec<ExtractionFailure>,
    /// Documents beyond the per-report bound, silently ignored.
    pub skipped: usize,
    pub outcome: CompletionOutcome,
}

impl<E> AnalysisService<E>
where
    E: ContentExtractor + ?Sized,
{
    pub fn new(
        extractor: Arc<E>,
        completion: Option<Arc<dyn CompletionClient>>,
        preview: PreviewSettings,
    ) -> Self {
        Self {
            extractor,
            completion,
            preview,
        }
    }

    pub async fn summarize(
        &self,
        document: &UploadedDocument,
        options: &PromptOptions,
    ) -> Result<DocumentAnalysis, AnalysisError> {
        let client = self.client()?;

        let content = self
            .extractor
            .extract(&document.bytes, document)
            .await
            .map_err(AnalysisError::Extraction)?;

        let rendered = self.render(&content);
        let prompt = PromptBuilder::summarize(&rendered, options.detail_level);
        let outcome = self
            .run_completion(client, AnalysisTask::Summarize, prompt, options)
            .await;

        Ok(DocumentAnalysis {
            filename: document.filename.clone(),
            outcome,
        })
    }

    pub async fn interpret_dataset(
        &self,
        document: &UploadedDocument,
        options: &PromptOptions,
    ) -> Result<DatasetInterpretation, AnalysisError> {
        let client = self.client()?;

        let content = self
            .extractor
            .extract(&document.bytes, document)
            .await
            .map_err(AnalysisError::Extraction)?;

        let table = match content {
            ExtractedContent::Table(table) => table,
            ExtractedContent::PlainText(_) => {
                return Err(AnalysisError::NotTabular(document.filename.clone()));
            }
        };

        let preview = TablePreview::of(&table, self.preview.max_rows);
        let prompt = PromptBuilder::interpret(&preview.to_csv());
        let outcome = self
            .run_completion(client, AnalysisTask::Interpret, prompt, options)
            .await;

        Ok(DatasetInterpretation {
            filename: document.filename.clone(),
            preview,
            outcome,
        })
    }

    /// Processes at most [`MAX_REPORT_DOCUMENTS`] documents strictly
    /// sequentially, in upload order. Extraction failures are recorded per
    /// file and do not abort the batch.
    pub async fn synthesize_report(
        &self,
        documents: &[UploadedDocument],
        options: &PromptOptions,
    ) -> Result<ReportSynthesis, AnalysisError> {
        let client = self.client()?;

        let skipped = documents.len().saturating_sub(MAX_REPORT_DOCUMENTS);
        let mut included = Vec::new();
        let mut failures = Vec::new();
        let mut texts = Vec::new();

        for document in documents.iter().take(MAX_REPORT_DOCUMENTS) {
            match self.extractor.extract(&document.bytes, document).await {
                Ok(content) => {
                    included.push(document.filename.clone());
                    texts.push(self.render(&content));
                }
                Err(error) => {
                    tracing::warn!(
                        filename = %document.filename,
                        %error,
                        "skipping document after extraction failure"
                    );
                    failures.push(ExtractionFailure {
                        filename: document.filename.clone(),
                        message: error.to_string(),
                    });
                }
            }
        }

        if texts.is_empty() {
            return Err(AnalysisError::NothingExtracted);
        }

        let prompt = PromptBuilder::synthesize_report(&texts);
        let outcome = self
            .run_completion(client, AnalysisTask::SynthesizeReport, prompt, options)
            .await;

        Ok(ReportSynthesis {
            included,
            failures,
            skipped,
            outcome,
        })
    }

    fn client(&self) -> Result<&Arc<dyn CompletionClient>, AnalysisError> {
        self.completion
            .as_ref()
            .ok_or(AnalysisError::MissingCredential)
    }

    /// Plain text passes through verbatim; tables render as the bounded
    /// preview CSV. No token-budget trimming happens here.
    fn render(&self, content: &ExtractedContent) -> String {
        match content {
            ExtractedContent::PlainText(text) => text.clone(),
            ExtractedContent::Table(table) => {
                TablePreview::of(table, self.preview.max_rows).to_csv()
            }
        }
    }

    async fn run_completion(
        &self,
        client: &Arc<dyn CompletionClient>,
        task: AnalysisTask,
        prompt: String,
        options: &PromptOptions,
    ) -> CompletionOutcome {
        let request = CompletionRequest {
            system: PromptBuilder::system_instruction(task).to_string(),
            prompt,
            max_output_tokens: options.max_output_tokens,
            temperature: options.temperature,
        };

        match client.complete(&request).await {
            Ok(text) => CompletionOutcome::Generated(text),
            Err(error) => {
                tracing::warn!(?task, %error, "completion call failed");
                CompletionOutcome::Failed(error.to_string())
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("no API credential supplied for this session")]
    MissingCredential,
    #[error("extraction: {0}")]
    Extraction(#[from] ExtractError),
    #[error("document {0} did not produce tabular content")]
    NotTabular(String),
    #[error("no document in the batch produced extractable content")]
    NothingExtracted,
}
