use std::io::Cursor;

use docx_rs::{BreakType, Docx, Paragraph, Run};

use crate::application::ports::{ExportError, ExportedReport, ReportDraft, ReportExporter};

const TITLE_SIZE: usize = 32;

/// Serializes generated text into a minimal DOCX: a bold title paragraph
/// followed by the body as one paragraph block with line breaks preserved.
/// No pagination or citation styling beyond what the text already carries.
#[derive(Default)]
pub struct DocxExporter;

impl DocxExporter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportExporter for DocxExporter {
    #[tracing::instrument(skip(self, draft), fields(task = ?draft.task))]
    fn export(&self, draft: &ReportDraft) -> Result<ExportedReport, ExportError> {
        let title = Paragraph::new().add_run(
            Run::new()
                .add_text(draft.title.as_str())
                .bold()
                .size(TITLE_SIZE),
        );

        let mut body = Paragraph::new();
        for (index, line) in draft.body.lines().enumerate() {
            let mut run = Run::new();
            if index > 0 {
                run = run.add_break(BreakType::TextWrapping);
            }
            body = body.add_run(run.add_text(line));
        }

        let docx = Docx::new().add_paragraph(title).add_paragraph(body);

        let mut buffer = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buffer)
            .map_err(|e| ExportError::SerializationFailed(e.to_string()))?;

        Ok(ExportedReport {
            filename: format!("{}.docx", draft.task.slug()),
            bytes: buffer.into_inner(),
        })
    }
}
