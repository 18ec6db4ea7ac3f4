use genolens::application::ports::{
    ContentExtractor, ExportedReport, ReportDraft, ReportExporter,
};
use genolens::domain::{AnalysisTask, DocumentFormat, ExtractedContent, UploadedDocument};
use genolens::infrastructure::export::DocxExporter;
use genolens::infrastructure::extraction::DocxAdapter;

fn draft(task: AnalysisTask, body: &str) -> ReportDraft {
    ReportDraft {
        task,
        title: "AI Generated Report".to_string(),
        body: body.to_string(),
    }
}

#[test]
fn given_a_draft_when_exporting_then_bytes_are_a_zip_container() {
    let report = DocxExporter::new()
        .export(&draft(AnalysisTask::Summarize, "Body paragraph."))
        .expect("export should succeed");

    // DOCX is a ZIP archive; the local file header magic is "PK".
    assert!(report.bytes.len() > 4);
    assert_eq!(&report.bytes[..2], b"PK");
}

#[test]
fn given_each_task_when_exporting_then_filename_derives_from_the_task() {
    let exporter = DocxExporter::new();

    let summary = exporter
        .export(&draft(AnalysisTask::Summarize, "s"))
        .expect("export should succeed");
    let interpretation = exporter
        .export(&draft(AnalysisTask::Interpret, "i"))
        .expect("export should succeed");
    let review = exporter
        .export(&draft(AnalysisTask::SynthesizeReport, "r"))
        .expect("export should succeed");

    assert_eq!(summary.filename, "summary.docx");
    assert_eq!(interpretation.filename, "interpretation.docx");
    assert_eq!(review.filename, "synthesized_review.docx");
}

#[tokio::test]
async fn given_an_exported_report_when_reading_it_back_then_title_and_body_survive() {
    let ExportedReport { bytes, .. } = DocxExporter::new()
        .export(&draft(
            AnalysisTask::SynthesizeReport,
            "First finding.\nSecond finding.",
        ))
        .expect("export should succeed");

    let document =
        UploadedDocument::new("report.docx".to_string(), DocumentFormat::Docx, bytes);

    let content = DocxAdapter
        .extract(&document.bytes, &document)
        .await
        .expect("re-extraction should succeed");

    let ExtractedContent::PlainText(text) = content else {
        panic!("expected plain text");
    };
    assert!(text.contains("AI Generated Report"));
    assert!(text.contains("First finding."));
    assert!(text.contains("Second finding."));
}
