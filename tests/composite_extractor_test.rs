use std::sync::Arc;

use genolens::application::ports::{ContentExtractor, ExtractError};
use genolens::domain::{DocumentFormat, ExtractedContent, UploadedDocument};
use genolens::infrastructure::extraction::{CompositeExtractor, CsvAdapter, PlainTextAdapter};

#[tokio::test]
async fn given_txt_document_when_extracting_then_delegates_to_text_adapter() {
    let extractor = CompositeExtractor::with_default_adapters(30);
    let document = UploadedDocument::new(
        "notes.txt".to_string(),
        DocumentFormat::Txt,
        b"some findings".to_vec(),
    );

    let content = extractor
        .extract(&document.bytes, &document)
        .await
        .expect("extraction should succeed");

    assert_eq!(
        content,
        ExtractedContent::PlainText("some findings".to_string())
    );
}

#[tokio::test]
async fn given_csv_document_when_extracting_then_delegates_to_csv_adapter() {
    let extractor = CompositeExtractor::with_default_adapters(30);
    let document = UploadedDocument::new(
        "counts.csv".to_string(),
        DocumentFormat::Csv,
        b"gene,count\nBRCA1,12\n".to_vec(),
    );

    let content = extractor
        .extract(&document.bytes, &document)
        .await
        .expect("extraction should succeed");

    let ExtractedContent::Table(table) = content else {
        panic!("expected tabular content");
    };
    assert_eq!(table.columns(), ["gene", "count"]);
}

#[tokio::test]
async fn given_unregistered_format_when_extracting_then_returns_unsupported() {
    let extractor = CompositeExtractor::new(vec![
        (
            DocumentFormat::Txt,
            Arc::new(PlainTextAdapter) as Arc<dyn ContentExtractor>,
        ),
        (DocumentFormat::Csv, Arc::new(CsvAdapter)),
    ]);
    let document = UploadedDocument::new(
        "variants.vcf".to_string(),
        DocumentFormat::Vcf,
        b"##meta\n".to_vec(),
    );

    let result = extractor.extract(&document.bytes, &document).await;

    assert!(matches!(result, Err(ExtractError::UnsupportedFormat(_))));
}
