use genolens::application::ports::ContentExtractor;
use genolens::domain::{DocumentFormat, ExtractedContent, UploadedDocument};
use genolens::infrastructure::extraction::VcfAdapter;

fn vcf_document(content: &str) -> UploadedDocument {
    UploadedDocument::new(
        "variants.vcf".to_string(),
        DocumentFormat::Vcf,
        content.as_bytes().to_vec(),
    )
}

async fn extract_table(content: &str) -> genolens::domain::Table {
    let document = vcf_document(content);
    match VcfAdapter
        .extract(&document.bytes, &document)
        .await
        .expect("extraction should succeed")
    {
        ExtractedContent::Table(table) => table,
        ExtractedContent::PlainText(_) => panic!("expected tabular content"),
    }
}

#[tokio::test]
async fn given_chrom_header_and_data_line_when_parsing_then_columns_and_row_match() {
    let table = extract_table("#CHROM\tPOS\tREF\tALT\n1\t100\tA\tG\n").await;

    assert_eq!(table.columns(), ["CHROM", "POS", "REF", "ALT"]);
    assert_eq!(table.rows(), [["1", "100", "A", "G"]]);
}

#[tokio::test]
async fn given_metadata_lines_when_parsing_then_they_are_discarded() {
    let table = extract_table(
        "##fileformat=VCFv4.2\n##source=test\n#CHROM\tPOS\tREF\tALT\n1\t100\tA\tG\n",
    )
    .await;

    assert_eq!(table.columns(), ["CHROM", "POS", "REF", "ALT"]);
    assert_eq!(table.row_count(), 1);
}

#[tokio::test]
async fn given_no_header_line_when_parsing_then_falls_back_to_raw_line_column() {
    let table = extract_table("##meta\nrandomline1\nrandomline2\n").await;

    assert_eq!(table.columns(), ["raw_line"]);
    assert_eq!(table.rows(), [["randomline1"], ["randomline2"]]);
}

#[tokio::test]
async fn given_short_and_long_rows_when_parsing_then_short_dropped_and_long_truncated() {
    let table = extract_table(
        "#CHROM\tPOS\tREF\tALT\n1\t100\tA\tG\n2\t200\nX\t300\tC\tT\textra\textra2\n",
    )
    .await;

    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows()[0], ["1", "100", "A", "G"]);
    assert_eq!(table.rows()[1], ["X", "300", "C", "T"]);
}

#[tokio::test]
async fn given_header_but_no_data_when_parsing_then_table_is_empty_with_columns() {
    let table = extract_table("##meta\n#CHROM\tPOS\tREF\tALT\n").await;

    assert_eq!(table.columns(), ["CHROM", "POS", "REF", "ALT"]);
    assert!(table.is_empty());
}

#[tokio::test]
async fn given_wrong_format_when_extracting_then_returns_unsupported() {
    let document = UploadedDocument::new(
        "data.csv".to_string(),
        DocumentFormat::Csv,
        b"a,b\n1,2\n".to_vec(),
    );

    let result = VcfAdapter.extract(&document.bytes, &document).await;

    assert!(matches!(
        result,
        Err(genolens::application::ports::ExtractError::UnsupportedFormat(_))
    ));
}
