mod composite_extractor;
mod csv_adapter;
mod docx_adapter;
mod mock_extractor;
mod pdf_adapter;
mod plain_text_adapter;
mod text_sanitizer;
mod vcf_adapter;
mod xlsx_adapter;

pub use composite_extractor::CompositeExtractor;
pub use csv_adapter::CsvAdapter;
pub use docx_adapter::DocxAdapter;
pub use mock_extractor::MockExtractor;
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::PlainTextAdapter;
pub use text_sanitizer::sanitize_extracted_text;
pub use vcf_adapter::VcfAdapter;
pub use xlsx_adapter::XlsxAdapter;
