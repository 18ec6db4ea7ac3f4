mod docx_exporter;

pub use docx_exporter::DocxExporter;
