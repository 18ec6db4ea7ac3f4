/// A single uploaded file. Lives for one request/response cycle and is never
/// persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedDocument {
    pub filename: String,
    pub format: DocumentFormat,
    pub bytes: Vec<u8>,
}

/// Closed set of accepted upload formats, decided once from the filename
/// extension at the upload boundary. Anything else is rejected there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Pdf,
    Txt,
    Docx,
    Csv,
    Xlsx,
    Vcf,
}

impl DocumentFormat {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "txt" => Some(Self::Txt),
            "docx" => Some(Self::Docx),
            "csv" => Some(Self::Csv),
            "xlsx" => Some(Self::Xlsx),
            "vcf" => Some(Self::Vcf),
            _ => None,
        }
    }

    pub fn from_filename(filename: &str) -> Option<Self> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;
        Self::from_extension(extension)
    }

    pub fn as_extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Txt => "txt",
            Self::Docx => "docx",
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
            Self::Vcf => "vcf",
        }
    }

    /// Formats that extract into a [`crate::domain::Table`] rather than plain text.
    pub fn is_tabular(&self) -> bool {
        matches!(self, Self::Csv | Self::Xlsx | Self::Vcf)
    }
}

impl UploadedDocument {
    pub fn new(filename: String, format: DocumentFormat, bytes: Vec<u8>) -> Self {
        Self {
            filename,
            format,
            bytes,
        }
    }
}
