use async_trait::async_trait;

use crate::application::ports::{ContentExtractor, ExtractError};
use crate::domain::{DocumentFormat, ExtractedContent, Table, UploadedDocument};

/// Column name used when a VCF carries no recognizable header line. The
/// fallback keeps malformed files previewable instead of failing outright.
const FALLBACK_COLUMN: &str = "raw_line";

/// Parses VCF uploads. `##` lines are metadata and discarded. The header
/// comes from the first `#CHROM` line (leading `#` stripped) or, absent
/// that, from the first remaining `#`-prefixed line. Data rows split on tab;
/// rows with fewer fields than the header are dropped, rows with more are
/// truncated.
pub struct VcfAdapter;

#[async_trait]
impl ContentExtractor for VcfAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract(
        &self,
        data: &[u8],
        document: &UploadedDocument,
    ) -> Result<ExtractedContent, ExtractError> {
        if document.format != DocumentFormat::Vcf {
            return Err(ExtractError::UnsupportedFormat(
                document.format.as_extension().to_string(),
            ));
        }

        let text = String::from_utf8_lossy(data);
        let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();

        let header = lines
            .iter()
            .find(|line| line.starts_with("#CHROM"))
            .or_else(|| {
                lines
                    .iter()
                    .find(|line| line.starts_with('#') && !line.starts_with("##"))
            })
            .map(|line| {
                line.trim_start_matches('#')
                    .split('\t')
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            });

        let data_lines = lines.iter().filter(|line| !line.starts_with('#'));

        let table = match header {
            Some(columns) => {
                let mut table = Table::new(columns);
                let mut dropped = 0usize;
                for line in data_lines {
                    let fields: Vec<String> = line.split('\t').map(str::to_string).collect();
                    if !table.push_row_strict(fields) {
                        dropped += 1;
                    }
                }
                if dropped > 0 {
                    tracing::warn!(dropped, "dropped VCF rows shorter than the header");
                }
                table
            }
            None => {
                let mut table = Table::new(vec![FALLBACK_COLUMN.to_string()]);
                for line in data_lines {
                    table.push_row_padded(vec![line.to_string()]);
                }
                table
            }
        };

        tracing::info!(row_count = table.row_count(), "VCF extraction complete");

        Ok(ExtractedContent::Table(table))
    }
}
