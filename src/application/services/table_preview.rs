use crate::domain::Table;

/// Column names worth pointing out to the user when a genomic dataset is
/// previewed. Matching is case-insensitive and advisory only; it never
/// filters data.
const COLUMN_VOCABULARY: [&str; 10] = [
    "gene",
    "genes",
    "symbol",
    "gene_symbol",
    "chrom",
    "chromosome",
    "pos",
    "position",
    "ref",
    "alt",
];

const MAX_DETECTED_COLUMNS: usize = 6;

/// Bounded view of a table: the first `limit` rows plus a heuristic
/// annotation of recognizable genomic columns. The CSV serialization of the
/// preview is what gets embedded into prompts.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePreview {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    total_rows: usize,
    detected_columns: Vec<String>,
}

impl TablePreview {
    pub fn of(table: &Table, limit: usize) -> Self {
        let rows = table.rows().iter().take(limit).cloned().collect();
        Self {
            columns: table.columns().to_vec(),
            rows,
            total_rows: table.row_count(),
            detected_columns: detect_columns(table.columns()),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Row count of the underlying table, not of the bounded preview.
    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    pub fn detected_columns(&self) -> &[String] {
        &self.detected_columns
    }

    /// Serializes the preview (headers plus bounded rows) as CSV.
    pub fn to_csv(&self) -> String {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(&self.columns)
            .expect("writing to an in-memory buffer cannot fail");
        for row in &self.rows {
            writer
                .write_record(row)
                .expect("writing to an in-memory buffer cannot fail");
        }
        let bytes = writer
            .into_inner()
            .expect("flushing an in-memory buffer cannot fail");
        String::from_utf8(bytes).expect("csv output of UTF-8 records is UTF-8")
    }
}

fn detect_columns(columns: &[String]) -> Vec<String> {
    columns
        .iter()
        .filter(|name| {
            let lowered = name.to_lowercase();
            COLUMN_VOCABULARY.contains(&lowered.as_str())
        })
        .take(MAX_DETECTED_COLUMNS)
        .cloned()
        .collect()
}
