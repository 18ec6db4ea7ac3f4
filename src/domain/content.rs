/// Content derived from exactly one uploaded document.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractedContent {
    PlainText(String),
    Table(Table),
}

/// Uniform row/column view of a tabular source. Every row has exactly
/// `columns.len()` fields; the extraction adapters enforce this by padding,
/// truncating, or dropping rows according to their source policy.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a row, truncating extra fields and padding missing ones with
    /// empty strings so the width invariant holds.
    pub fn push_row_padded(&mut self, mut row: Vec<String>) {
        row.truncate(self.columns.len());
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }

    /// Appends a row only if it carries at least `columns.len()` fields,
    /// truncating extra fields. Short rows are dropped. Returns whether the
    /// row was kept.
    pub fn push_row_strict(&mut self, mut row: Vec<String>) -> bool {
        if row.len() < self.columns.len() {
            return false;
        }
        row.truncate(self.columns.len());
        self.rows.push(row);
        true
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
