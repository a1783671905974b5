mod parser;

pub use parser::parse_table;

use super::normalizer::Cell;

/// Shape of one published export: how many banner rows precede the header and which columns
/// are noise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    pub skip_rows: usize,
    pub drop_unnamed_columns: bool,
    pub excluded_columns: &'static [&'static str],
}

impl TableSpec {
    /// Candidate roster: a single "Training info" banner row sits above the header.
    pub const fn candidates() -> Self {
        Self {
            skip_rows: 1,
            drop_unnamed_columns: false,
            excluded_columns: &[],
        }
    }

    /// Open jobs: five banner rows, spacer columns and job-vacancy link columns.
    pub const fn jobs() -> Self {
        Self {
            skip_rows: 5,
            drop_unnamed_columns: true,
            excluded_columns: &["JV Link", "JV ID"],
        }
    }

    pub(crate) fn keeps_column(&self, header: &str) -> bool {
        if self.drop_unnamed_columns && (header.is_empty() || header.starts_with("Unnamed")) {
            return false;
        }
        !self.excluded_columns.contains(&header)
    }
}

/// Header names plus rows of trimmed cells; blank cells are stored as `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    pub(crate) fn new(headers: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = RowRef<'_>> {
        self.rows.iter().map(move |cells| RowRef {
            headers: &self.headers,
            cells,
        })
    }
}

/// Borrowed view of one row, addressed by column name.
#[derive(Debug, Clone, Copy)]
pub struct RowRef<'a> {
    headers: &'a [String],
    cells: &'a [Option<String>],
}

impl<'a> RowRef<'a> {
    /// Text of the first column named `column`, or `None` when the column is absent or blank.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let index = self.headers.iter().position(|header| header == column)?;
        self.cells.get(index).and_then(|cell| cell.as_deref())
    }

    pub fn cell(&self, column: &str) -> Cell<'a> {
        Cell::classify(self.get(column))
    }
}
