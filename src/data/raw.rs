/// Unvalidated table of string cells, as uploaded or fetched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    headers: Vec<String>,
    records: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, records: Vec<Vec<String>>) -> Self {
        Self { headers, records }
    }

    /// Build a table from string slices. Handy for fixtures.
    pub fn from_rows(headers: &[&str], rows: &[Vec<String>]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            records: rows.to_vec(),
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[Vec<String>] {
        &self.records
    }

    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    /// Index of a column by exact (case-sensitive) name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell at `row` in column `index`; short records read as empty cells.
    pub fn cell(&self, row: usize, index: usize) -> &str {
        self.records
            .get(row)
            .and_then(|record| record.get(index))
            .map(String::as_str)
            .unwrap_or("")
    }
}
