use crate::{stmt::Value, Result};

use std::fmt;

/// The result set of a query: column names plus rows of raw values aligned
/// to them. Rows are yielded one at a time and may fail individually.
pub struct Rows {
    columns: Vec<String>,
    rows: Box<dyn Iterator<Item = Result<Vec<Value>>> + Send>,
}

impl Rows {
    pub fn new<I>(columns: Vec<String>, rows: I) -> Self
    where
        I: IntoIterator<Item = Vec<Value>>,
        I::IntoIter: Send + 'static,
    {
        Self::from_results(columns, rows.into_iter().map(Ok))
    }

    /// Builds a result set whose rows are decoded lazily and may fail.
    pub fn from_results<I>(columns: Vec<String>, rows: I) -> Self
    where
        I: IntoIterator<Item = Result<Vec<Value>>>,
        I::IntoIter: Send + 'static,
    {
        Self {
            columns,
            rows: Box::new(rows.into_iter()),
        }
    }

    pub fn empty(columns: Vec<String>) -> Self {
        Self::new(columns, std::iter::empty())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Drains the remaining rows, returning the first error encountered.
    pub fn collect_rows(self) -> Result<Vec<Vec<Value>>> {
        self.collect()
    }
}

impl Iterator for Rows {
    type Item = Result<Vec<Value>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.rows.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl fmt::Debug for Rows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rows")
            .field("columns", &self.columns)
            .finish_non_exhaustive()
    }
}
