use tdorm_core::{schema::Record, stmt::Value};

use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};

/// Column names of a result set, with a lookup from name to position.
///
/// When a name appears more than once, lookups resolve to the last
/// occurrence.
#[derive(Debug, Clone, Default)]
pub struct Columns {
    names: Vec<String>,
    positions: IndexMap<String, usize>,
}

/// A type that can be built from one result row.
///
/// Implemented by `#[derive(Record)]` and by the open map containers, which
/// keep every column as its raw [`Value`].
pub trait FromRow: Sized {
    fn from_row(columns: &Columns, row: Vec<Value>) -> Self;
}

impl Columns {
    pub fn new(names: Vec<String>) -> Self {
        let positions = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();

        Self { names, positions }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Position of the column named `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }
}

/// Loads a row into a default-initialized record.
///
/// Each field with a `COLUMN` setting that names one of the result columns is
/// coerced from that column's value. Every other field keeps its default.
pub fn load_record<R: Record + Default>(columns: &Columns, row: Vec<Value>) -> R {
    let mut record = R::default();

    for field in R::descriptor().columns() {
        let Some(column) = field.annotation.column() else {
            continue;
        };

        let Some(value) = columns.position(&column).and_then(|i| row.get(i)) else {
            continue;
        };

        record.load_field(field.index, value.clone());
    }

    record
}

fn pairs(columns: &Columns, row: Vec<Value>) -> impl Iterator<Item = (String, Value)> + '_ {
    columns.names().iter().cloned().zip(row)
}

impl FromRow for IndexMap<String, Value> {
    fn from_row(columns: &Columns, row: Vec<Value>) -> Self {
        pairs(columns, row).collect()
    }
}

impl FromRow for HashMap<String, Value> {
    fn from_row(columns: &Columns, row: Vec<Value>) -> Self {
        pairs(columns, row).collect()
    }
}

impl FromRow for BTreeMap<String, Value> {
    fn from_row(columns: &Columns, row: Vec<Value>) -> Self {
        pairs(columns, row).collect()
    }
}

/// The raw row, in column order.
impl FromRow for Vec<Value> {
    fn from_row(_columns: &Columns, row: Vec<Value>) -> Self {
        row
    }
}
