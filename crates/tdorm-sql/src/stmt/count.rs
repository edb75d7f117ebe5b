/// Counts the rows returned by an arbitrary query by wrapping it in a
/// sub-select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Count {
    /// The inner query, without a trailing `;`.
    pub query: String,
}

impl Count {
    /// Name of the column holding the count.
    pub const COLUMN: &'static str = "total_count";

    /// Alias given to the wrapped query.
    pub const ALIAS: &'static str = "_TEMPORARY_TABLE_COUNT";

    pub fn new(query: impl Into<String>) -> Self {
        let query = query.into();
        let trimmed = query.trim_end().trim_end_matches(';').trim_end();

        Self {
            query: trimmed.to_string(),
        }
    }
}
