use super::Error;

/// Error raised when the library is called with arguments it cannot act on.
///
/// Usage errors are detected before any statement is sent to the database.
#[derive(Debug)]
pub(super) struct UsageError {
    kind: UsageErrorKind,
}

#[derive(Debug)]
enum UsageErrorKind {
    /// `insert` / `insert_batch` called with an empty super table name
    EmptySuperTable,

    /// A record's table name resolved to an empty string
    EmptyTableName { record: Box<str> },

    /// `insert_batch` called with no records
    EmptyBatch,

    /// `?` placeholders and supplied arguments disagree
    ArgumentCount { placeholders: usize, args: usize },

    /// The connection was closed with `Db::close`
    ConnectionClosed,
}

impl std::error::Error for UsageError {}

impl core::fmt::Display for UsageError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.kind {
            UsageErrorKind::EmptySuperTable => f.write_str("super table name is empty"),
            UsageErrorKind::EmptyTableName { record } => write!(
                f,
                "table name resolved to an empty string; record={record}"
            ),
            UsageErrorKind::EmptyBatch => {
                f.write_str("batch insert requires at least one record")
            }
            UsageErrorKind::ArgumentCount { placeholders, args } => write!(
                f,
                "statement has {placeholders} placeholder(s) but {args} argument(s) were supplied"
            ),
            UsageErrorKind::ConnectionClosed => f.write_str("connection is closed"),
        }
    }
}

impl Error {
    fn usage(kind: UsageErrorKind) -> Error {
        Error::from(super::ErrorKind::Usage(UsageError { kind }))
    }

    pub fn empty_super_table() -> Error {
        Error::usage(UsageErrorKind::EmptySuperTable)
    }

    pub fn empty_table_name(record: impl Into<String>) -> Error {
        Error::usage(UsageErrorKind::EmptyTableName {
            record: record.into().into(),
        })
    }

    pub fn empty_batch() -> Error {
        Error::usage(UsageErrorKind::EmptyBatch)
    }

    pub fn argument_count(placeholders: usize, args: usize) -> Error {
        Error::usage(UsageErrorKind::ArgumentCount { placeholders, args })
    }

    pub fn connection_closed() -> Error {
        Error::usage(UsageErrorKind::ConnectionClosed)
    }

    /// Returns `true` if this error was raised locally because of invalid
    /// arguments, before anything reached the transport.
    pub fn is_usage(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Usage(_))
    }

    /// Returns `true` if this error is an empty-batch usage error.
    pub fn is_empty_batch(&self) -> bool {
        matches!(
            self.kind(),
            super::ErrorKind::Usage(UsageError {
                kind: UsageErrorKind::EmptyBatch
            })
        )
    }
}
