mod builder;
mod connect;

pub use builder::Builder;
pub use connect::Connect;

use crate::{Columns, Cursor, Error, FromRow, Primitive, Record, Result, Value};

use tdorm_core::driver::{Connection, Rows};
use tdorm_sql::{interpolate, Count, Insert, Serializer, Statement};
use tokio::sync::Mutex;

use std::sync::Arc;

/// Shared state between all `Db` clones.
struct Shared {
    /// `None` once the handle has been closed.
    connection: Mutex<Option<Box<dyn Connection>>>,

    /// Emit every statement at `debug` level and transport failures at
    /// `warn` level.
    log_statements: bool,
}

/// A handle to one TDengine connection.
///
/// Clones share the connection. Statements issued through any clone are sent
/// one at a time.
#[derive(Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Connects with default settings. See [`Connect`] for the accepted DSN
    /// forms.
    pub async fn connect(dsn: &str) -> Result<Db> {
        Db::builder().connect(dsn).await
    }

    pub(crate) fn new(connection: Box<dyn Connection>, log_statements: bool) -> Db {
        Db {
            shared: Arc::new(Shared {
                connection: Mutex::new(Some(connection)),
                log_statements,
            }),
        }
    }

    /// Releases the connection. Every later call on this handle, or on any of
    /// its clones, fails with a usage error.
    pub async fn close(&self) -> Result<()> {
        let connection = self.shared.connection.lock().await.take();

        if connection.is_some() && self.shared.log_statements {
            tracing::debug!("connection closed");
        }

        Ok(())
    }

    /// Checks that the server is reachable.
    pub async fn ping(&self) -> Result<()> {
        let mut connection = self.shared.connection.lock().await;
        let connection = connection.as_mut().ok_or_else(Error::connection_closed)?;
        connection.ping().await
    }

    /// Executes a statement, binding `args` to its `?` placeholders, and
    /// returns the number of rows affected.
    pub async fn execute(&self, sql: &str, args: &[Value]) -> Result<u64> {
        let sql = interpolate(sql, args)?;
        self.exec_sql(&sql).await
    }

    /// Runs a query and returns a cursor over its rows.
    pub async fn all<T: FromRow>(&self, sql: &str, args: &[Value]) -> Result<Cursor<T>> {
        let sql = interpolate(sql, args)?;
        Ok(Cursor::new(self.query_sql(&sql).await?))
    }

    /// Runs a query and appends every row to `dest`, in result order.
    pub async fn query<T: FromRow>(
        &self,
        dest: &mut Vec<T>,
        sql: &str,
        args: &[Value],
    ) -> Result<()> {
        let mut cursor = self.all::<T>(sql, args).await?;

        while let Some(row) = cursor.next() {
            dest.push(row?);
        }

        Ok(())
    }

    /// Runs a query and stores its first row in `dest`.
    ///
    /// When the query returns no rows, `dest` is left as it was.
    pub async fn query_first<T: FromRow>(
        &self,
        dest: &mut T,
        sql: &str,
        args: &[Value],
    ) -> Result<()> {
        let mut cursor = self.all::<T>(sql, args).await?;

        if let Some(row) = cursor.next() {
            *dest = row?;
        }

        Ok(())
    }

    /// Counts the rows `sql` would return.
    pub async fn count(&self, sql: &str, args: &[Value]) -> Result<i64> {
        let sql = interpolate(sql, args)?;
        let statement = Serializer::tdengine().serialize(&Count::new(&sql).into());

        let mut total = TotalCount::default();
        self.query_first(&mut total, &statement, &[]).await?;

        Ok(total.0)
    }

    /// Inserts one record into its sub-table of `super_table`.
    pub async fn insert<R: Record>(&self, super_table: &str, record: &R) -> Result<u64> {
        let statement = Insert::single(super_table, record)?;
        self.exec_statement(statement.into()).await
    }

    /// Inserts all `records` with a single statement.
    pub async fn insert_batch<R: Record>(&self, super_table: &str, records: &[R]) -> Result<u64> {
        let statement = Insert::batch(super_table, records)?;
        self.exec_statement(statement.into()).await
    }

    async fn exec_statement(&self, statement: Statement) -> Result<u64> {
        let sql = Serializer::tdengine().serialize(&statement);
        self.exec_sql(&sql).await
    }

    async fn exec_sql(&self, sql: &str) -> Result<u64> {
        let mut connection = self.shared.connection.lock().await;
        let connection = connection.as_mut().ok_or_else(Error::connection_closed)?;

        let res = connection.exec(sql).await;

        if self.shared.log_statements {
            match &res {
                Ok(rows_affected) => tracing::debug!(sql, rows_affected, "exec"),
                Err(error) => tracing::warn!(sql, %error, "exec failed"),
            }
        }

        res
    }

    async fn query_sql(&self, sql: &str) -> Result<Rows> {
        let mut connection = self.shared.connection.lock().await;
        let connection = connection.as_mut().ok_or_else(Error::connection_closed)?;

        let res = connection.query(sql).await;

        if self.shared.log_statements {
            match &res {
                Ok(rows) => tracing::debug!(sql, columns = rows.columns().len(), "query"),
                Err(error) => tracing::warn!(sql, %error, "query failed"),
            }
        }

        res
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("log_statements", &self.shared.log_statements)
            .finish_non_exhaustive()
    }
}

/// The single-column row produced by a [`Count`] statement.
#[derive(Debug, Default)]
struct TotalCount(i64);

impl FromRow for TotalCount {
    fn from_row(columns: &Columns, mut row: Vec<Value>) -> Self {
        match columns.position(Count::COLUMN) {
            Some(i) if i < row.len() => TotalCount(i64::load(row.swap_remove(i))),
            _ => TotalCount::default(),
        }
    }
}
