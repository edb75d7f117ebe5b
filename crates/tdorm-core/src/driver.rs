mod rows;
pub use rows::Rows;

use crate::{async_trait, Result};

use std::fmt::Debug;

/// Opens connections to a database.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Establishes a new connection.
    async fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// A single open connection.
///
/// Statements are plain SQL text; arguments have already been rendered as
/// literals by the caller.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Executes a statement, returning the number of rows affected.
    async fn exec(&mut self, sql: &str) -> Result<u64>;

    /// Executes a query, returning its column names and rows.
    async fn query(&mut self, sql: &str) -> Result<Rows>;

    /// Checks that the server is reachable.
    async fn ping(&mut self) -> Result<()>;
}
