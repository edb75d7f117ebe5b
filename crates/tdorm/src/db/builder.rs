use super::{Connect, Db};
use crate::{driver::Driver, Result};

#[derive(Debug, Default)]
pub struct Builder {
    log_statements: bool,
}

impl Builder {
    /// Log every statement sent through the connection.
    ///
    /// Successful statements are emitted at `debug` level with the SQL text
    /// and affected row count; failures at `warn` level.
    pub fn log_statements(&mut self, enabled: bool) -> &mut Self {
        self.log_statements = enabled;
        self
    }

    pub async fn connect(&mut self, dsn: &str) -> Result<Db> {
        self.build(Connect::new(dsn)?).await
    }

    /// Opens a connection with `driver` and checks that the server answers.
    pub async fn build(&mut self, driver: impl Driver) -> Result<Db> {
        let mut connection = driver.connect().await?;
        connection.ping().await?;

        if self.log_statements {
            tracing::debug!(?driver, "connected");
        }

        Ok(Db::new(connection, self.log_statements))
    }
}
