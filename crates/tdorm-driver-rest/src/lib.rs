mod config;
pub use config::Config;

mod response;
pub use response::{decode_response, Column, Response};

mod value;
pub use value::ColumnType;

use tdorm_core::{
    async_trait,
    driver::{Connection, Driver, Rows},
    Error, Result,
};
use url::Url;

/// Statement used to check that the server is reachable.
const PING: &str = "SELECT SERVER_VERSION()";

/// Driver for TDengine's REST interface (`taosAdapter`).
#[derive(Debug)]
pub struct Rest {
    config: Config,
}

impl Rest {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a driver from a DSN or URL. See [`Config`] for the accepted
    /// forms.
    pub fn from_dsn(dsn: &str) -> Result<Self> {
        Ok(Self::new(Config::parse(dsn)?))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl Driver for Rest {
    async fn connect(&self) -> Result<Box<dyn Connection>> {
        let client = reqwest::Client::builder().build().map_err(Error::driver)?;

        Ok(Box::new(RestConnection {
            client,
            endpoint: self.config.endpoint()?,
            user: self.config.user.clone(),
            password: self.config.password.clone(),
        }))
    }
}

/// An HTTP session against one `/rest/sql` endpoint.
pub struct RestConnection {
    client: reqwest::Client,
    endpoint: Url,
    user: String,
    password: String,
}

impl RestConnection {
    async fn post(&self, sql: &str) -> Result<Response> {
        tracing::trace!(endpoint = %self.endpoint, "POST statement");

        let response = self
            .client
            .post(self.endpoint.clone())
            .basic_auth(&self.user, Some(&self.password))
            .body(sql.to_string())
            .send()
            .await
            .map_err(Error::driver)?;

        let status = response.status();
        let body = response.bytes().await.map_err(Error::driver)?;

        match decode_response(&body) {
            Ok(response) => Ok(response),
            // An error page from a proxy or the adapter itself
            Err(err) if err.is_invalid_result() && !status.is_success() => {
                Err(Error::driver(RestError::Status(status)))
            }
            Err(err) => Err(err),
        }
    }
}

#[async_trait]
impl Connection for RestConnection {
    async fn exec(&mut self, sql: &str) -> Result<u64> {
        self.post(sql).await?.affected_rows()
    }

    async fn query(&mut self, sql: &str) -> Result<Rows> {
        Ok(self.post(sql).await?.into_rows())
    }

    async fn ping(&mut self) -> Result<()> {
        self.post(PING).await.map(|_| ())
    }
}

impl std::fmt::Debug for RestConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestConnection")
            .field("endpoint", &self.endpoint.as_str())
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

/// Failures reported by the REST interface.
#[derive(Debug)]
pub enum RestError {
    /// The server rejected the statement.
    Server { code: i64, desc: String },

    /// The HTTP request failed without a decodable body.
    Status(reqwest::StatusCode),
}

impl std::error::Error for RestError {}

impl std::fmt::Display for RestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RestError::Server { code, desc } => {
                write!(f, "server returned error code {code}: {desc}")
            }
            RestError::Status(status) => write!(f, "HTTP request failed with status {status}"),
        }
    }
}
