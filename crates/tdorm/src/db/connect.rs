use crate::{
    driver::{Connection, Driver},
    Error, Result,
};

/// Selects a driver from a connection string.
///
/// `user:password@http(host:port)/database` and its `https` counterpart, as
/// well as `http://` and `https://` URLs, connect through the REST interface.
#[derive(Debug)]
pub struct Connect {
    driver: Box<dyn Driver>,
}

impl Connect {
    pub fn new(dsn: &str) -> Result<Self> {
        if !is_rest(dsn) {
            return Err(Error::invalid_connection_url("dsn not found @http"));
        }

        Ok(Self { driver: rest(dsn)? })
    }
}

#[crate::async_trait]
impl Driver for Connect {
    async fn connect(&self) -> Result<Box<dyn Connection>> {
        self.driver.connect().await
    }
}

fn is_rest(dsn: &str) -> bool {
    dsn.contains("@http") || dsn.starts_with("http://") || dsn.starts_with("https://")
}

#[cfg(feature = "rest")]
fn rest(dsn: &str) -> Result<Box<dyn Driver>> {
    Ok(Box::new(tdorm_driver_rest::Rest::from_dsn(dsn)?))
}

#[cfg(not(feature = "rest"))]
fn rest(_dsn: &str) -> Result<Box<dyn Driver>> {
    Err(Error::invalid_connection_url("`rest` feature not enabled"))
}
