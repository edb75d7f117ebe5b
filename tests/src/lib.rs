pub use exec_log::ExecLog;

mod mock_driver;
pub use mock_driver::{DriverOp, MockDriver, Reply};

pub use std_util::*;

use tdorm::Db;

/// Connects a `Db` to `driver`. The connection handshake is dropped from the
/// log so tests only see their own statements.
pub async fn setup(driver: &MockDriver) -> Db {
    let db = Db::builder()
        .log_statements(true)
        .build(driver.clone())
        .await
        .unwrap();

    driver.exec_log().clear();
    db
}
