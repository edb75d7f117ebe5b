use pretty_assertions::assert_eq;
use tdorm::{Db, Value};
use tests::*;

#[tokio::test]
async fn build_pings_the_server() {
    let driver = MockDriver::new();
    let _db = Db::builder().build(driver.clone()).await.unwrap();

    assert_eq!(driver.exec_log().ops(), [DriverOp::Ping]);
}

#[tokio::test]
async fn execute() {
    let driver = MockDriver::new();
    driver.reply(Reply::Affected(3));
    let db = setup(&driver).await;

    let affected = db
        .execute("DELETE FROM meters WHERE ts < ?", &[Value::I64(1_700_000_000_000)])
        .await
        .unwrap();

    assert_eq!(affected, 3);
    assert_eq!(
        driver.exec_log().ops(),
        [DriverOp::Exec(
            "DELETE FROM meters WHERE ts < 1700000000000".to_string()
        )]
    );
}

#[tokio::test]
async fn ping() {
    let driver = MockDriver::new();
    let db = setup(&driver).await;

    db.ping().await.unwrap();
    assert_eq!(driver.exec_log().ops(), [DriverOp::Ping]);
}

#[tokio::test]
async fn close() {
    let driver = MockDriver::new();
    let db = setup(&driver).await;
    let other = db.clone();

    db.close().await.unwrap();
    // Closing twice is fine
    db.close().await.unwrap();

    let err = assert_err!(other.execute("SELECT 1", &[]).await);
    assert!(err.is_usage());
    assert_eq!(err.to_string(), "connection is closed");

    assert_err!(db.ping().await);
    assert!(driver.exec_log().is_empty());
}

#[tokio::test]
async fn clones_share_the_connection() {
    let driver = MockDriver::new();
    let db = setup(&driver).await;

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let db = db.clone();
            tokio::spawn(async move { db.execute(&format!("SELECT {i}"), &[]).await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let mut statements = driver.exec_log().statements();
    statements.sort();
    assert_eq!(statements, ["SELECT 0", "SELECT 1", "SELECT 2", "SELECT 3"]);
}

#[tokio::test]
async fn statement_logging_is_per_connection() {
    let driver = MockDriver::new();

    let quiet = Db::builder().build(driver.clone()).await.unwrap();
    let loud = Db::builder()
        .log_statements(true)
        .build(driver.clone())
        .await
        .unwrap();

    quiet.execute("SELECT 1", &[]).await.unwrap();
    loud.execute("SELECT 2", &[]).await.unwrap();

    assert_eq!(driver.exec_log().statements(), ["SELECT 1", "SELECT 2"]);
    assert!(format!("{loud:?}").contains("log_statements: true"));
    assert!(format!("{quiet:?}").contains("log_statements: false"));
}

#[tokio::test]
async fn connect_rejects_native_dsn() {
    let err = assert_err!(Db::connect("root:taosdata@tcp(localhost:6030)/power").await);

    assert!(err.is_invalid_connection_url());
    assert_eq!(err.to_string(), "invalid connection URL: dsn not found @http");
}

#[test]
fn db_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + Clone>() {}
    assert_send_sync::<Db>();
}
