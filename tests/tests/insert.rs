use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use tdorm::{Record, TableName};
use tests::*;

#[derive(Debug, Default, Clone, Record)]
#[record(table_name)]
struct Meter {
    #[sql("column:ts")]
    ts: DateTime<Utc>,

    #[sql("column:current")]
    current: f32,

    #[sql("column:voltage")]
    voltage: i32,

    #[sql("-")]
    cache: String,

    #[sql("column:location;TAG")]
    location: String,

    #[td("column:group_id;TAG")]
    group_id: i32,
}

impl TableName for Meter {
    fn table_name(&self) -> String {
        format!("device_{}", self.location)
    }
}

#[derive(Debug, Default, Record)]
struct CpuUsage {
    #[sql("column:ts")]
    ts: i64,

    #[sql("column:percent")]
    percent: f64,
}

fn meter(location: &str, ms: i64, voltage: i32) -> Meter {
    Meter {
        ts: DateTime::from_timestamp_millis(ms).unwrap(),
        current: 19.1,
        voltage,
        cache: "not persisted".to_string(),
        location: location.to_string(),
        group_id: 1,
    }
}

#[tokio::test]
async fn insert_with_tags() {
    let driver = MockDriver::new();
    driver.reply(Reply::Affected(1));
    let db = setup(&driver).await;

    let affected = db
        .insert("meters", &meter("1000", 1_700_000_000_000, 290))
        .await
        .unwrap();

    assert_eq!(affected, 1);
    assert_eq!(
        driver.exec_log().ops(),
        [DriverOp::Exec(
            "INSERT INTO device_1000 USING meters TAGS ('1000',1) VALUES (1700000000000,19.1,290)"
                .to_string()
        )]
    );
}

#[tokio::test]
async fn ignored_fields_are_not_written() {
    let driver = MockDriver::new();
    let db = setup(&driver).await;

    db.insert("meters", &meter("1000", 1_700_000_000_000, 290))
        .await
        .unwrap();

    assert!(!driver.exec_log().last_statement().contains("not persisted"));
}

#[tokio::test]
async fn insert_batch() {
    let driver = MockDriver::new();
    driver.reply(Reply::Affected(2));
    let db = setup(&driver).await;

    let affected = db
        .insert_batch(
            "meters",
            &[
                meter("1000", 1_700_000_000_000, 290),
                meter("1001", 1_700_000_001_000, 291),
            ],
        )
        .await
        .unwrap();

    assert_eq!(affected, 2);
    assert_eq!(
        driver.exec_log().last_statement(),
        "INSERT INTO \
         device_1000 USING meters TAGS ('1000',1) VALUES (1700000000000,19.1,290) \
         device_1001 USING meters TAGS ('1001',1) VALUES (1700000001000,19.1,291)"
    );
}

#[tokio::test]
async fn empty_batch_is_not_sent() {
    let driver = MockDriver::new();
    let db = setup(&driver).await;

    let err = assert_err!(db.insert_batch::<Meter>("meters", &[]).await);

    assert!(err.is_usage());
    assert!(err.is_empty_batch());
    assert!(driver.exec_log().is_empty());
}

#[tokio::test]
async fn record_without_tags() {
    let driver = MockDriver::new();
    let db = setup(&driver).await;

    let usage = CpuUsage {
        ts: 1_700_000_000_000,
        percent: 12.5,
    };
    db.insert("cpu", &usage).await.unwrap();

    assert_eq!(
        driver.exec_log().last_statement(),
        "INSERT INTO cpu_usage VALUES (1700000000000,12.5)"
    );
}

#[tokio::test]
async fn empty_super_table() {
    let driver = MockDriver::new();
    let db = setup(&driver).await;

    let err = assert_err!(db.insert("", &meter("1000", 0, 0)).await);

    assert!(err.is_usage());
    assert!(driver.exec_log().is_empty());
}

#[tokio::test]
async fn empty_table_name() {
    let driver = MockDriver::new();
    let db = setup(&driver).await;

    #[derive(Default, Record)]
    #[record(table = "")]
    struct Nameless {
        #[sql("column:v")]
        v: i32,
    }

    let err = assert_err!(db.insert("meters", &Nameless { v: 1 }).await);
    assert!(err.is_usage());
    assert_eq!(
        err.to_string(),
        "table name resolved to an empty string; record=Nameless"
    );
}

#[tokio::test]
async fn driver_errors_pass_through() {
    let driver = MockDriver::new();
    driver.reply(Reply::Error(tdorm::err!("write rejected")));
    let db = setup(&driver).await;

    let err = assert_err!(db.insert("meters", &meter("1000", 0, 0)).await);
    assert_eq!(err.to_string(), "write rejected");
}
