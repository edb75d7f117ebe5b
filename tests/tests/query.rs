use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use tdorm::{Record, Value};
use tests::*;

#[derive(Debug, Default, PartialEq, Record)]
#[record(table = "d1001")]
struct Reading {
    #[sql("column:ts")]
    ts: DateTime<Utc>,

    #[sql("column:voltage")]
    voltage: i32,

    #[sql("column:location;TAG")]
    location: String,

    #[sql("-")]
    note: String,

    // No `COLUMN` setting: never loaded
    #[sql("TAG")]
    group_id: i32,
}

fn ts(ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ms).unwrap()
}

#[tokio::test]
async fn query_into_maps() {
    let driver = MockDriver::new();
    driver.reply_rows(
        &["ts", "voltage"],
        vec![vec![Value::I64(1_700_000_000_000), Value::I32(290)]],
    );
    let db = setup(&driver).await;

    let mut rows: Vec<IndexMap<String, Value>> = vec![];
    db.query(&mut rows, "SELECT ts, voltage FROM meters", &[])
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0],
        IndexMap::from([
            ("ts".to_string(), Value::I64(1_700_000_000_000)),
            ("voltage".to_string(), Value::I32(290)),
        ])
    );
}

#[tokio::test]
async fn query_into_records() {
    let driver = MockDriver::new();
    driver.reply_rows(
        &["ts", "voltage", "location", "note", "group_id"],
        vec![
            vec![
                Value::Timestamp(ts(1_700_000_000_000)),
                Value::I32(290),
                Value::from("1000"),
                Value::from("ignored"),
                Value::I32(7),
            ],
            vec![
                Value::Timestamp(ts(1_700_000_001_000)),
                Value::I32(291),
                Value::from("1000"),
                Value::Null,
                Value::I32(7),
            ],
        ],
    );
    let db = setup(&driver).await;

    let mut readings: Vec<Reading> = vec![];
    db.query(&mut readings, "SELECT * FROM meters", &[])
        .await
        .unwrap();

    assert_eq!(
        readings,
        [
            Reading {
                ts: ts(1_700_000_000_000),
                voltage: 290,
                location: "1000".to_string(),
                ..Default::default()
            },
            Reading {
                ts: ts(1_700_000_001_000),
                voltage: 291,
                location: "1000".to_string(),
                ..Default::default()
            },
        ]
    );
}

#[tokio::test]
async fn query_appends_to_existing_rows() {
    let driver = MockDriver::new();
    driver.reply_rows(&["voltage"], vec![vec![Value::I32(1)], vec![Value::I32(2)]]);
    let db = setup(&driver).await;

    let mut rows = vec![Reading {
        voltage: 0,
        ..Default::default()
    }];
    db.query(&mut rows, "SELECT voltage FROM meters", &[])
        .await
        .unwrap();

    let voltages: Vec<_> = rows.iter().map(|r| r.voltage).collect();
    assert_eq!(voltages, [0, 1, 2]);
}

#[tokio::test]
async fn columns_are_coerced() {
    let driver = MockDriver::new();
    driver.reply_rows(
        &["ts", "voltage", "location"],
        vec![vec![
            Value::from("2023-11-14 22:13:20.000"),
            Value::from("123"),
            Value::I64(1000),
        ]],
    );
    let db = setup(&driver).await;

    let mut reading = Reading::default();
    db.query_first(&mut reading, "SELECT * FROM meters", &[])
        .await
        .unwrap();

    assert_eq!(reading.ts, ts(1_700_000_000_000));
    assert_eq!(reading.voltage, 123);
    // Only strings and JSON load into `String`
    assert_eq!(reading.location, "");
}

#[tokio::test]
async fn unparsable_values_load_as_zero() {
    let driver = MockDriver::new();
    driver.reply_rows(&["voltage"], vec![vec![Value::from("abc")]]);
    let db = setup(&driver).await;

    let mut reading = Reading {
        voltage: 42,
        ..Default::default()
    };
    db.query_first(&mut reading, "SELECT voltage FROM meters", &[])
        .await
        .unwrap();

    assert_eq!(reading.voltage, 0);
}

#[tokio::test]
async fn query_first_takes_the_first_row() {
    let driver = MockDriver::new();
    driver.reply_rows(&["voltage"], vec![vec![Value::I32(1)], vec![Value::I32(2)]]);
    let db = setup(&driver).await;

    let mut row: HashMap<String, Value> = HashMap::new();
    db.query_first(&mut row, "SELECT voltage FROM meters", &[])
        .await
        .unwrap();

    assert_eq!(row["voltage"], Value::I32(1));
}

#[tokio::test]
async fn query_first_without_rows_leaves_dest_untouched() {
    let driver = MockDriver::new();
    driver.reply_rows(&["voltage"], vec![]);
    let db = setup(&driver).await;

    let mut reading = Reading {
        voltage: 42,
        ..Default::default()
    };
    db.query_first(&mut reading, "SELECT voltage FROM meters WHERE 1 = 0", &[])
        .await
        .unwrap();

    assert_eq!(reading.voltage, 42);
}

#[tokio::test]
async fn arguments_are_bound() {
    let driver = MockDriver::new();
    let db = setup(&driver).await;

    let mut rows: Vec<Vec<Value>> = vec![];
    db.query(
        &mut rows,
        "SELECT * FROM meters WHERE location = ? AND voltage > ?",
        &[Value::from("it's"), Value::from(200)],
    )
    .await
    .unwrap();

    assert_eq!(
        driver.exec_log().last_statement(),
        r"SELECT * FROM meters WHERE location = 'it\'s' AND voltage > 200"
    );
}

#[tokio::test]
async fn argument_count_mismatch_is_not_sent() {
    let driver = MockDriver::new();
    let db = setup(&driver).await;

    let mut rows: Vec<Vec<Value>> = vec![];
    let err = assert_err!(
        db.query(
            &mut rows,
            "SELECT * FROM meters WHERE v = ?",
            &[Value::I32(1), Value::I32(2)],
        )
        .await
    );

    assert!(err.is_usage());
    assert!(driver.exec_log().is_empty());
}

#[tokio::test]
async fn statement_without_arguments_is_sent_as_written() {
    let driver = MockDriver::new();
    let db = setup(&driver).await;

    let mut rows: Vec<Vec<Value>> = vec![];
    db.query(&mut rows, "SELECT * FROM meters WHERE note = '?'", &[])
        .await
        .unwrap();

    assert_eq!(
        driver.exec_log().statements(),
        ["SELECT * FROM meters WHERE note = '?'"]
    );
}

#[tokio::test]
async fn cursor() {
    let driver = MockDriver::new();
    driver.reply_rows(&["voltage"], vec![vec![Value::I32(1)], vec![Value::I32(2)]]);
    let db = setup(&driver).await;

    let cursor = db
        .all::<Reading>("SELECT voltage FROM meters", &[])
        .await
        .unwrap();
    assert_eq!(cursor.columns().names(), ["voltage"]);

    let readings: Vec<Reading> = cursor.collect().unwrap();
    assert_eq!(readings.len(), 2);
    assert_eq!(readings[1].voltage, 2);
}
