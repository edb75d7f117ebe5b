use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use tdorm::{Json, Record, Value};
use tests::*;

#[derive(Debug, Default, Record)]
struct SmartMeter {
    #[sql("column:ts")]
    ts: i64,

    // `td` wins on key collisions
    #[sql("column:volts")]
    #[td("column:voltage")]
    voltage: i32,

    #[sql("column:zone;TAG")]
    #[td("column:location")]
    location: String,

    #[td("-")]
    scratch: Vec<u8>,
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct Labels {
    vendor: String,
    rev: u32,
}

#[derive(Debug, Default, Record)]
#[record(table = "d1001")]
struct Sample {
    #[sql("column:ts")]
    ts: i64,

    #[sql("column:labels")]
    labels: Json<Labels>,

    #[sql("column:reading")]
    reading: Option<f64>,
}

#[test]
fn default_table_name_is_snake_case() {
    assert_eq!(SmartMeter::default().table_name(), "smart_meter");
}

#[test]
fn fixed_table_name() {
    assert_eq!(Sample::default().table_name(), "d1001");
}

#[test]
fn descriptor() {
    let descriptor = SmartMeter::descriptor();

    assert_eq!(descriptor.name, "SmartMeter");

    let columns: Vec<_> = descriptor.columns().map(|field| field.name).collect();
    assert_eq!(columns, ["ts", "voltage", "location"]);

    let tags: Vec<_> = descriptor.tags().map(|field| field.name).collect();
    assert_eq!(tags, ["location"]);

    let voltage = descriptor.field_by_column("voltage").unwrap();
    assert_eq!(voltage.name, "voltage");
    assert!(descriptor.field_by_column("volts").is_none());
}

#[tokio::test]
async fn dialect_override_is_used_for_insert() {
    let driver = MockDriver::new();
    let db = setup(&driver).await;

    let meter = SmartMeter {
        ts: 1_700_000_000_000,
        voltage: 220,
        location: "north".to_string(),
        scratch: vec![1, 2, 3],
    };
    db.insert("meters", &meter).await.unwrap();

    assert_eq!(
        driver.exec_log().last_statement(),
        "INSERT INTO smart_meter USING meters TAGS ('north') VALUES (1700000000000,220)"
    );
}

#[tokio::test]
async fn json_and_optional_fields() {
    let driver = MockDriver::new();
    let db = setup(&driver).await;

    let sample = Sample {
        ts: 1_700_000_000_000,
        labels: Json(Labels {
            vendor: "acme".to_string(),
            rev: 2,
        }),
        reading: None,
    };
    db.insert("samples", &sample).await.unwrap();

    assert_eq!(
        driver.exec_log().last_statement(),
        r#"INSERT INTO d1001 VALUES (1700000000000,'{"rev":2,"vendor":"acme"}',NULL)"#
    );

    driver.reply_rows(
        &["ts", "labels", "reading"],
        vec![vec![
            Value::I64(1_700_000_000_000),
            Value::from(r#"{"vendor":"acme","rev":3}"#),
            Value::F64(0.5),
        ]],
    );

    let mut loaded = Sample::default();
    db.query_first(&mut loaded, "SELECT * FROM d1001", &[])
        .await
        .unwrap();

    assert_eq!(loaded.labels.rev, 3);
    assert_eq!(loaded.reading, Some(0.5));
}
