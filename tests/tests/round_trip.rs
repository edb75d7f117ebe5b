use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use tdorm::{Record, TableName, Value};
use tests::*;

#[derive(Debug, Default, Clone, PartialEq, Record)]
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

    #[sql("column:group_id;TAG")]
    group_id: i32,
}

impl TableName for Meter {
    fn table_name(&self) -> String {
        format!("device_{}", self.location)
    }
}

/// Columns a `SELECT *` on the super table returns: data columns, then tags.
const COLUMNS: [&str; 5] = ["ts", "current", "voltage", "location", "group_id"];

/// The row a server would store for an emitted `INSERT ... USING`, rebuilt
/// from the statement's literals.
fn stored_row(insert: &str) -> Vec<Value> {
    let tags = between(insert, " TAGS (", ")");
    let values = between(insert, " VALUES (", ")");

    values.split(',').chain(tags.split(',')).map(literal).collect()
}

fn between<'a>(src: &'a str, open: &str, close: &str) -> &'a str {
    let start = src.find(open).unwrap() + open.len();
    let len = src[start..].find(close).unwrap();
    &src[start..start + len]
}

fn literal(src: &str) -> Value {
    if let Some(text) = src.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')) {
        Value::from(text)
    } else if let Ok(int) = src.parse::<i64>() {
        Value::I64(int)
    } else {
        Value::F64(src.parse().unwrap())
    }
}

#[tokio::test]
async fn insert_then_query_back() {
    let original = Meter {
        ts: DateTime::from_timestamp_millis(1_700_000_000_000).unwrap(),
        current: 19.1,
        voltage: 290,
        cache: "scratch".to_string(),
        location: "1000".to_string(),
        group_id: 1,
    };

    let driver = MockDriver::new();
    let db = setup(&driver).await;

    db.insert("meters", &original).await.unwrap();

    let insert = driver.exec_log().last_statement();
    assert_eq!(
        insert,
        "INSERT INTO device_1000 USING meters TAGS ('1000',1) VALUES (1700000000000,19.1,290)"
    );

    driver.reply_rows(&COLUMNS, vec![stored_row(&insert)]);

    let mut loaded: Vec<Meter> = vec![];
    db.query(&mut loaded, "SELECT * FROM meters", &[])
        .await
        .unwrap();

    assert_eq!(
        loaded,
        [Meter {
            cache: String::new(),
            ..original
        }]
    );
}
