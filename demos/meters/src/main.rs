use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use tdorm::{Record, TableName, Value};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, Record)]
#[record(table_name)]
struct Meter {
    #[sql("column:ts")]
    ts: DateTime<Utc>,

    #[sql("column:current")]
    current: f32,

    #[sql("column:voltage")]
    voltage: i32,

    #[sql("column:phase")]
    phase: f32,

    #[sql("column:location;TAG")]
    location: String,

    #[td("column:group_id;TAG")]
    group_id: i32,

    #[sql("-")]
    device_id: u32,
}

// The default DSN selects no database, so sub-tables are qualified.
impl TableName for Meter {
    fn table_name(&self) -> String {
        format!("power.device_{}", self.device_id)
    }
}

#[tokio::main]
async fn main() -> tdorm::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let db = tdorm::Db::builder()
        .log_statements(true)
        .connect(
            std::env::var("TDORM_DSN")
                .as_deref()
                .unwrap_or("root:taosdata@http(localhost:6041)/"),
        )
        .await?;

    db.execute("CREATE DATABASE IF NOT EXISTS power", &[]).await?;
    db.execute(
        "CREATE STABLE IF NOT EXISTS power.meters \
         (ts TIMESTAMP, current FLOAT, voltage INT, phase FLOAT) \
         TAGS (location BINARY(64), group_id INT)",
        &[],
    )
    .await?;

    let now = Utc::now();
    let meters: Vec<Meter> = (0..3)
        .map(|i| Meter {
            ts: now,
            current: 10.0 + i as f32,
            voltage: 219 + i,
            phase: 0.31,
            location: format!("California.SanFrancisco.{i}"),
            group_id: 2,
            device_id: 1000 + i as u32,
        })
        .collect();

    let affected = db.insert_batch("power.meters", &meters).await?;
    println!("inserted {affected} row(s)");

    let total = db.count("SELECT * FROM power.meters", &[]).await?;
    println!("power.meters holds {total} row(s)");

    let mut readings: Vec<Meter> = vec![];
    db.query(
        &mut readings,
        "SELECT * FROM power.meters WHERE voltage > ? LIMIT 10",
        &[Value::from(200)],
    )
    .await?;

    for reading in &readings {
        println!(
            "{} {}: {}A {}V",
            reading.ts, reading.location, reading.current, reading.voltage
        );
    }

    let mut latest: IndexMap<String, Value> = IndexMap::new();
    db.query_first(
        &mut latest,
        "SELECT LAST_ROW(ts), voltage FROM power.meters",
        &[],
    )
    .await?;
    println!("latest = {latest:#?}");

    db.close().await
}
