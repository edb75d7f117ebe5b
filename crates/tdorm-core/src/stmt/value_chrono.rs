use chrono::{DateTime, NaiveDateTime, Utc};

use crate::stmt::Value;

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

impl From<&DateTime<Utc>> for Value {
    fn from(value: &DateTime<Utc>) -> Self {
        Self::Timestamp(*value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Self::Timestamp(value.and_utc())
    }
}
