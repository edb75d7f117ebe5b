use tdorm_core::{
    stmt::{coerce, Value},
    Error, Result,
};

use serde_json::Value as Json;

/// TDengine column types, as reported in `column_meta`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Bool,
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    UTinyInt,
    USmallInt,
    UInt,
    UBigInt,
    Float,
    Double,
    Timestamp,
    /// `BINARY`, `VARCHAR`, `NCHAR`, `VARBINARY`, `GEOMETRY`
    Text,
    Json,
    /// A type this driver does not know; cells are mapped by JSON shape.
    Other,
}

impl ColumnType {
    /// Reads the type element of a `column_meta` entry. Servers report the
    /// type name; older servers report a numeric type code.
    pub fn from_meta(meta: &Json) -> Result<Self> {
        match meta {
            Json::String(name) => Ok(Self::from_name(name)),
            Json::Number(code) => match code.as_u64() {
                Some(code) => Ok(Self::from_code(code)),
                None => Err(Error::invalid_result(format!(
                    "column type code is not an unsigned integer; code={code}"
                ))),
            },
            other => Err(Error::invalid_result(format!(
                "column type is neither a name nor a code; type={other}"
            ))),
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "BOOL" => Self::Bool,
            "TINYINT" => Self::TinyInt,
            "SMALLINT" => Self::SmallInt,
            "INT" => Self::Int,
            "BIGINT" => Self::BigInt,
            "TINYINT UNSIGNED" => Self::UTinyInt,
            "SMALLINT UNSIGNED" => Self::USmallInt,
            "INT UNSIGNED" => Self::UInt,
            "BIGINT UNSIGNED" => Self::UBigInt,
            "FLOAT" => Self::Float,
            "DOUBLE" => Self::Double,
            "TIMESTAMP" => Self::Timestamp,
            "BINARY" | "VARCHAR" | "NCHAR" | "VARBINARY" | "GEOMETRY" => Self::Text,
            "JSON" => Self::Json,
            _ => Self::Other,
        }
    }

    pub fn from_code(code: u64) -> Self {
        match code {
            1 => Self::Bool,
            2 => Self::TinyInt,
            3 => Self::SmallInt,
            4 => Self::Int,
            5 => Self::BigInt,
            6 => Self::Float,
            7 => Self::Double,
            8 | 10 => Self::Text,
            9 => Self::Timestamp,
            11 => Self::UTinyInt,
            12 => Self::USmallInt,
            13 => Self::UInt,
            14 => Self::UBigInt,
            15 => Self::Json,
            _ => Self::Other,
        }
    }
}

/// Decodes one JSON cell of a column of type `ty`.
pub(crate) fn decode(ty: &ColumnType, cell: Json) -> Result<Value> {
    if cell.is_null() {
        return Ok(Value::Null);
    }

    let cell = match (ty, cell) {
        (ColumnType::Text, Json::String(s)) => return Ok(Value::String(s)),
        (ColumnType::Json, Json::String(s)) => {
            return Ok(match serde_json::from_str(&s) {
                Ok(json) => Value::Json(json),
                // Not every JSON column holds valid JSON text
                Err(_) => Value::String(s),
            })
        }
        (ColumnType::Json, json) => return Ok(Value::Json(json)),
        (ColumnType::Other, cell) => return Ok(by_shape(cell)),
        (_, cell) => cell,
    };

    let value = match ty {
        ColumnType::Bool => match &cell {
            Json::Bool(v) => Some(Value::Bool(*v)),
            Json::Number(n) => n.as_i64().map(|n| Value::Bool(n != 0)),
            _ => None,
        },
        ColumnType::TinyInt => signed(&cell).and_then(|v| i8::try_from(v).ok()).map(Value::I8),
        ColumnType::SmallInt => signed(&cell).and_then(|v| i16::try_from(v).ok()).map(Value::I16),
        ColumnType::Int => signed(&cell).and_then(|v| i32::try_from(v).ok()).map(Value::I32),
        ColumnType::BigInt => signed(&cell).map(Value::I64),
        ColumnType::UTinyInt => unsigned(&cell).and_then(|v| u8::try_from(v).ok()).map(Value::U8),
        ColumnType::USmallInt => {
            unsigned(&cell).and_then(|v| u16::try_from(v).ok()).map(Value::U16)
        }
        ColumnType::UInt => unsigned(&cell).and_then(|v| u32::try_from(v).ok()).map(Value::U32),
        ColumnType::UBigInt => unsigned(&cell).map(Value::U64),
        ColumnType::Float => cell.as_f64().map(|v| Value::F32(v as f32)),
        ColumnType::Double => cell.as_f64().map(Value::F64),
        ColumnType::Timestamp => match &cell {
            Json::Number(n) => n
                .as_i64()
                .and_then(chrono::DateTime::from_timestamp_millis)
                .map(Value::Timestamp),
            Json::String(s) => coerce::parse_timestamp(s).map(Value::Timestamp),
            _ => None,
        },
        ColumnType::Text | ColumnType::Json | ColumnType::Other => None,
    };

    value.ok_or_else(|| {
        Error::invalid_result(format!(
            "cell does not match its column type; type={ty:?}; cell={cell}"
        ))
    })
}

fn signed(cell: &Json) -> Option<i64> {
    cell.as_i64()
}

fn unsigned(cell: &Json) -> Option<u64> {
    cell.as_u64()
}

fn by_shape(cell: Json) -> Value {
    match cell {
        Json::Null => Value::Null,
        Json::Bool(v) => Value::Bool(v),
        Json::Number(n) => match (n.as_i64(), n.as_u64()) {
            (Some(v), _) => Value::I64(v),
            (None, Some(v)) => Value::U64(v),
            _ => n.as_f64().map(Value::F64).unwrap_or(Value::Null),
        },
        Json::String(s) => Value::String(s),
        json => Value::Json(json),
    }
}
