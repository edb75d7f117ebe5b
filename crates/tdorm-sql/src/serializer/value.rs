use super::{Formatter, Quoted, ToSql};

use tdorm_core::stmt::Value;

impl ToSql for &Value {
    fn to_sql(self, f: &mut Formatter<'_>) {
        use Value::*;

        match self {
            Null => f.dst.push_str("NULL"),
            Bool(v) => f.dst.push_str(if *v { "true" } else { "false" }),
            I8(v) => f.dst.push_str(&v.to_string()),
            I16(v) => f.dst.push_str(&v.to_string()),
            I32(v) => f.dst.push_str(&v.to_string()),
            I64(v) => f.dst.push_str(&v.to_string()),
            U8(v) => f.dst.push_str(&v.to_string()),
            U16(v) => f.dst.push_str(&v.to_string()),
            U32(v) => f.dst.push_str(&v.to_string()),
            U64(v) => f.dst.push_str(&v.to_string()),
            // Non-finite floats have no SQL literal
            F32(v) if !v.is_finite() => f.dst.push_str("NULL"),
            F64(v) if !v.is_finite() => f.dst.push_str("NULL"),
            F32(v) => f.dst.push_str(&v.to_string()),
            F64(v) => f.dst.push_str(&v.to_string()),
            String(v) => Quoted(v).to_sql(f),
            Timestamp(v) => f.dst.push_str(&v.timestamp_millis().to_string()),
            Json(v) => Quoted(v.to_string()).to_sql(f),
        }
    }
}
