use super::{coerce, Value};

use chrono::{DateTime, NaiveDateTime, Utc};

/// A field type that can cross the transport boundary.
///
/// `to_value` produces the literal written by INSERT statements. `load` is
/// best effort and never fails: a value that cannot be represented as `Self`
/// loads as `Self`'s zero value.
pub trait Primitive: Sized {
    fn to_value(&self) -> Value;

    fn load(value: Value) -> Self;
}

macro_rules! impl_int_primitive {
    ( $( $ty:ty => $variant:ident via $widen:ident ),* $(,)? ) => {
        $(
            impl Primitive for $ty {
                fn to_value(&self) -> Value {
                    Value::$variant(*self)
                }

                fn load(value: Value) -> Self {
                    match value {
                        Value::$variant(v) => v,
                        value => coerce::$widen(value) as $ty,
                    }
                }
            }
        )*
    };
}

impl_int_primitive! {
    i8 => I8 via to_i64,
    i16 => I16 via to_i64,
    i32 => I32 via to_i64,
    i64 => I64 via to_i64,
    u8 => U8 via to_u64,
    u16 => U16 via to_u64,
    u32 => U32 via to_u64,
    u64 => U64 via to_u64,
}

impl Primitive for f32 {
    fn to_value(&self) -> Value {
        Value::F32(*self)
    }

    fn load(value: Value) -> Self {
        match value {
            Value::F32(v) => v,
            value => coerce::to_f64(value) as f32,
        }
    }
}

impl Primitive for f64 {
    fn to_value(&self) -> Value {
        Value::F64(*self)
    }

    fn load(value: Value) -> Self {
        coerce::to_f64(value)
    }
}

impl Primitive for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn load(value: Value) -> Self {
        coerce::to_bool(value)
    }
}

impl Primitive for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn load(value: Value) -> Self {
        coerce::to_string(value)
    }
}

impl Primitive for DateTime<Utc> {
    fn to_value(&self) -> Value {
        Value::Timestamp(*self)
    }

    fn load(value: Value) -> Self {
        coerce::to_timestamp(value)
    }
}

/// Naive timestamps are interpreted as UTC.
impl Primitive for NaiveDateTime {
    fn to_value(&self) -> Value {
        Value::Timestamp(self.and_utc())
    }

    fn load(value: Value) -> Self {
        coerce::to_timestamp(value).naive_utc()
    }
}

impl Primitive for serde_json::Value {
    fn to_value(&self) -> Value {
        Value::Json(self.clone())
    }

    fn load(value: Value) -> Self {
        coerce::to_json(value)
    }
}

impl<T: Primitive> Primitive for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    fn load(value: Value) -> Self {
        if value.is_null() {
            None
        } else {
            Some(T::load(value))
        }
    }
}

impl Primitive for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }

    fn load(value: Value) -> Self {
        value
    }
}
