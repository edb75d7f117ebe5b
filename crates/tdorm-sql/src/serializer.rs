#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod quoted;
use quoted::Quoted;

// Fragment serializers
mod statement;
mod value;

use crate::stmt::Statement;

use tdorm_core::stmt::Value;

/// Serialize a statement to TDengine SQL text.
///
/// Values are rendered inline as literals; the REST interface has no bound
/// parameters.
#[derive(Debug, Default, Clone, Copy)]
pub struct Serializer {
    _priv: (),
}

struct Formatter<'a> {
    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    pub fn tdengine() -> Self {
        Self::default()
    }

    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter { dst: &mut ret };
        stmt.to_sql(&mut fmt);

        ret
    }

    /// Renders a single value as a SQL literal.
    pub fn literal(&self, value: &Value) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter { dst: &mut ret };
        value.to_sql(&mut fmt);

        ret
    }
}
