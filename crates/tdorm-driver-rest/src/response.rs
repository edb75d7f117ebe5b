use crate::{value, ColumnType, RestError};

use serde::Deserialize;
use tdorm_core::{driver::Rows, Error, Result};

/// Column holding the affected row count in the result of a write.
const AFFECTED_ROWS: &str = "affected_rows";

/// A decoded `/rest/sql` response body.
#[derive(Debug)]
pub struct Response {
    pub columns: Vec<Column>,

    /// Raw JSON cells, one inner vector per row.
    pub data: Vec<Vec<serde_json::Value>>,

    /// Number of rows reported by the server.
    pub rows: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub ty: ColumnType,
}

#[derive(Deserialize)]
struct Payload {
    #[serde(default)]
    code: i64,

    #[serde(default)]
    desc: String,

    #[serde(default)]
    column_meta: Vec<Vec<serde_json::Value>>,

    #[serde(default)]
    data: Vec<Vec<serde_json::Value>>,

    #[serde(default)]
    rows: u64,
}

/// Decodes a response body.
///
/// A non-zero `code` becomes a driver error carrying the server's code and
/// description. A body that is not a well-formed response is an
/// invalid-result error.
pub fn decode_response(body: &[u8]) -> Result<Response> {
    let payload: Payload = serde_json::from_slice(body)?;

    if payload.code != 0 {
        return Err(Error::driver(RestError::Server {
            code: payload.code,
            desc: payload.desc,
        }));
    }

    let columns = payload
        .column_meta
        .iter()
        .map(|meta| decode_column(meta))
        .collect::<Result<Vec<_>>>()?;

    Ok(Response {
        columns,
        data: payload.data,
        rows: payload.rows,
    })
}

fn decode_column(meta: &[serde_json::Value]) -> Result<Column> {
    let [name, ty, ..] = meta else {
        return Err(Error::invalid_result(format!(
            "column metadata must have a name and a type; meta={meta:?}"
        )));
    };

    let Some(name) = name.as_str() else {
        return Err(Error::invalid_result(format!(
            "column name is not a string; name={name}"
        )));
    };

    Ok(Column {
        name: name.to_string(),
        ty: ColumnType::from_meta(ty)?,
    })
}

impl Response {
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|column| column.name.clone()).collect()
    }

    /// Rows affected by a write.
    ///
    /// Writes report the count in a single `affected_rows` cell; anything
    /// else falls back to the reported row count.
    pub fn affected_rows(&self) -> Result<u64> {
        let position = self
            .columns
            .iter()
            .position(|column| column.name == AFFECTED_ROWS);

        match (position, self.data.first()) {
            (Some(index), Some(row)) => match row.get(index).and_then(|cell| cell.as_u64()) {
                Some(count) => Ok(count),
                None => Err(Error::invalid_result(format!(
                    "`{AFFECTED_ROWS}` is not an unsigned integer; row={row:?}"
                ))),
            },
            _ => Ok(self.rows),
        }
    }

    /// Converts the body into a result set. Cells are decoded lazily, one
    /// row at a time.
    pub fn into_rows(self) -> Rows {
        let column_names = self.column_names();
        let types: Vec<ColumnType> = self.columns.into_iter().map(|column| column.ty).collect();

        let rows = self.data.into_iter().map(move |row| {
            if row.len() != types.len() {
                return Err(Error::invalid_result(format!(
                    "row has {} cell(s) but {} column(s) were described",
                    row.len(),
                    types.len()
                )));
            }

            row.into_iter()
                .zip(&types)
                .map(|(cell, ty)| value::decode(ty, cell))
                .collect()
        });

        Rows::from_results(column_names, rows)
    }
}
