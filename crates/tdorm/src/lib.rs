// Lets `#[derive(Record)]` resolve `tdorm` from within this crate's own tests.
extern crate self as tdorm;

pub mod cursor;
pub use cursor::{Cursor, FromCursor};

pub mod db;
pub use db::Db;

mod row;
pub use row::{load_record, Columns, FromRow};

pub use tdorm_core::{
    async_trait, bail, driver, err,
    schema::{Record, TableName},
    stmt::{Json, Primitive, Value},
    Error, Result,
};

pub use tdorm_macros::Record;

#[cfg(feature = "rest")]
pub use tdorm_driver_rest::Rest;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{load_record, Columns, FromRow};
    pub use tdorm_core::{
        schema::{Field, FieldAnnotation, Record, RecordDescriptor, TableName},
        stmt::{Primitive, Value},
    };
}
