use tdorm_core::{
    schema::{Record, RecordDescriptor},
    stmt::Value,
    Error, Result,
};

/// A multi-table `INSERT` statement.
///
/// Each row targets its own sub-table. Rows of records with tag fields also
/// carry the super table and tag values so the sub-table is created on first
/// write.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub rows: Vec<InsertRow>,
}

/// One `<table> [USING <super> TAGS (...)] VALUES (...)` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertRow {
    /// Physical sub-table name.
    pub table: String,

    /// Present when the record has at least one tag field.
    pub using: Option<Using>,

    /// Non-tag field values in declaration order.
    pub values: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Using {
    pub super_table: String,
    pub tags: Vec<Value>,
}

impl Insert {
    /// Builds the statement inserting a single record.
    pub fn single<R: Record>(super_table: &str, record: &R) -> Result<Self> {
        Self::batch(super_table, std::slice::from_ref(record))
    }

    /// Builds one statement inserting every record, in order.
    pub fn batch<R: Record>(super_table: &str, records: &[R]) -> Result<Self> {
        if super_table.is_empty() {
            return Err(Error::empty_super_table());
        }

        if records.is_empty() {
            return Err(Error::empty_batch());
        }

        let rows = records
            .iter()
            .map(|record| InsertRow::from_record(super_table, record))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rows })
    }
}

impl InsertRow {
    pub fn from_record<R: Record>(super_table: &str, record: &R) -> Result<Self> {
        let descriptor: &RecordDescriptor = R::descriptor();

        let table = record.table_name();
        if table.is_empty() {
            return Err(Error::empty_table_name(descriptor.name));
        }

        let mut tags = vec![];
        let mut values = vec![];

        for field in descriptor.columns() {
            let value = record.field_value(field.index);

            if field.is_tag() {
                tags.push(value);
            } else {
                values.push(value);
            }
        }

        let using = if tags.is_empty() {
            None
        } else {
            Some(Using {
                super_table: super_table.to_string(),
                tags,
            })
        };

        Ok(Self {
            table,
            using,
            values,
        })
    }
}
