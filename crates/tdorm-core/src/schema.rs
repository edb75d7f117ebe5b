mod annotation;
pub use annotation::{FieldAnnotation, COLUMN, IGNORE, TAG};

mod record;
pub use record::{Field, Record, RecordDescriptor};

mod table_name;
pub use table_name::{bare_type_name, default_table_name, TableName};
