use super::FieldAnnotation;
use crate::stmt::Value;

/// A Rust type that maps onto a TDengine table.
///
/// Usually implemented with `#[derive(Record)]`, which builds the descriptor
/// from the struct's fields and their `#[sql]` / `#[td]` attributes.
pub trait Record {
    /// The static field table for this type. Built once and cached.
    fn descriptor() -> &'static RecordDescriptor;

    /// The physical (sub-)table rows of this record are written to.
    fn table_name(&self) -> String;

    /// Returns the current value of the field at `index`.
    ///
    /// Ignored fields return [`Value::Null`].
    fn field_value(&self, index: usize) -> Value;

    /// Coerces `value` into the field at `index`. Ignored fields and
    /// out-of-range indices are left untouched.
    fn load_field(&mut self, index: usize, value: Value);
}

/// Ordered field metadata for a record type.
#[derive(Debug, Clone)]
pub struct RecordDescriptor {
    /// The bare type identifier, e.g. `Meter`.
    pub name: &'static str,

    /// Fields in declaration order.
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone)]
pub struct Field {
    /// Position of the field in declaration order.
    pub index: usize,

    /// The Rust field name
    pub name: &'static str,

    pub annotation: FieldAnnotation,
}

impl RecordDescriptor {
    pub fn new(name: &'static str, fields: Vec<Field>) -> Self {
        debug_assert!(
            fields.iter().enumerate().all(|(i, field)| field.index == i),
            "field indices must follow declaration order"
        );
        Self { name, fields }
    }

    /// Fields that take part in statements and result mapping.
    pub fn columns(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| !field.is_ignored())
    }

    pub fn tags(&self) -> impl Iterator<Item = &Field> + '_ {
        self.columns().filter(|field| field.is_tag())
    }

    pub fn has_tags(&self) -> bool {
        self.tags().next().is_some()
    }

    /// Finds the field loaded from the result column `column`.
    pub fn field_by_column(&self, column: &str) -> Option<&Field> {
        self.columns()
            .find(|field| field.annotation.column().as_deref() == Some(column))
    }
}

impl Field {
    pub fn new(index: usize, name: &'static str, annotation: FieldAnnotation) -> Self {
        Self {
            index,
            name,
            annotation,
        }
    }

    pub fn is_ignored(&self) -> bool {
        self.annotation.is_ignored()
    }

    pub fn is_tag(&self) -> bool {
        self.annotation.is_tag()
    }
}
