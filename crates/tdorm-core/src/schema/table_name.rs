use std_util::str;

/// Lets a record choose its physical table name from its own data.
///
/// Opted into with `#[record(table_name)]`. The returned string is used
/// verbatim, e.g. one sub-table per device:
///
/// ```
/// use tdorm_core::schema::TableName;
///
/// struct Meter {
///     device_id: String,
/// }
///
/// impl TableName for Meter {
///     fn table_name(&self) -> String {
///         format!("device_{}", self.device_id)
///     }
/// }
///
/// let meter = Meter { device_id: "1000".into() };
/// assert_eq!(meter.table_name(), "device_1000");
/// ```
pub trait TableName {
    fn table_name(&self) -> String;
}

/// The table name used when a record declares none: the type identifier
/// without module path or generic arguments, in snake case.
pub fn default_table_name<T: ?Sized>() -> String {
    str::snake_case(bare_type_name(std::any::type_name::<T>()))
}

/// Strips generic arguments and the module path from a type name.
pub fn bare_type_name(type_name: &str) -> &str {
    let without_generics = match type_name.find('<') {
        Some(end) => &type_name[..end],
        None => type_name,
    };

    match without_generics.rfind("::") {
        Some(start) => &without_generics[start + 2..],
        None => without_generics,
    }
}
