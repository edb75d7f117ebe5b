extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `Record` and `FromRow` for a struct with named fields.
///
/// Field settings are given with `#[sql("...")]` and/or `#[td("...")]`
/// (`td` wins on conflicting keys). The table name defaults to the snake
/// case type name and can be overridden with `#[record(table = "name")]`,
/// or computed per value with `#[record(table_name)]` and a `TableName`
/// impl. Loading rows starts from `Default::default()`, so the struct must
/// implement `Default`.
#[proc_macro_derive(Record, attributes(sql, td, record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match tdorm_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
