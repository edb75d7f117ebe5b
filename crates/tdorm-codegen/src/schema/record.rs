use super::{ErrorSet, Field, RecordAttr, TableAttr};

use std_util::str;

#[derive(Debug)]
pub(crate) struct Record {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Record fields, in declaration order
    pub(crate) fields: Vec<Field>,

    /// Table name resolution
    pub(crate) table: TableAttr,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "record fields must be named",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record generics are not supported",
            ));
        }

        let mut errs = ErrorSet::default();
        let mut record_attr = RecordAttr::default();
        errs.check(record_attr.populate_from_ast(&ast.attrs));

        let fields: Vec<_> = node
            .named
            .iter()
            .enumerate()
            .filter_map(|(index, node)| errs.check(Field::from_ast(node, index)))
            .collect();

        errs.into_result()?;

        let table = record_attr
            .table
            .unwrap_or_else(|| TableAttr::Default(str::snake_case(&ast.ident.to_string())));

        Ok(Self {
            ident: ast.ident.clone(),
            fields,
            table,
        })
    }

    /// Fields that take part in statements and result mapping.
    pub(crate) fn columns(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| !field.ignored)
    }
}
