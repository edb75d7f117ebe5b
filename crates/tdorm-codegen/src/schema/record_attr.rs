use super::ErrorSet;

/// How a record resolves its physical table name.
#[derive(Debug)]
pub(crate) enum TableAttr {
    /// Derived from the type identifier at expansion time
    Default(String),

    /// `#[record(table = "name")]`
    Fixed(syn::LitStr),

    /// `#[record(table_name)]`, delegating to the `TableName` impl
    Dynamic,
}

#[derive(Debug, Default)]
pub(crate) struct RecordAttr {
    pub(crate) table: Option<TableAttr>,
}

impl RecordAttr {
    pub(super) fn populate_from_ast(&mut self, attrs: &[syn::Attribute]) -> syn::Result<()> {
        let mut errs = ErrorSet::default();

        for attr in attrs {
            if !attr.path().is_ident("record") {
                continue;
            }

            let res = attr.parse_nested_meta(|meta| {
                let table = if meta.path.is_ident("table") {
                    TableAttr::Fixed(meta.value()?.parse()?)
                } else if meta.path.is_ident("table_name") {
                    TableAttr::Dynamic
                } else {
                    return Err(meta.error("expected `table = \"name\"` or `table_name`"));
                };

                if self.table.is_some() {
                    return Err(meta.error("table name specified more than once"));
                }

                self.table = Some(table);
                Ok(())
            });

            errs.check(res);
        }

        errs.into_result()
    }
}
