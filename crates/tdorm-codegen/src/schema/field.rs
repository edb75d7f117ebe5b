use super::ErrorSet;

use tdorm_core::schema::FieldAnnotation;

#[derive(Debug)]
pub(crate) struct Field {
    /// Index of field in the containing record
    pub(crate) id: usize,

    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Raw `#[sql("...")]` text
    pub(crate) sql: Option<syn::LitStr>,

    /// Raw `#[td("...")]` text
    pub(crate) td: Option<syn::LitStr>,

    /// True if the settings exclude the field from statements and results
    pub(crate) ignored: bool,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field, id: usize) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::default();
        let mut sql = None;
        let mut td = None;

        for attr in &field.attrs {
            let slot = if attr.path().is_ident("sql") {
                &mut sql
            } else if attr.path().is_ident("td") {
                &mut td
            } else {
                continue;
            };

            if slot.is_some() {
                errs.push(syn::Error::new_spanned(attr, "duplicate field attribute"));
                continue;
            }

            *slot = errs.check(attr.parse_args::<syn::LitStr>());
        }

        errs.into_result()?;

        let ignored = Self::annotation(&sql, &td).is_ignored();

        Ok(Self {
            id,
            ident: ident.clone(),
            ty: field.ty.clone(),
            sql,
            td,
            ignored,
        })
    }

    /// Attribute text in precedence order: `sql` first, `td` overrides.
    pub(crate) fn dialects(&self) -> [String; 2] {
        [lit_value(&self.sql), lit_value(&self.td)]
    }

    fn annotation(sql: &Option<syn::LitStr>, td: &Option<syn::LitStr>) -> FieldAnnotation {
        FieldAnnotation::parse([lit_value(sql), lit_value(td)])
    }
}

fn lit_value(lit: &Option<syn::LitStr>) -> String {
    lit.as_ref().map(syn::LitStr::value).unwrap_or_default()
}
