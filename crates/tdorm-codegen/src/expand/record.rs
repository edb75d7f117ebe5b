use super::{util, Expand};
use crate::schema::TableAttr;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let tdorm = &self.tdorm;
        let record_ident = &self.record.ident;
        let descriptor = self.expand_descriptor();
        let table_name = self.expand_table_name();
        let field_value_arms = self.expand_field_value_arms();
        let load_field_arms = self.expand_load_field_arms();

        quote! {
            impl #tdorm::Record for #record_ident {
                fn descriptor() -> &'static #tdorm::RecordDescriptor {
                    static DESCRIPTOR: std::sync::OnceLock<#tdorm::RecordDescriptor> =
                        std::sync::OnceLock::new();
                    DESCRIPTOR.get_or_init(|| #descriptor)
                }

                fn table_name(&self) -> String {
                    #table_name
                }

                fn field_value(&self, index: usize) -> #tdorm::Value {
                    match index {
                        #( #field_value_arms )*
                        _ => #tdorm::Value::Null,
                    }
                }

                fn load_field(&mut self, index: usize, value: #tdorm::Value) {
                    match index {
                        #( #load_field_arms )*
                        _ => {}
                    }
                }
            }
        }
    }

    pub(super) fn expand_from_row_impl(&self) -> TokenStream {
        let tdorm = &self.tdorm;
        let record_ident = &self.record.ident;

        quote! {
            impl #tdorm::FromRow for #record_ident {
                fn from_row(columns: &#tdorm::Columns, row: Vec<#tdorm::Value>) -> Self {
                    #tdorm::load_record::<Self>(columns, row)
                }
            }
        }
    }

    fn expand_descriptor(&self) -> TokenStream {
        let tdorm = &self.tdorm;
        let name = self.record.ident.to_string();

        let fields = self.record.fields.iter().map(|field| {
            let index = util::int(field.id);
            let field_name = field.ident.to_string();
            let [sql, td] = field.dialects();

            quote! {
                #tdorm::Field::new(
                    #index,
                    #field_name,
                    #tdorm::FieldAnnotation::parse([#sql, #td]),
                )
            }
        });

        quote! {
            #tdorm::RecordDescriptor::new(#name, vec![ #( #fields ),* ])
        }
    }

    fn expand_table_name(&self) -> TokenStream {
        let tdorm = &self.tdorm;

        match &self.record.table {
            TableAttr::Default(name) => quote!(String::from(#name)),
            TableAttr::Fixed(lit) => quote!(String::from(#lit)),
            TableAttr::Dynamic => quote!(<Self as #tdorm::TableName>::table_name(self)),
        }
    }

    fn expand_field_value_arms(&self) -> Vec<TokenStream> {
        let tdorm = &self.tdorm;

        self.record
            .columns()
            .map(|field| {
                let index = util::int(field.id);
                let ident = &field.ident;

                quote!(#index => #tdorm::Primitive::to_value(&self.#ident),)
            })
            .collect()
    }

    fn expand_load_field_arms(&self) -> Vec<TokenStream> {
        let tdorm = &self.tdorm;

        self.record
            .columns()
            .map(|field| {
                let index = util::int(field.id);
                let ident = &field.ident;
                let ty = &field.ty;

                quote!(#index => self.#ident = <#ty as #tdorm::Primitive>::load(value),)
            })
            .collect()
    }
}
