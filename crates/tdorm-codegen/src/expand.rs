mod record;
mod util;

use crate::schema::Record;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    record: &'a Record,

    /// Path prefix for tdorm types
    tdorm: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let record_impl = self.expand_record_impl();
        let from_row_impl = self.expand_from_row_impl();

        wrap_in_const(quote! {
            #record_impl
            #from_row_impl
        })
    }
}

pub(super) fn record(record: &Record) -> TokenStream {
    let tdorm = quote!(_tdorm::codegen_support);

    Expand { record, tdorm }.expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use tdorm as _tdorm;
            #code
        };
    }
}
