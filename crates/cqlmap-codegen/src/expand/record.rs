use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let cqlmap = &self.cqlmap;
        let ident = &self.record.ident;
        let schema = self.expand_record_schema();

        let fields: Vec<_> = self
            .record
            .mapped_fields()
            .map(|field| &field.ident)
            .collect();

        quote! {
            impl #cqlmap::Record for #ident {
                fn schema() -> #cqlmap::RecordSchema {
                    #schema
                }

                fn fields(&self) -> Vec<&dyn #cqlmap::Field> {
                    vec![ #( &self.#fields as &dyn #cqlmap::Field ),* ]
                }

                fn fields_mut(&mut self) -> Vec<&mut dyn #cqlmap::Field> {
                    vec![ #( &mut self.#fields as &mut dyn #cqlmap::Field ),* ]
                }
            }
        }
    }
}
