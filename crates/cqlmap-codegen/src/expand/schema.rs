use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Body of `Record::schema()`.
    pub(super) fn expand_record_schema(&self) -> TokenStream {
        let cqlmap = &self.cqlmap;
        let type_name = self.record.ident.to_string();

        let table = match &self.record.table {
            Some(table) => quote!(Some(#table)),
            None => quote!(None),
        };

        let columns = self.record.mapped_fields().map(|field| &field.column);
        let key = self.record.key.iter();

        quote! {
            #cqlmap::RecordSchema {
                type_name: #type_name,
                table: #table,
                columns: &[ #( #columns ),* ],
                key: &[ #( #key ),* ],
            }
        }
    }
}
