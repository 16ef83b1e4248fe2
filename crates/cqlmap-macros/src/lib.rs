extern crate proc_macro;

use proc_macro::TokenStream;

/// Implements `Record` for a struct with named fields.
///
/// Struct attributes:
///
/// - `#[table = "name"]` maps the record to `name` instead of the type name.
/// - `#[key(a, b)]` declares the primary key fields, partition key first.
///
/// Field attributes:
///
/// - `#[key]` marks the field as part of the primary key, in declaration
///   order. Cannot be combined with the struct-level form.
/// - `#[column("name")]` overrides the column name. By default it is the
///   lowercased field name.
/// - `#[skip]` leaves the field unmapped.
///
/// When no key is declared, the first mapped column is the key.
#[proc_macro_derive(Record, attributes(table, key, column, skip))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match cqlmap_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
