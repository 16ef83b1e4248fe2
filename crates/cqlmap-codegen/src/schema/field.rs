use super::{Column, ErrorSet};

#[derive(Debug)]
pub(crate) struct Field {
    /// Rust identifier of the field
    pub(crate) ident: syn::Ident,

    /// Column name: the `#[column]` override or the lowercased field name
    pub(crate) column: String,

    /// The field-level `#[key]` attribute, if present
    pub(crate) key: Option<syn::Attribute>,

    /// The `#[skip]` attribute, if present
    pub(crate) skip: Option<syn::Attribute>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut key = None;
        let mut skip = None;
        let mut column: Option<Column> = None;

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                if key.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else if !matches!(attr.meta, syn::Meta::Path(_)) {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "field-level key takes no arguments, use `#[key]`",
                    ));
                } else {
                    key = Some(attr.clone());
                }
            } else if attr.path().is_ident("skip") {
                if skip.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[skip] attribute"));
                } else {
                    skip = Some(attr.clone());
                }
            } else if attr.path().is_ident("column") {
                if column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    match Column::from_ast(attr) {
                        Ok(attr) => column = Some(attr),
                        Err(err) => errs.push(err),
                    }
                }
            }
        }

        if let (Some(skip), Some(_)) = (&skip, &key) {
            errs.push(syn::Error::new_spanned(
                skip,
                "a skipped field cannot be part of the key",
            ));
        }

        if let (Some(skip), Some(_)) = (&skip, &column) {
            errs.push(syn::Error::new_spanned(
                skip,
                "a skipped field cannot have a #[column] attribute",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let column = match column {
            Some(column) => column.name.value(),
            None => default_column_name(ident),
        };

        Ok(Field {
            ident: ident.clone(),
            column,
            key,
            skip,
        })
    }

    pub(crate) fn is_mapped(&self) -> bool {
        self.skip.is_none()
    }
}

/// The lowercased field name, without any raw identifier prefix.
fn default_column_name(ident: &syn::Ident) -> String {
    let name = ident.to_string();
    name.strip_prefix("r#").unwrap_or(&name).to_lowercase()
}
