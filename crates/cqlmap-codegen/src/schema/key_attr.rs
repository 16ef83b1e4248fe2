/// Struct-level `#[key(a, b)]`: the primary key fields, partition key first.
#[derive(Debug, Default)]
pub(crate) struct KeyAttr {
    pub(crate) fields: Vec<syn::Ident>,
}

impl KeyAttr {
    pub(super) fn from_ast(attr: &syn::Attribute, names: &[syn::Ident]) -> syn::Result<Self> {
        let mut fields: Vec<syn::Ident> = vec![];

        attr.parse_nested_meta(|meta| {
            let Some(ident) = meta.path.get_ident() else {
                return Err(syn::Error::new_spanned(&meta.path, "expected a field name"));
            };

            if !names.contains(ident) {
                return Err(syn::Error::new_spanned(
                    ident,
                    format!("unknown field `{ident}`"),
                ));
            }

            if fields.contains(ident) {
                return Err(syn::Error::new_spanned(
                    ident,
                    format!("field `{ident}` is listed twice"),
                ));
            }

            fields.push(ident.clone());
            Ok(())
        })?;

        if fields.is_empty() {
            return Err(syn::Error::new_spanned(
                attr,
                "expected at least one field, e.g. `#[key(id)]`",
            ));
        }

        Ok(Self { fields })
    }
}
