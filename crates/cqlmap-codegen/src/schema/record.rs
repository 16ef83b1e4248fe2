use super::{ErrorSet, Field, RecordAttr};

#[derive(Debug)]
pub(crate) struct Record {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// All fields, including skipped ones, in declaration order
    pub(crate) fields: Vec<Field>,

    /// Table name override
    pub(crate) table: Option<syn::LitStr>,

    /// Primary key column names, in key order. Empty when no key was
    /// declared.
    pub(crate) key: Vec<String>,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "record fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record generics are not supported",
            ));
        }

        let names: Vec<syn::Ident> = node
            .named
            .iter()
            .filter_map(|field| field.ident.clone())
            .collect();

        let mut attr = RecordAttr::default();
        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        if let Err(err) = attr.populate_from_ast(&ast.attrs, &names) {
            errs.push(err);
        }

        for node in node.named.iter() {
            match Field::from_ast(node) {
                Ok(field) => {
                    if attr.key.is_some() {
                        if let Some(key) = &field.key {
                            errs.push(syn::Error::new_spanned(
                                key,
                                "field cannot have #[key] attribute when the struct has #[key] attribute",
                            ));
                        }
                    }

                    fields.push(field);
                }
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let mapped: Vec<&Field> = fields.iter().filter(|field| field.is_mapped()).collect();

        if mapped.is_empty() {
            return Err(syn::Error::new_spanned(
                ast,
                "record must map at least one column",
            ));
        }

        for (i, field) in mapped.iter().enumerate() {
            if let Some(other) = mapped[..i].iter().find(|f| f.column == field.column) {
                return Err(syn::Error::new_spanned(
                    &field.ident,
                    format!(
                        "column `{}` is already mapped by field `{}`",
                        field.column, other.ident
                    ),
                ));
            }
        }

        let key = match &attr.key {
            Some(key_attr) => {
                let mut key = vec![];
                for ident in &key_attr.fields {
                    let Some(field) = fields.iter().find(|field| &field.ident == ident) else {
                        continue;
                    };

                    if !field.is_mapped() {
                        return Err(syn::Error::new_spanned(
                            ident,
                            "a skipped field cannot be part of the key",
                        ));
                    }

                    key.push(field.column.clone());
                }
                key
            }
            None => fields
                .iter()
                .filter(|field| field.key.is_some())
                .map(|field| field.column.clone())
                .collect(),
        };

        Ok(Record {
            ident: ast.ident.clone(),
            fields,
            table: attr.table,
            key,
        })
    }

    /// Fields mapped to columns, in declaration order.
    pub(crate) fn mapped_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| field.is_mapped())
    }
}
