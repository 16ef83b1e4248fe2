use super::{Formatter, ToCql};

use cqlmap_core::stmt;

/// Collects the values bound to placeholders, in placeholder order.
pub trait Params {
    fn push(&mut self, param: &stmt::Value) -> Placeholder;
}

/// A bound placeholder, with its one-based position in the argument list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

impl Params for Vec<stmt::Value> {
    fn push(&mut self, value: &stmt::Value) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

impl ToCql for Placeholder {
    fn to_cql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push('?');
    }
}

/// Binds a value and renders its placeholder.
pub(super) struct Bind<'a>(pub(super) &'a stmt::Value);

impl ToCql for Bind<'_> {
    fn to_cql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let placeholder = f.params.push(self.0);
        placeholder.to_cql(f);
    }
}
