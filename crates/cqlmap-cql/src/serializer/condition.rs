use super::{Formatter, Params, ToCql};

use cqlmap_core::stmt::Condition;

/// A condition's fragment already contains its `?` placeholders; only the
/// values need to be pushed.
impl ToCql for &Condition {
    fn to_cql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push_str(self.cql());
        for value in self.values() {
            f.params.push(value);
        }
    }
}
