use super::{Formatter, Params, ToCql};

/// A table name, qualified with its keyspace when one is set.
pub(super) struct TableName<'a> {
    pub(super) keyspace: Option<&'a str>,
    pub(super) table: &'a str,
}

impl ToCql for TableName<'_> {
    fn to_cql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if let Some(keyspace) = self.keyspace {
            fmt!(f, keyspace ".");
        }
        fmt!(f, self.table);
    }
}
