#[macro_use]
mod fmt;
use fmt::ToCql;

mod condition;

mod delim;
use delim::{Comma, Delimited};

mod ident;
use ident::TableName;

mod params;
pub use params::{Params, Placeholder};

mod statement;

use cqlmap_core::{driver::operation::Query, stmt::Statement};

/// Renders statements into CQL text.
///
/// Bound values are pushed to [`Params`] in the order their placeholders
/// appear in the text.
#[derive(Debug, Default, Clone, Copy)]
pub struct Serializer {
    _priv: (),
}

struct Formatter<'a, T> {
    /// Where to write the serialized CQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    pub fn new() -> Serializer {
        Serializer::default()
    }

    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            dst: &mut ret,
            params,
        };

        stmt.to_cql(&mut fmt);

        ret
    }

    /// Renders `stmt` into a [`Query`] ready for the driver.
    pub fn query(&self, stmt: &Statement) -> Query {
        let mut params = vec![];
        let cql = self.serialize(stmt, &mut params);
        Query::new(cql, params)
    }
}
