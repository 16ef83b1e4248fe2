use super::Operation;
use crate::stmt::Value;

/// Rendered CQL text and the values bound to its placeholders, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub cql: String,
    pub params: Vec<Value>,
}

impl Query {
    pub fn new(cql: impl Into<String>, params: Vec<Value>) -> Query {
        Query {
            cql: cql.into(),
            params,
        }
    }
}

impl From<(String, Vec<Value>)> for Query {
    fn from((cql, params): (String, Vec<Value>)) -> Query {
        Query { cql, params }
    }
}

impl From<Query> for Operation {
    fn from(value: Query) -> Self {
        Self::Execute(value)
    }
}
