mod batch;
pub use batch::{Batch, BatchKind};

mod query;
pub use query::Query;

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Execute a write, answered with [`Response::Void`](super::Response::Void)
    Execute(Query),

    /// Execute a lightweight transaction, answered with
    /// [`Response::Applied`](super::Response::Applied)
    Conditional(Query),

    /// Run a query, answered with [`Response::Rows`](super::Response::Rows)
    Fetch(Query),

    /// Submit several writes at once. Answered with `Void`, or with
    /// `Applied` when the batch is conditional.
    Batch(Batch),
}

impl Operation {
    /// The CQL text of every query in the operation.
    pub fn cql(&self) -> Vec<&str> {
        match self {
            Operation::Execute(query) | Operation::Conditional(query) | Operation::Fetch(query) => {
                vec![query.cql.as_str()]
            }
            Operation::Batch(batch) => batch.queries.iter().map(|q| q.cql.as_str()).collect(),
        }
    }

    pub fn is_conditional(&self) -> bool {
        match self {
            Operation::Conditional(_) => true,
            Operation::Batch(batch) => batch.conditional,
            _ => false,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Execute(_) => "execute",
            Operation::Conditional(_) => "conditional",
            Operation::Fetch(_) => "fetch",
            Operation::Batch(_) => "batch",
        }
    }
}
