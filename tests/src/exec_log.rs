use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use cqlmap::{Error, Row, Value};
use cqlmap_core::driver::{Operation, Response};

/// The test's view of a [`LoggingDriver`](crate::LoggingDriver): what was
/// sent, and what will be answered next.
#[derive(Clone)]
pub struct ExecLog {
    ops: Arc<Mutex<Vec<Operation>>>,
    responses: Arc<Mutex<VecDeque<cqlmap::Result<Response>>>>,
}

impl ExecLog {
    pub(crate) fn new(
        ops: Arc<Mutex<Vec<Operation>>>,
        responses: Arc<Mutex<VecDeque<cqlmap::Result<Response>>>>,
    ) -> Self {
        Self { ops, responses }
    }

    /// Get the number of logged operations
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Queue the response to the next operation
    pub fn respond(&self, response: Response) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    /// Queue a result set for the next operation
    pub fn respond_rows(&self, rows: impl IntoIterator<Item = Row>) {
        self.respond(Response::rows(rows.into_iter().collect::<Vec<_>>()));
    }

    /// Queue a failure for the next operation
    pub fn fail(&self, err: Error) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    /// Remove and return the first operation from the log
    pub fn pop(&self) -> Option<Operation> {
        let mut ops = self.ops.lock().unwrap();
        if ops.is_empty() {
            None
        } else {
            Some(ops.remove(0))
        }
    }

    /// Pop the first operation and return its CQL text and arguments.
    ///
    /// # Panics
    ///
    /// Panics if the log is empty or the operation is a batch.
    pub fn pop_query(&self) -> (String, Vec<Value>) {
        match self.pop().expect("expected an operation") {
            Operation::Execute(query) | Operation::Conditional(query) | Operation::Fetch(query) => {
                (query.cql, query.params)
            }
            op => panic!("expected a single query, got {op:#?}"),
        }
    }

    pub fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }
}
