use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use cqlmap_core::{
    async_trait,
    driver::{Driver, Operation, Response},
    Result,
};

/// A driver that records every operation and answers from a script.
///
/// Operations with no scripted response get the shape the facade expects
/// for a successful call: `Void` for writes and batches, an applied
/// `Applied(true)` for conditional writes and no rows for reads.
#[derive(Debug, Default)]
pub struct LoggingDriver {
    /// Log of all operations executed through this driver
    ops_log: Arc<Mutex<Vec<Operation>>>,

    /// Responses handed out in order, before falling back to defaults
    responses: Arc<Mutex<VecDeque<Result<Response>>>>,
}

impl LoggingDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a handle to access the operations log
    pub fn ops_log_handle(&self) -> Arc<Mutex<Vec<Operation>>> {
        self.ops_log.clone()
    }

    /// Get a handle to push scripted responses
    pub fn responses_handle(&self) -> Arc<Mutex<VecDeque<Result<Response>>>> {
        self.responses.clone()
    }
}

#[async_trait]
impl Driver for LoggingDriver {
    async fn exec(&self, op: Operation) -> Result<Response> {
        let scripted = self
            .responses
            .lock()
            .expect("Failed to acquire responses lock")
            .pop_front();

        let response = scripted.unwrap_or_else(|| {
            Ok(match &op {
                Operation::Execute(_) => Response::Void,
                Operation::Conditional(_) => Response::Applied(true),
                Operation::Fetch(_) => Response::empty_rows(),
                Operation::Batch(batch) if batch.conditional => Response::Applied(true),
                Operation::Batch(_) => Response::Void,
            })
        });

        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .push(op);

        response
    }
}
