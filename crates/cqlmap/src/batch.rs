use crate::{Session, Statement};

use cqlmap_core::{
    driver::{
        operation::{self, BatchKind},
        Operation,
    },
    Error, Result,
};

/// Statements submitted to the store together.
#[derive(Debug)]
pub struct Batch<'a> {
    session: &'a Session,
    batch: operation::Batch,

    /// First statement that failed to render
    error: Option<Error>,
}

impl<'a> Batch<'a> {
    pub(crate) fn new(session: &'a Session, kind: BatchKind) -> Batch<'a> {
        Batch {
            session,
            batch: operation::Batch::new(kind),
            error: None,
        }
    }

    pub fn kind(&self) -> BatchKind {
        self.batch.kind
    }

    pub fn len(&self) -> usize {
        self.batch.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batch.queries.is_empty()
    }

    /// Adds a statement. It is rendered immediately, so later changes to
    /// the records it was built from are not seen. A statement that fails
    /// to render makes `apply` and `apply_cas` fail without sending
    /// anything.
    pub fn add(mut self, stmt: Statement<'_>) -> Self {
        match stmt.query() {
            Ok(query) => self.batch.queries.push(query),
            Err(err) => {
                self.error.get_or_insert(err);
            }
        }
        self
    }

    pub fn add_all<'s>(self, stmts: impl IntoIterator<Item = Statement<'s>>) -> Self {
        stmts.into_iter().fold(self, Batch::add)
    }

    /// Submits the batch.
    pub async fn apply(mut self) -> Result<()> {
        if let Some(err) = self.error {
            return Err(err);
        }

        self.batch.conditional = false;
        self.session
            .exec(Operation::Batch(self.batch))
            .await?
            .into_void()
    }

    /// Submits a batch containing a lightweight transaction and reports
    /// whether it applied.
    pub async fn apply_cas(mut self) -> Result<bool> {
        if let Some(err) = self.error {
            return Err(err);
        }

        self.batch.conditional = true;
        self.session
            .exec(Operation::Batch(self.batch))
            .await?
            .into_applied()
    }
}
