mod builder;
pub use builder::Builder;

use crate::{Batch, Statement};

use cqlmap_core::{
    driver::{operation::BatchKind, Driver, Operation, Response},
    schema::{Record, Registry},
    stmt::Command,
    Result,
};
use cqlmap_cql::Serializer;

use std::sync::Arc;

/// A handle to a store, through a [`Driver`].
///
/// Cloning a session is cheap; clones share the driver and the registry.
#[derive(Clone, Debug)]
pub struct Session {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    driver: Arc<dyn Driver>,
    registry: Arc<Registry>,
    serializer: Serializer,
    keyspace: Option<String>,
    table_name_prefix: Option<String>,
}

impl Session {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.shared.registry
    }

    pub fn driver(&self) -> &dyn Driver {
        &*self.shared.driver
    }

    pub fn keyspace(&self) -> Option<&str> {
        self.shared.keyspace.as_deref()
    }

    pub(crate) fn serializer(&self) -> &Serializer {
        &self.shared.serializer
    }

    /// The table name of `R`, with the session's table name prefix.
    pub fn table_name<R: Record>(&self) -> String {
        let table = self.shared.registry.table::<R>();
        match &self.shared.table_name_prefix {
            Some(prefix) => format!("{prefix}{}", table.name),
            None => table.name.clone(),
        }
    }

    /// Hands an operation to the driver.
    pub async fn exec(&self, op: Operation) -> Result<Response> {
        let args = match &op {
            Operation::Execute(query) | Operation::Conditional(query) | Operation::Fetch(query) => {
                query.params.len()
            }
            Operation::Batch(batch) => batch.queries.iter().map(|q| q.params.len()).sum(),
        };

        tracing::debug!(op = op.name(), cql = ?op.cql(), args, "dispatching operation");

        self.shared.driver.exec(op).await
    }

    /// Starts a statement for `command` with no table set. Use
    /// [`Statement::from`] or [`Statement::from_type`] to pick one.
    pub fn statement(&self, command: Command) -> Statement<'_> {
        Statement::new(self, command)
    }

    /// `SELECT` from `R`'s table, loading results into `record`.
    pub fn select<'a, R: Record>(&'a self, record: &'a mut R) -> Statement<'a> {
        Statement::new(self, Command::Select).map(record)
    }

    /// `INSERT` of every column of `record`.
    pub fn insert<R: Record>(&self, record: &R) -> Statement<'_> {
        Statement::new(self, Command::Insert).bind(record)
    }

    /// `UPDATE` of `record`'s table. Columns selected with
    /// [`Statement::columns`] take `record`'s current values. Unless a filter
    /// is given, the row is matched by `record`'s key.
    pub fn update<R: Record>(&self, record: &R) -> Statement<'_> {
        let key = self.registry().key_eq(record);
        Statement::new(self, Command::Update)
            .bind(record)
            .default_filter(key)
    }

    /// `DELETE` from `record`'s table. Unless a filter is given, the row is
    /// matched by `record`'s key.
    pub fn delete<R: Record>(&self, record: &R) -> Statement<'_> {
        let key = self.registry().key_eq(record);
        Statement::new(self, Command::Delete)
            .from_type::<R>()
            .default_filter(key)
    }

    /// `SELECT COUNT(1)` from `R`'s table.
    pub fn count<R: Record>(&self) -> Statement<'_> {
        Statement::new(self, Command::Count).from_type::<R>()
    }

    pub fn batch(&self, kind: BatchKind) -> Batch<'_> {
        Batch::new(self, kind)
    }

    /// Loads the row matching `record`'s key into `record`.
    pub async fn get<R: Record>(&self, record: &mut R) -> Result<()> {
        let key = self.registry().key_eq(&*record);
        self.select(record).filter(key).type_scan().await
    }

    /// Writes every column of `record`.
    pub async fn set<R: Record>(&self, record: &R) -> Result<()> {
        self.insert(record).exec().await
    }

    /// Deletes the row matching `record`'s key.
    pub async fn del<R: Record>(&self, record: &R) -> Result<()> {
        self.delete(record).exec().await
    }

    /// Returns `true` if a row matches `record`'s key.
    pub async fn exists<R: Record>(&self, record: &R) -> Result<bool> {
        let mut count = 0i64;
        self.count::<R>()
            .filter(self.registry().key_eq(record))
            .scan(&mut [&mut count])
            .await?;
        Ok(count > 0)
    }
}
