use super::{Session, Shared};

use cqlmap_core::{
    schema::{Record, Registry, Table},
    Driver,
};
use cqlmap_cql::Serializer;

use std::sync::Arc;

#[derive(Default)]
pub struct Builder {
    /// Record types to resolve when the session is built
    registrations: Vec<fn(&Registry) -> Arc<Table>>,

    /// Registry shared with other sessions
    registry: Option<Arc<Registry>>,

    keyspace: Option<String>,

    table_name_prefix: Option<String>,
}

impl Builder {
    /// Resolve `R`'s table when the session is built instead of on first
    /// use. Invalid records then panic at startup.
    pub fn register<R: Record>(&mut self) -> &mut Self {
        self.registrations.push(Registry::register::<R>);
        self
    }

    /// Set the table name prefix for all record tables
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = Some(prefix.to_string());
        self
    }

    /// Qualify every table name with `keyspace`
    pub fn keyspace(&mut self, keyspace: &str) -> &mut Self {
        self.keyspace = Some(keyspace.to_string());
        self
    }

    /// Use an existing registry instead of a new one
    pub fn registry(&mut self, registry: Arc<Registry>) -> &mut Self {
        self.registry = Some(registry);
        self
    }

    pub fn build(&mut self, driver: impl Driver) -> Session {
        let registry = self.registry.clone().unwrap_or_default();

        for register in &self.registrations {
            register(&registry);
        }

        tracing::debug!(
            keyspace = ?self.keyspace,
            table_name_prefix = ?self.table_name_prefix,
            records = registry.len(),
            "session built"
        );

        Session {
            shared: Arc::new(Shared {
                driver: Arc::new(driver),
                registry,
                serializer: Serializer::new(),
                keyspace: self.keyspace.clone(),
                table_name_prefix: self.table_name_prefix.clone(),
            }),
        }
    }
}
