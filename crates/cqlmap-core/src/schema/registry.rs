use super::{ColumnRefs, Record, Table};
use crate::stmt::{condition, Condition, Value};

use indexmap::IndexMap;
use std::{
    any::TypeId,
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

/// Resolves record types to [`Table`] metadata and caches the result.
///
/// A registry is normally owned by a session and shared with `Arc`. Tables
/// are resolved on first use and are immutable afterwards.
#[derive(Debug, Default)]
pub struct Registry {
    tables: RwLock<HashMap<TypeId, Arc<Table>>>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Resolves `R` eagerly and returns its table.
    pub fn register<R: Record>(&self) -> Arc<Table> {
        self.table::<R>()
    }

    /// Returns the table for `R`, resolving it on first use.
    ///
    /// # Panics
    ///
    /// Panics if `R`'s descriptor is invalid. See [`Table::from_schema`].
    pub fn table<R: Record>(&self) -> Arc<Table> {
        let type_id = TypeId::of::<R>();

        if let Some(table) = self
            .tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
        {
            return table.clone();
        }

        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);

        // Another caller may have resolved the type while the lock was free
        tables
            .entry(type_id)
            .or_insert_with(|| {
                let table = Table::from_schema(&R::schema());
                tracing::debug!(
                    record = R::schema().type_name,
                    table = %table.name,
                    columns = table.columns.len(),
                    key = ?table.key_columns,
                    "resolved record table"
                );
                Arc::new(table)
            })
            .clone()
    }

    /// Returns the table of `record`'s type.
    pub fn resolve<R: Record>(&self, _record: &R) -> Arc<Table> {
        self.table::<R>()
    }

    pub fn is_registered<R: Record>(&self) -> bool {
        self.tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&TypeId::of::<R>())
    }

    /// Number of resolved types.
    pub fn len(&self) -> usize {
        self.tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached table. Tables already handed out stay valid.
    pub fn clear(&self) {
        self.tables
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Writable references to `record`'s fields, keyed by column name.
    pub fn column_refs<'a, R: Record>(&self, record: &'a mut R) -> ColumnRefs<'a> {
        let table = self.table::<R>();
        let refs = table
            .columns
            .iter()
            .map(|column| column.name.clone())
            .zip(record.fields_mut())
            .collect();
        ColumnRefs::new(refs)
    }

    /// Current values of `record`'s fields, in column order.
    pub fn column_values<R: Record>(&self, record: &R) -> Vec<Value> {
        record.fields().into_iter().map(|field| field.value()).collect()
    }

    /// Current values of `record`'s fields, keyed by column name.
    pub fn bound_values<R: Record>(&self, record: &R) -> IndexMap<String, Value> {
        let table = self.table::<R>();
        table
            .columns
            .iter()
            .map(|column| column.name.clone())
            .zip(self.column_values(record))
            .collect()
    }

    /// Equality over `record`'s key columns, in key order: `a = ? AND b = ?`.
    pub fn key_eq<R: Record>(&self, record: &R) -> Condition {
        let table = self.table::<R>();
        let fields = record.fields();
        let mut key = table
            .key()
            .map(|column| condition::eq(&column.name, fields[column.position].value()));

        // A resolved table always has at least one key column
        let first = key.next().unwrap_or_else(condition::truth);
        Condition::conjunction(first, key)
    }
}
