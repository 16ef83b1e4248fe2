use super::Field;
use crate::{
    stmt::{Row, Value},
    Result,
};

use indexmap::IndexMap;

/// Writable references to a record's fields, keyed by column name.
///
/// Loading a row through `ColumnRefs` updates the borrowed record in place.
#[derive(Debug)]
pub struct ColumnRefs<'a> {
    refs: IndexMap<String, &'a mut dyn Field>,
}

impl<'a> ColumnRefs<'a> {
    pub(crate) fn new(refs: IndexMap<String, &'a mut dyn Field>) -> ColumnRefs<'a> {
        ColumnRefs { refs }
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.refs.contains_key(column)
    }

    pub fn get_mut(&mut self, column: &str) -> Option<&mut (dyn Field + 'a)> {
        self.refs.get_mut(column).map(|field| &mut **field)
    }

    /// The current value of the field mapped to `column`.
    pub fn value(&self, column: &str) -> Option<Value> {
        self.refs.get(column).map(|field| field.value())
    }

    /// Loads every column of `row` that has a field. Columns without a field
    /// are ignored.
    pub fn load(&mut self, row: Row) -> Result<()> {
        for (column, value) in row.iter() {
            if let Some(field) = self.refs.get_mut(column) {
                field
                    .load(value.clone())
                    .map_err(|e| e.context(crate::err!("failed to load column `{column}`")))?;
            }
        }
        Ok(())
    }
}
