use super::Field;

/// A struct mapped to a table.
///
/// Usually implemented with `#[derive(Record)]`. The field lists only
/// contain mapped (non-skipped) fields, in declaration order, so column
/// positions index into them.
pub trait Record: Send + Sync + 'static {
    /// The record's table descriptor.
    fn schema() -> RecordSchema;

    /// Mapped fields, for binding current values.
    fn fields(&self) -> Vec<&dyn Field>;

    /// Mapped fields, for loading rows in place.
    fn fields_mut(&mut self) -> Vec<&mut dyn Field>;
}

/// The declared mapping of a record type.
///
/// `key` holds column names. When it is empty, the first column is the
/// primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSchema {
    /// The bare Rust type name
    pub type_name: &'static str,

    /// Table name override
    pub table: Option<&'static str>,

    /// Column names, one per mapped field
    pub columns: &'static [&'static str],

    /// Primary key column names, in key order
    pub key: &'static [&'static str],
}

impl RecordSchema {
    /// The table name: the override if one was declared, else the type name.
    pub fn table_name(&self) -> &'static str {
        self.table.unwrap_or(self.type_name)
    }
}
