use super::{Assignments, Command, Condition, OrderBy, Value};
use crate::{Error, Result};

use indexmap::IndexMap;

/// The state of one statement, independent of how it is rendered.
///
/// A statement is built for one command, rendered once and discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub command: Command,

    /// Keyspace qualifying the table name, if any
    pub keyspace: Option<String>,

    pub table: String,

    /// Explicit column projection. Empty means every column (`*` for
    /// `SELECT`, every bound column for `INSERT`).
    pub columns: Vec<String>,

    /// The merged `WHERE` condition
    pub condition: Option<Condition>,

    pub orders: Vec<OrderBy>,

    /// Explicit `SET` entries of an `UPDATE`
    pub assignments: Assignments,

    /// Current column values of a bound record, in column order
    pub bound: IndexMap<String, Value>,

    pub limit: Option<u64>,

    /// Time to live, in seconds
    pub ttl: Option<u32>,

    /// Write timestamp, in microseconds
    pub timestamp: Option<i64>,

    pub allow_filtering: bool,
    pub if_exists: bool,
    pub if_not_exists: bool,
}

impl Statement {
    pub fn new(command: Command, table: impl Into<String>) -> Statement {
        Statement {
            command,
            keyspace: None,
            table: table.into(),
            columns: vec![],
            condition: None,
            orders: vec![],
            assignments: Assignments::default(),
            bound: IndexMap::new(),
            limit: None,
            ttl: None,
            timestamp: None,
            allow_filtering: false,
            if_exists: false,
            if_not_exists: false,
        }
    }

    /// Adds conditions to the `WHERE` clause, joining them onto any existing
    /// condition with `AND`.
    pub fn push_filter(&mut self, first: Condition, rest: impl IntoIterator<Item = Condition>) {
        let merged = Condition::conjunction(first, rest);
        self.condition = Some(match self.condition.take() {
            Some(existing) => Condition::conjunction(existing, [merged]),
            None => merged,
        });
    }

    /// Columns written by an `INSERT`: the projection if set, else every
    /// bound column.
    pub fn insert_columns(&self) -> Vec<&str> {
        if self.columns.is_empty() {
            self.bound.keys().map(String::as_str).collect()
        } else {
            self.columns.iter().map(String::as_str).collect()
        }
    }

    /// The bound value of `column`.
    pub fn bound_value(&self, column: &str) -> Option<&Value> {
        self.bound.get(column)
    }

    /// Checks that the statement renders into a complete write. Every
    /// column an `INSERT` or `UPDATE` takes from the bound record must be
    /// bound, and an `UPDATE` must set something.
    pub fn validate(&self) -> Result<()> {
        match self.command {
            Command::Insert => {
                let columns = self.insert_columns();
                if columns.is_empty() {
                    return Err(Error::invalid_statement(format!(
                        "INSERT into {} has no columns",
                        self.table
                    )));
                }
                self.check_bound(columns)
            }
            Command::Update => {
                self.check_bound(
                    self.columns
                        .iter()
                        .filter(|column| !self.assignments.contains(column))
                        .map(String::as_str),
                )?;

                if self.columns.is_empty() && self.assignments.is_empty() {
                    return Err(Error::invalid_statement(format!(
                        "UPDATE of {} sets no columns",
                        self.table
                    )));
                }
                Ok(())
            }
            Command::Select | Command::Delete | Command::Count => Ok(()),
        }
    }

    fn check_bound<'a>(&self, columns: impl IntoIterator<Item = &'a str>) -> Result<()> {
        for column in columns {
            if !self.bound.contains_key(column) {
                return Err(Error::invalid_statement(format!(
                    "column `{column}` has no bound value for {}",
                    self.table
                )));
            }
        }
        Ok(())
    }

    /// `true` when the statement must report whether the store applied it.
    pub fn is_conditional(&self) -> bool {
        (self.if_exists && self.command.is_guarded_write())
            || (self.if_not_exists && self.command == Command::Insert)
    }
}
