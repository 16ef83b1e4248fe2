use crate::{Iter, Session};

use cqlmap_core::{
    driver::{operation::Query, Operation},
    schema::{ColumnRefs, Field, Record},
    stmt::{self, Command, Condition, OrderBy, Row, Value},
    Error, Result,
};

/// A statement under construction.
///
/// Configuration methods take and return the statement by value; the last
/// call wins, except for [`filter`](Self::filter) and the assignment
/// methods, which accumulate. A terminal method (`exec`, `scan`,
/// `type_scan` or `iter`) consumes the statement.
#[derive(Debug)]
pub struct Statement<'a> {
    session: &'a Session,

    untyped: stmt::Statement,

    /// Fields that `type_scan` loads the first row into
    target: Option<ColumnRefs<'a>>,

    /// Filter used when no explicit filter was given
    default_filter: Option<Condition>,
}

impl<'a> Statement<'a> {
    pub(crate) fn new(session: &'a Session, command: Command) -> Statement<'a> {
        let mut untyped = stmt::Statement::new(command, "");
        untyped.keyspace = session.keyspace().map(str::to_string);

        Statement {
            session,
            untyped,
            target: None,
            default_filter: None,
        }
    }

    pub(crate) fn default_filter(mut self, condition: Condition) -> Self {
        self.default_filter = Some(condition);
        self
    }

    /// The command this statement runs.
    pub fn command(&self) -> Command {
        self.untyped.command
    }

    /// Targets the table `name`, as given.
    pub fn from(mut self, name: &str) -> Self {
        self.untyped.table = name.to_string();
        self
    }

    /// Targets `R`'s table.
    pub fn from_type<R: Record>(mut self) -> Self {
        self.untyped.table = self.session.table_name::<R>();
        self
    }

    /// Targets `record`'s table and binds its current column values. They
    /// are written by `INSERT` and by `UPDATE` for the selected
    /// [`columns`](Self::columns).
    pub fn bind<R: Record>(mut self, record: &R) -> Self {
        self.untyped.bound = self.session.registry().bound_values(record);
        self.from_type::<R>()
    }

    /// Targets `record`'s table and loads the first result row into it on
    /// [`type_scan`](Self::type_scan). Its current column values are bound
    /// as with [`bind`](Self::bind).
    pub fn map<R: Record>(mut self, record: &'a mut R) -> Self {
        self.untyped.bound = self.session.registry().bound_values(&*record);
        self.target = Some(self.session.registry().column_refs(record));
        self.from_type::<R>()
    }

    /// Columns to select, insert, update from the bound record, or delete.
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.untyped.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a condition to the `WHERE` clause. Conditions from every call
    /// are joined with `AND`.
    pub fn filter(mut self, condition: Condition) -> Self {
        self.untyped.push_filter(condition, []);
        self
    }

    /// Replaces the `WHERE` clause.
    pub fn replace_filter(mut self, condition: Condition) -> Self {
        self.untyped.condition = None;
        self.filter(condition)
    }

    pub fn order_by(mut self, orders: impl IntoIterator<Item = OrderBy>) -> Self {
        self.untyped.orders = orders.into_iter().collect();
        self
    }

    /// Assigns `value` to `column` in an `UPDATE`.
    pub fn set(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.untyped.assignments.set(column, value);
        self
    }

    /// Adds `by` to the counter `column` in an `UPDATE`.
    pub fn increment(mut self, column: &str, by: i64) -> Self {
        self.untyped.assignments.increment(column, by);
        self
    }

    /// Subtracts `by` from the counter `column` in an `UPDATE`.
    pub fn decrement(mut self, column: &str, by: i64) -> Self {
        self.untyped.assignments.decrement(column, by);
        self
    }

    pub fn limit(mut self, n: u64) -> Self {
        self.untyped.limit = Some(n);
        self
    }

    /// Time to live of written values, in seconds.
    pub fn ttl(mut self, seconds: u32) -> Self {
        self.untyped.ttl = Some(seconds);
        self
    }

    /// Write timestamp, in microseconds since the epoch.
    pub fn timestamp(mut self, microseconds: i64) -> Self {
        self.untyped.timestamp = Some(microseconds);
        self
    }

    pub fn allow_filtering(mut self) -> Self {
        self.untyped.allow_filtering = true;
        self
    }

    /// Makes an `UPDATE` or `DELETE` conditional on the row existing.
    /// [`exec`](Self::exec) then fails with a record not found error when
    /// the row is missing.
    pub fn if_exists(mut self) -> Self {
        self.untyped.if_exists = true;
        self
    }

    /// Makes an `INSERT` conditional on the row not existing.
    /// [`exec`](Self::exec) then fails with a condition failed error when the
    /// row exists.
    pub fn if_not_exists(mut self) -> Self {
        self.untyped.if_not_exists = true;
        self
    }

    /// The CQL text and arguments this statement would execute.
    ///
    /// Fails with an invalid statement error when a write names a column
    /// with no bound value, or an `UPDATE` sets nothing.
    pub fn build(&self) -> Result<(String, Vec<Value>)> {
        let query = self.query()?;
        Ok((query.cql, query.params))
    }

    pub(crate) fn query(&self) -> Result<Query> {
        let query = match (&self.untyped.condition, &self.default_filter) {
            (None, Some(default_filter)) => {
                let mut untyped = self.untyped.clone();
                untyped.condition = Some(default_filter.clone());
                untyped.validate()?;
                self.session.serializer().query(&untyped)
            }
            _ => {
                self.untyped.validate()?;
                self.session.serializer().query(&self.untyped)
            }
        };
        Ok(query)
    }

    pub(crate) fn is_conditional(&self) -> bool {
        self.untyped.is_conditional()
    }

    /// Executes the statement, discarding any rows.
    pub async fn exec(self) -> Result<()> {
        let query = self.query()?;

        if !self.is_conditional() {
            return self
                .session
                .exec(Operation::Execute(query))
                .await?
                .into_void();
        }

        let applied = self
            .session
            .exec(Operation::Conditional(query))
            .await?
            .into_applied()?;

        match (applied, self.untyped.command) {
            (true, _) => Ok(()),
            (false, Command::Insert) => Err(Error::condition_failed(format!(
                "row already exists in {}",
                self.untyped.table
            ))),
            (false, _) => Err(Error::record_not_found(format!(
                "table={}",
                self.untyped.table
            ))),
        }
    }

    /// Loads the first result row into the record given to
    /// [`map`](Self::map).
    pub async fn type_scan(self) -> Result<()> {
        let query = self.query()?;
        let Some(mut target) = self.target else {
            cqlmap_core::bail!("type_scan requires a record given to `map`");
        };

        let row = fetch_first(self.session, query, &self.untyped.table).await?;
        target.load(row)
    }

    /// Loads the columns of the first result row, in order, into `dest`.
    pub async fn scan(self, dest: &mut [&mut dyn Field]) -> Result<()> {
        let query = self.query()?;
        let row = fetch_first(self.session, query, &self.untyped.table).await?;

        if row.len() < dest.len() {
            return Err(Error::invalid_result(format!(
                "expected at least {} columns, got {}",
                dest.len(),
                row.len()
            )));
        }

        for (field, value) in dest.iter_mut().zip(row.into_values()) {
            field.load(value)?;
        }

        Ok(())
    }

    /// Returns a cursor over the result rows. The query runs on the first
    /// read.
    pub fn iter(self) -> Iter<'a> {
        Iter::new(self.session, self.query())
    }
}

async fn fetch_first(session: &Session, query: Query, table: &str) -> Result<Row> {
    let mut rows = session.exec(Operation::Fetch(query)).await?.into_rows()?;

    match rows.next().await {
        Some(row) => row,
        None => Err(Error::record_not_found(format!("table={table}"))),
    }
}
