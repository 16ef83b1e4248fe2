use super::{params::Bind, Comma, Delimited, Formatter, Params, TableName, ToCql};

use cqlmap_core::stmt::{Assignment, Command, OrderBy, Statement, Value};

impl ToCql for &Statement {
    fn to_cql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self.command {
            Command::Select => select(self, f),
            Command::Insert => insert(self, f),
            Command::Delete => delete(self, f),
            Command::Update => update(self, f),
            Command::Count => count(self, f),
        }
    }
}

fn table_name(stmt: &Statement) -> TableName<'_> {
    TableName {
        keyspace: stmt.keyspace.as_deref(),
        table: &stmt.table,
    }
}

fn bound(stmt: &Statement, column: &str) -> Value {
    stmt.bound_value(column).cloned().unwrap_or_default()
}

fn select<P: Params>(stmt: &Statement, f: &mut Formatter<'_, P>) {
    let table = table_name(stmt);

    if stmt.columns.is_empty() {
        fmt!(f, "SELECT * FROM " table);
    } else {
        fmt!(f, "SELECT " Comma(&stmt.columns) " FROM " table);
    }

    filter(stmt, f);

    if !stmt.orders.is_empty() {
        fmt!(f, " ORDER BY " Comma(&stmt.orders));
    }

    // The store rejects `LIMIT 0`
    if let Some(limit) = stmt.limit.filter(|&n| n > 0) {
        fmt!(f, " LIMIT " limit);
    }

    if stmt.allow_filtering {
        fmt!(f, " ALLOW FILTERING");
    }
}

fn insert<P: Params>(stmt: &Statement, f: &mut Formatter<'_, P>) {
    let columns = stmt.insert_columns();
    // Sessions reject unbound columns with `Statement::validate` first
    let values: Vec<Value> = columns.iter().map(|c| bound(stmt, c)).collect();

    fmt!(
        f,
        "INSERT INTO " table_name(stmt)
        " (" Comma(columns.iter().copied()) ") VALUES (" Delimited(values.iter().map(Bind), ",") ")"
    );

    if stmt.if_not_exists {
        fmt!(f, " IF NOT EXISTS");
    }

    using(stmt.ttl, stmt.timestamp, f);
}

fn delete<P: Params>(stmt: &Statement, f: &mut Formatter<'_, P>) {
    if stmt.columns.is_empty() {
        fmt!(f, "DELETE FROM " table_name(stmt));
    } else {
        fmt!(f, "DELETE " Comma(&stmt.columns) " FROM " table_name(stmt));
    }

    using(None, stmt.timestamp, f);
    filter(stmt, f);

    if stmt.if_exists {
        fmt!(f, " IF EXISTS");
    }
}

fn update<P: Params>(stmt: &Statement, f: &mut Formatter<'_, P>) {
    fmt!(f, "UPDATE " table_name(stmt));

    using(stmt.ttl, stmt.timestamp, f);

    // Projected columns take their bound values, unless an explicit
    // assignment for the same column replaces them.
    let bound = stmt
        .columns
        .iter()
        .filter(|column| !stmt.assignments.contains(column))
        .map(|column| SetEntry::Bound(column, bound(stmt, column)));
    let explicit = stmt
        .assignments
        .iter()
        .map(|(column, assignment)| SetEntry::Explicit(column, assignment));
    let entries: Vec<SetEntry<'_>> = bound.chain(explicit).collect();

    if !entries.is_empty() {
        fmt!(f, " SET " Comma(entries));
    }

    filter(stmt, f);

    if stmt.if_exists {
        fmt!(f, " IF EXISTS");
    }
}

fn count<P: Params>(stmt: &Statement, f: &mut Formatter<'_, P>) {
    fmt!(f, "SELECT COUNT(1) FROM " table_name(stmt));
    filter(stmt, f);
}

fn filter<P: Params>(stmt: &Statement, f: &mut Formatter<'_, P>) {
    if let Some(condition) = &stmt.condition {
        fmt!(f, " WHERE " condition);
    }
}

/// Zero or negative values mean unset.
fn using<P: Params>(ttl: Option<u32>, timestamp: Option<i64>, f: &mut Formatter<'_, P>) {
    match (ttl.filter(|&n| n > 0), timestamp.filter(|&t| t > 0)) {
        (Some(ttl), Some(timestamp)) => fmt!(f, " USING TTL " ttl " AND TIMESTAMP " timestamp),
        (Some(ttl), None) => fmt!(f, " USING TTL " ttl),
        (None, Some(timestamp)) => fmt!(f, " USING TIMESTAMP " timestamp),
        (None, None) => {}
    }
}

enum SetEntry<'a> {
    Bound(&'a str, Value),
    Explicit(&'a str, &'a Assignment),
}

impl ToCql for SetEntry<'_> {
    fn to_cql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            SetEntry::Bound(column, value) => fmt!(f, column " = " Bind(&value)),
            SetEntry::Explicit(column, assignment) => {
                let value = assignment.value();
                let value = Bind(&value);
                match assignment {
                    Assignment::Set(_) => fmt!(f, column " = " value),
                    Assignment::Increment(_) => fmt!(f, column " = " column " + " value),
                    Assignment::Decrement(_) => fmt!(f, column " = " column " - " value),
                }
            }
        }
    }
}

impl ToCql for &OrderBy {
    fn to_cql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, &self.column " " self.direction.as_str());
    }
}
