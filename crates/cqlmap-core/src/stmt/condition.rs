//! Predicate fragments for `WHERE` clauses.
//!
//! A [`Condition`] is a CQL fragment with `?` placeholders and the values
//! bound to them, in placeholder order. Conditions are combined into new
//! conditions and never modified in place.

use super::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    cql: String,
    values: Vec<Value>,
}

impl Condition {
    pub fn new(cql: impl Into<String>, values: Vec<Value>) -> Condition {
        Condition {
            cql: cql.into(),
            values,
        }
    }

    /// The CQL fragment.
    pub fn cql(&self) -> &str {
        &self.cql
    }

    /// Values bound to the fragment's placeholders, in order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.cql, self.values)
    }

    /// Joins conditions with `AND` without surrounding parentheses.
    ///
    /// CQL does not accept a parenthesized relation list directly after
    /// `WHERE`, so this is the form used for top-level filters and for key
    /// equality.
    pub fn conjunction(first: Condition, rest: impl IntoIterator<Item = Condition>) -> Condition {
        fold(first, rest, " AND ", false)
    }

    /// Returns `true` for an `IN ()` with no candidates, which matches no
    /// rows.
    pub fn is_vacuous(&self) -> bool {
        self.values.is_empty() && self.cql.ends_with(" IN ()")
    }
}

fn fold(
    first: Condition,
    rest: impl IntoIterator<Item = Condition>,
    op: &str,
    parenthesize: bool,
) -> Condition {
    let mut rest = rest.into_iter().peekable();

    if rest.peek().is_none() {
        return first;
    }

    let Condition {
        mut cql,
        mut values,
    } = first;

    for rhs in rest {
        cql.push_str(op);
        cql.push_str(&rhs.cql);
        values.extend(rhs.values);
    }

    if parenthesize {
        cql = format!("({cql})");
    }

    Condition { cql, values }
}

fn binary(column: &str, op: &str, value: impl Into<Value>) -> Condition {
    Condition {
        cql: format!("{column} {op} ?"),
        values: vec![value.into()],
    }
}

/// `column = ?`
pub fn eq(column: &str, value: impl Into<Value>) -> Condition {
    binary(column, "=", value)
}

/// `column != ?`
pub fn ne(column: &str, value: impl Into<Value>) -> Condition {
    binary(column, "!=", value)
}

/// `column > ?`
pub fn gt(column: &str, value: impl Into<Value>) -> Condition {
    binary(column, ">", value)
}

/// `column >= ?`
pub fn ge(column: &str, value: impl Into<Value>) -> Condition {
    binary(column, ">=", value)
}

/// `column < ?`
pub fn lt(column: &str, value: impl Into<Value>) -> Condition {
    binary(column, "<", value)
}

/// `column <= ?`
pub fn le(column: &str, value: impl Into<Value>) -> Condition {
    binary(column, "<=", value)
}

/// `column IN (?,?,...)` with one placeholder per value.
///
/// An empty list renders `column IN ()`; see [`Condition::is_vacuous`].
pub fn in_list<V: Into<Value>>(column: &str, values: impl IntoIterator<Item = V>) -> Condition {
    let values: Vec<Value> = values.into_iter().map(Into::into).collect();
    let placeholders = vec!["?"; values.len()].join(",");
    Condition {
        cql: format!("{column} IN ({placeholders})"),
        values,
    }
}

/// `column CONTAINS ?`, for list, set and map values.
pub fn contains(column: &str, value: impl Into<Value>) -> Condition {
    binary(column, "CONTAINS", value)
}

/// `column CONTAINS KEY ?`, for map keys.
pub fn contains_key(column: &str, value: impl Into<Value>) -> Condition {
    binary(column, "CONTAINS KEY", value)
}

/// Parenthesized conjunction. A single condition is returned unchanged.
pub fn and(first: Condition, rest: impl IntoIterator<Item = Condition>) -> Condition {
    fold(first, rest, " AND ", true)
}

/// Parenthesized disjunction. A single condition is returned unchanged.
pub fn or(first: Condition, rest: impl IntoIterator<Item = Condition>) -> Condition {
    fold(first, rest, " OR ", true)
}

/// The always-true condition.
pub fn truth() -> Condition {
    Condition {
        cql: "true".to_string(),
        values: vec![],
    }
}
