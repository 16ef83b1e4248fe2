use super::Value;

use indexmap::IndexMap;

/// Explicit `SET` entries of an `UPDATE`, keyed by column.
///
/// Assigning a column twice keeps the latest assignment in the position of
/// the first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Assignments {
    assignments: IndexMap<String, Assignment>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Assignment {
    /// `col = ?`
    Set(Value),

    /// `col = col + ?`, for counter columns
    Increment(i64),

    /// `col = col - ?`, for counter columns
    Decrement(i64),
}

impl Assignment {
    /// The bound value for the assignment's placeholder.
    pub fn value(&self) -> Value {
        match self {
            Assignment::Set(value) => value.clone(),
            Assignment::Increment(n) | Assignment::Decrement(n) => Value::I64(*n),
        }
    }
}

impl Assignments {
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.assignments.contains_key(column)
    }

    pub fn get(&self, column: &str) -> Option<&Assignment> {
        self.assignments.get(column)
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.insert(column, Assignment::Set(value.into()));
    }

    pub fn increment(&mut self, column: impl Into<String>, by: i64) {
        self.insert(column, Assignment::Increment(by));
    }

    pub fn decrement(&mut self, column: impl Into<String>, by: i64) {
        self.insert(column, Assignment::Decrement(by));
    }

    pub fn insert(&mut self, column: impl Into<String>, assignment: Assignment) {
        self.assignments.insert(column.into(), assignment);
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Assignment)> + '_ {
        self.assignments.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<'a> IntoIterator for &'a Assignments {
    type Item = (&'a String, &'a Assignment);
    type IntoIter = indexmap::map::Iter<'a, String, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.iter()
    }
}
