use super::Direction;

/// One entry of an `ORDER BY` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub column: String,
    pub direction: Direction,
}

impl OrderBy {
    pub fn new(column: impl Into<String>, direction: Direction) -> OrderBy {
        OrderBy {
            column: column.into(),
            direction,
        }
    }
}

/// Orders by `column` ascending.
pub fn asc(column: impl Into<String>) -> OrderBy {
    OrderBy::new(column, Direction::Asc)
}

/// Orders by `column` descending.
pub fn desc(column: impl Into<String>) -> OrderBy {
    OrderBy::new(column, Direction::Desc)
}
