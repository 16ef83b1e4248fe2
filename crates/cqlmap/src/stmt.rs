mod statement;
pub use statement::Statement;

pub use cqlmap_core::stmt::{
    asc, condition, desc, Assignment, Assignments, Blob, Command, Condition, Direction, OrderBy,
    Primitive, Row, RowStream, Value,
};
