mod assignments;
pub use assignments::{Assignment, Assignments};

mod blob;
pub use blob::Blob;

mod command;
pub use command::Command;

pub mod condition;
pub use condition::Condition;

mod direction;
pub use direction::Direction;

mod num;

mod order_by;
pub use order_by::{asc, desc, OrderBy};

mod primitive;
pub use primitive::Primitive;

mod row;
pub use row::Row;

mod row_stream;
pub use row_stream::RowStream;

mod statement;
pub use statement::Statement;

mod value;
pub use value::Value;
