pub mod batch;
pub use batch::Batch;

pub mod iter;
pub use iter::Iter;

pub mod session;
pub use session::Session;

pub mod stmt;
pub use stmt::Statement;

pub use cqlmap_core::{
    async_trait,
    driver::{self, operation::BatchKind, Driver},
    schema::{self, Field, Record, Registry, Table},
    stmt::{
        asc,
        condition::{self, and, contains, contains_key, eq, ge, gt, in_list, le, lt, ne, or, truth},
        desc, Blob, Condition, Direction, OrderBy, Primitive, Row, Value,
    },
    Error, Result,
};

pub use cqlmap_macros::Record;

pub use uuid::Uuid;

/// Parses a UUID literal.
///
/// # Panics
///
/// Panics if `input` is not a valid UUID. Meant for literals in tests and
/// fixtures; parse untrusted input with [`Uuid::parse_str`].
#[track_caller]
pub fn uuid(input: &str) -> Uuid {
    match Uuid::parse_str(input) {
        Ok(uuid) => uuid,
        Err(err) => panic!("invalid UUID literal `{input}`: {err}"),
    }
}

#[doc(hidden)]
pub mod codegen_support {
    pub use cqlmap_core::schema::{Field, Record, RecordSchema};
}
