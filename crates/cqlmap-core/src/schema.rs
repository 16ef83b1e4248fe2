mod column_refs;
pub use column_refs::ColumnRefs;

mod field;
pub use field::Field;

mod record;
pub use record::{Record, RecordSchema};

mod registry;
pub use registry::Registry;

mod table;
pub use table::{Column, Table};
