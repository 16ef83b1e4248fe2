mod exec_log;
pub use exec_log::ExecLog;

mod logging_driver;
pub use logging_driver::LoggingDriver;

pub mod records;

use cqlmap::{session::Builder, Session};

#[macro_export]
macro_rules! records {
    (
        $( $record:ident ),*
    ) => {{
        let mut builder = cqlmap::Session::builder();
        $( builder.register::<$record>(); )*
        builder
    }};
}

/// Builds a session over a fresh [`LoggingDriver`].
pub fn setup(mut builder: Builder) -> (Session, ExecLog) {
    let driver = LoggingDriver::new();
    let log = ExecLog::new(driver.ops_log_handle(), driver.responses_handle());
    (builder.build(driver), log)
}
