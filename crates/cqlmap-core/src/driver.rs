mod response;
pub use response::Response;

pub mod operation;
pub use operation::Operation;

use crate::async_trait;

use std::fmt::Debug;

/// The store driver that statements are executed against.
///
/// A driver owns the connection to the cluster, encodes bound values for the
/// wire and decodes result rows into [`Row`](crate::stmt::Row)s. Retries,
/// pooling and consistency settings are the driver's concern.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Execute a database operation
    async fn exec(&self, op: Operation) -> crate::Result<Response>;
}
