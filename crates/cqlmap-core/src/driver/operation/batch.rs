use super::{Operation, Query};

/// The batch types the store supports.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BatchKind {
    /// Atomic across partitions, through the batch log
    #[default]
    Logged,

    /// No batch log; atomic only within one partition
    Unlogged,

    /// Counter updates only
    Counter,
}

/// Several writes submitted together.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub kind: BatchKind,
    pub queries: Vec<Query>,

    /// The batch carries a lightweight transaction and the driver must
    /// report whether it applied.
    pub conditional: bool,
}

impl Batch {
    pub fn new(kind: BatchKind) -> Batch {
        Batch {
            kind,
            queries: vec![],
            conditional: false,
        }
    }
}

impl From<Batch> for Operation {
    fn from(value: Batch) -> Self {
        Self::Batch(value)
    }
}
