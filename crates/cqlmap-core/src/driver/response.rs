use crate::{stmt::RowStream, Error, Result};

#[derive(Debug)]
pub enum Response {
    /// The operation completed and returned nothing
    Void,

    /// Whether a lightweight transaction applied
    Applied(bool),

    /// Result rows
    Rows(RowStream),
}

impl Response {
    pub fn rows(rows: impl Into<RowStream>) -> Self {
        Self::Rows(rows.into())
    }

    pub fn empty_rows() -> Self {
        Self::Rows(RowStream::default())
    }

    pub fn is_rows(&self) -> bool {
        matches!(self, Self::Rows(_))
    }

    fn kind_name(&self) -> &'static str {
        match self {
            Self::Void => "Void",
            Self::Applied(_) => "Applied",
            Self::Rows(_) => "Rows",
        }
    }

    pub fn into_rows(self) -> Result<RowStream> {
        match self {
            Self::Rows(rows) => Ok(rows),
            other => Err(Error::invalid_result(format!(
                "expected Rows, got {}",
                other.kind_name()
            ))),
        }
    }

    pub fn into_applied(self) -> Result<bool> {
        match self {
            Self::Applied(applied) => Ok(applied),
            other => Err(Error::invalid_result(format!(
                "expected Applied, got {}",
                other.kind_name()
            ))),
        }
    }

    /// Accepts any response to a plain write. Drivers may answer a write
    /// with empty rows.
    pub fn into_void(self) -> Result<()> {
        match self {
            Self::Void | Self::Rows(_) => Ok(()),
            Self::Applied(_) => Err(Error::invalid_result("expected Void, got Applied")),
        }
    }
}
