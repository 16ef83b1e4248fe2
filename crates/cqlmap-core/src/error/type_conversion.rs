use super::Error;
use crate::stmt::Value;

/// A value read from a row cannot be loaded into the destination field.
#[derive(Debug)]
pub(super) struct TypeConversionError {
    kind: &'static str,
    to_type: &'static str,
}

impl std::error::Error for TypeConversionError {}

impl core::fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot convert {} to {}", self.kind, self.to_type)
    }
}

impl Error {
    /// Creates a type conversion error for `value`, which could not become a
    /// `to_type`.
    pub fn type_conversion(value: &Value, to_type: &'static str) -> Error {
        Error::from(super::ErrorKind::TypeConversion(TypeConversionError {
            kind: value.kind_name(),
            to_type,
        }))
    }

    /// Returns `true` if this error is a type conversion error.
    pub fn is_type_conversion(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeConversion(_))
    }
}
