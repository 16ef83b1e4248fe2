use crate::{
    stmt::{Primitive, Value},
    Result,
};

/// A writable slot for one column of a record.
///
/// Implemented for every [`Primitive`]. Records expose their fields as
/// `&dyn Field` for binding and `&mut dyn Field` for loading rows.
pub trait Field: Send + Sync {
    /// The field's current value.
    fn value(&self) -> Value;

    /// Replaces the field with a value read from a row.
    fn load(&mut self, value: Value) -> Result<()>;
}

impl<T: Primitive + Send + Sync> Field for T {
    fn value(&self) -> Value {
        self.to_value()
    }

    fn load(&mut self, value: Value) -> Result<()> {
        *self = T::from_value(value)?;
        Ok(())
    }
}

impl std::fmt::Debug for dyn Field + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.value(), f)
    }
}
