use super::Blob;

use uuid::Uuid;

/// A dynamically typed CQL value, used both for bound arguments and for
/// the columns of a result row.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value, also used for unset columns
    #[default]
    Null,

    /// `boolean`
    Bool(bool),

    /// `tinyint`
    I8(i8),

    /// `smallint`
    I16(i16),

    /// `int`
    I32(i32),

    /// `bigint` and `counter`
    I64(i64),

    /// `float`
    F32(f32),

    /// `double`
    F64(f64),

    /// `text` / `varchar` / `ascii`
    String(String),

    /// `blob`
    Bytes(Vec<u8>),

    /// `uuid` / `timeuuid`
    Uuid(Uuid),

    /// `timestamp`, milliseconds since the Unix epoch
    Timestamp(i64),

    /// `list<T>`
    List(Vec<Value>),

    /// `set<T>`, in the order the store returned them
    Set(Vec<Value>),

    /// `map<K, V>`, as ordered key/value pairs
    Map(Vec<(Value, Value)>),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_collection(&self) -> bool {
        matches!(self, Self::List(_) | Self::Set(_) | Self::Map(_))
    }

    /// The variant name, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::I8(_) => "I8",
            Self::I16(_) => "I16",
            Self::I32(_) => "I32",
            Self::I64(_) => "I64",
            Self::F32(_) => "F32",
            Self::F64(_) => "F64",
            Self::String(_) => "String",
            Self::Bytes(_) => "Bytes",
            Self::Uuid(_) => "Uuid",
            Self::Timestamp(_) => "Timestamp",
            Self::List(_) => "List",
            Self::Set(_) => "Set",
            Self::Map(_) => "Map",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the value as an `i64` if it is any integer variant.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::I8(v) => Some(v.into()),
            Self::I16(v) => Some(v.into()),
            Self::I32(v) => Some(v.into()),
            Self::I64(v) => Some(v),
            _ => None,
        }
    }

    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<Uuid> for Value {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl From<&Uuid> for Value {
    fn from(value: &Uuid) -> Self {
        Self::Uuid(*value)
    }
}

impl From<Blob> for Value {
    fn from(value: Blob) -> Self {
        Self::Bytes(value.0)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<std::collections::BTreeSet<T>> for Value {
    fn from(value: std::collections::BTreeSet<T>) -> Self {
        Self::Set(value.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<Value>, V: Into<Value>> From<std::collections::BTreeMap<K, V>> for Value {
    fn from(value: std::collections::BTreeMap<K, V>) -> Self {
        Self::Map(value.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<Value>, V: Into<Value>, S> From<std::collections::HashMap<K, V, S>> for Value {
    fn from(value: std::collections::HashMap<K, V, S>) -> Self {
        Self::Map(value.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::DateTime<chrono::Utc>> for Value {
    fn from(value: chrono::DateTime<chrono::Utc>) -> Self {
        Self::Timestamp(value.timestamp_millis())
    }
}
