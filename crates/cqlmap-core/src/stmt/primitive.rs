use super::{Blob, Value};
use crate::{Error, Result};

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::hash::{BuildHasher, Hash};
use uuid::Uuid;

/// Conversion between a Rust field type and a CQL [`Value`].
///
/// Every `Primitive` is also a [`Field`](crate::schema::Field), so record
/// fields of these types can be bound as arguments and loaded from rows.
pub trait Primitive: Sized {
    /// Returns the current value as a CQL value.
    fn to_value(&self) -> Value;

    /// Builds the Rust value from a value read from a row.
    fn from_value(value: Value) -> Result<Self>;
}

impl Primitive for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            value => Err(Error::type_conversion(&value, "bool")),
        }
    }
}

impl Primitive for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            // The store returns null for empty text written as null
            Value::Null => Ok(String::new()),
            value => Err(Error::type_conversion(&value, "String")),
        }
    }
}

impl Primitive for Blob {
    fn to_value(&self) -> Value {
        Value::Bytes(self.0.clone())
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(Blob(v)),
            Value::Null => Ok(Blob::default()),
            value => Err(Error::type_conversion(&value, "Blob")),
        }
    }
}

impl Primitive for Uuid {
    fn to_value(&self) -> Value {
        Value::Uuid(*self)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Uuid(v) => Ok(v),
            Value::String(v) => Ok(Uuid::parse_str(&v)?),
            value => Err(Error::type_conversion(&value, "Uuid")),
        }
    }
}

impl<T: Primitive> Primitive for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::from_value(value).map(Some),
        }
    }
}

/// Empty collections come back from the store as null.
fn collection_items(value: Value, to_type: &'static str) -> Result<Vec<Value>> {
    match value {
        Value::List(items) | Value::Set(items) => Ok(items),
        Value::Null => Ok(vec![]),
        value => Err(Error::type_conversion(&value, to_type)),
    }
}

fn map_entries(value: Value, to_type: &'static str) -> Result<Vec<(Value, Value)>> {
    match value {
        Value::Map(entries) => Ok(entries),
        Value::Null => Ok(vec![]),
        value => Err(Error::type_conversion(&value, to_type)),
    }
}

impl<T: Primitive> Primitive for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(Primitive::to_value).collect())
    }

    fn from_value(value: Value) -> Result<Self> {
        collection_items(value, "Vec")?
            .into_iter()
            .map(T::from_value)
            .collect()
    }
}

impl<T: Primitive + Ord> Primitive for BTreeSet<T> {
    fn to_value(&self) -> Value {
        Value::Set(self.iter().map(Primitive::to_value).collect())
    }

    fn from_value(value: Value) -> Result<Self> {
        collection_items(value, "BTreeSet")?
            .into_iter()
            .map(T::from_value)
            .collect()
    }
}

impl<K: Primitive + Ord, V: Primitive> Primitive for BTreeMap<K, V> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.to_value(), v.to_value()))
                .collect(),
        )
    }

    fn from_value(value: Value) -> Result<Self> {
        map_entries(value, "BTreeMap")?
            .into_iter()
            .map(|(k, v)| Ok((K::from_value(k)?, V::from_value(v)?)))
            .collect()
    }
}

impl<K, V, S> Primitive for HashMap<K, V, S>
where
    K: Primitive + Eq + Hash,
    V: Primitive,
    S: BuildHasher + Default,
{
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.to_value(), v.to_value()))
                .collect(),
        )
    }

    fn from_value(value: Value) -> Result<Self> {
        map_entries(value, "HashMap")?
            .into_iter()
            .map(|(k, v)| Ok((K::from_value(k)?, V::from_value(v)?)))
            .collect()
    }
}

#[cfg(feature = "chrono")]
impl Primitive for chrono::DateTime<chrono::Utc> {
    fn to_value(&self) -> Value {
        Value::Timestamp(self.timestamp_millis())
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Timestamp(ms) => chrono::DateTime::from_timestamp_millis(ms)
                .ok_or_else(|| Error::type_conversion(&Value::Timestamp(ms), "DateTime<Utc>")),
            value => Err(Error::type_conversion(&value, "DateTime<Utc>")),
        }
    }
}
