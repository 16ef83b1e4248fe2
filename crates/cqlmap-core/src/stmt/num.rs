use super::{Primitive, Value};
use crate::{Error, Result};

macro_rules! impl_num {
    (
        $(
            $variant:ident($ty:ty) {
                $to:ident
                $is:ident
            } )*
    ) => {
        impl Value {
            $(
                pub fn $is(&self) -> bool {
                    matches!(self, Self::$variant(_))
                }

                /// Converts any integer variant to this width, failing when the
                /// value does not fit.
                pub fn $to(&self) -> Result<$ty> {
                    let Some(value) = self.as_i64() else {
                        return Err(Error::type_conversion(self, stringify!($ty)));
                    };
                    <$ty>::try_from(value).map_err(|_| Error::type_conversion(self, stringify!($ty)))
                }
            )*
        }

        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }

            impl Primitive for $ty {
                fn to_value(&self) -> Value {
                    Value::$variant(*self)
                }

                fn from_value(value: Value) -> Result<Self> {
                    value.$to()
                }
            }
        )*
    };
}

impl_num! {
    I8(i8) {
        to_i8
        is_i8
    }
    I16(i16) {
        to_i16
        is_i16
    }
    I32(i32) {
        to_i32
        is_i32
    }
    I64(i64) {
        to_i64
        is_i64
    }
}

macro_rules! impl_float {
    ( $( $variant:ident($ty:ty) )* ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl Primitive for $ty {
                fn to_value(&self) -> Value {
                    Value::$variant(*self)
                }

                fn from_value(value: Value) -> Result<Self> {
                    match value {
                        Value::F32(v) => Ok(v as $ty),
                        Value::F64(v) => Ok(v as $ty),
                        value => Err(Error::type_conversion(&value, stringify!($ty))),
                    }
                }
            }
        )*
    };
}

impl_float! {
    F32(f32)
    F64(f64)
}
