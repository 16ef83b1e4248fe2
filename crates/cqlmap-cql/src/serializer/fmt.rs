use super::{Formatter, Params};

macro_rules! fmt {
    ($f:expr, $( $fragments:expr )*) => {{
        $(
            $fragments.to_cql($f);
        )*
    }};
}

pub(super) trait ToCql {
    fn to_cql<T: Params>(self, f: &mut Formatter<'_, T>);
}

impl ToCql for &str {
    fn to_cql<T: Params>(self, f: &mut Formatter<'_, T>) {
        f.dst.push_str(self);
    }
}

impl ToCql for &String {
    fn to_cql<T: Params>(self, f: &mut Formatter<'_, T>) {
        f.dst.push_str(self);
    }
}

macro_rules! impl_int {
    ( $( $ty:ty )* ) => {
        $(
            impl ToCql for $ty {
                fn to_cql<T: Params>(self, f: &mut Formatter<'_, T>) {
                    f.dst.push_str(&self.to_string());
                }
            }
        )*
    };
}

impl_int!(u32 u64 i64);

impl<L: ToCql> ToCql for Option<L> {
    fn to_cql<T: Params>(self, f: &mut Formatter<'_, T>) {
        if let Some(inner) = self {
            inner.to_cql(f);
        }
    }
}
