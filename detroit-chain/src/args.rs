use crate::value::{Rendering, Value};

/// An explicitly omitted argument.
pub const ABSENT: Option<Value> = None;

/// Conversion of a single positional argument.
///
/// `None` is an absent argument and is dropped from the formatted list.
pub trait IntoArg {
    fn into_arg(self) -> Option<Value>;
}

/// Conversion of a whole positional argument list.
///
/// Implemented for `()`, for a single argument, for tuples of up to eight
/// arguments and for [`Args`].
pub trait IntoArgs {
    fn into_args(self) -> Args;
}

/// An ordered list of positional arguments, some of which may be absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args(Vec<Option<Value>>);

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an argument.
    pub fn arg(mut self, value: impl IntoArg) -> Self {
        self.0.push(value.into_arg());
        self
    }

    /// Append an absent argument.
    pub fn absent(mut self) -> Self {
        self.0.push(None);
        self
    }

    /// Number of positions, absent ones included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Option<Value>] {
        &self.0
    }

    /// Format the present arguments as a JavaScript argument list.
    pub fn format(&self, rendering: Rendering) -> String {
        format_arguments(&self.0, rendering)
    }
}

impl FromIterator<Option<Value>> for Args {
    fn from_iter<I: IntoIterator<Item = Option<Value>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoArgs for Args {
    fn into_args(self) -> Args {
        self
    }
}

impl IntoArgs for () {
    fn into_args(self) -> Args {
        Args::new()
    }
}

/// Join the present arguments with `", "`, keeping their order.
///
/// Absent arguments are skipped, so an all-absent list gives an empty string.
pub fn format_arguments(args: &[Option<Value>], rendering: Rendering) -> String {
    args.iter()
        .flatten()
        .map(|value| value.render(rendering))
        .collect::<Vec<_>>()
        .join(", ")
}

macro_rules! value_args {
    ($($ty:ty),* $(,)?) => {$(
        impl IntoArg for $ty {
            fn into_arg(self) -> Option<Value> {
                Some(Value::from(self))
            }
        }

        impl IntoArg for Option<$ty> {
            fn into_arg(self) -> Option<Value> {
                self.map(Value::from)
            }
        }

        impl IntoArgs for $ty {
            fn into_args(self) -> Args {
                Args::new().arg(self)
            }
        }

        impl IntoArgs for Option<$ty> {
            fn into_args(self) -> Args {
                Args::new().arg(self)
            }
        }
    )*};
}

value_args!(
    Value,
    bool,
    i8,
    i16,
    i32,
    i64,
    isize,
    u8,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
    &str,
    String,
    &String,
    serde_json::Value,
);

impl<T: Into<Value>> IntoArg for Vec<T> {
    fn into_arg(self) -> Option<Value> {
        Some(Value::from(self))
    }
}

impl<T: Into<Value>> IntoArgs for Vec<T> {
    fn into_args(self) -> Args {
        Args::new().arg(self)
    }
}

impl<T: Into<Value>, const N: usize> IntoArg for [T; N] {
    fn into_arg(self) -> Option<Value> {
        Some(Value::from(self))
    }
}

impl<T: Into<Value>, const N: usize> IntoArgs for [T; N] {
    fn into_args(self) -> Args {
        Args::new().arg(self)
    }
}

macro_rules! tuple_args {
    ($($name:ident),+) => {
        impl<$($name: IntoArg),+> IntoArgs for ($($name,)+) {
            #[allow(non_snake_case)]
            fn into_args(self) -> Args {
                let ($($name,)+) = self;
                Args(vec![$($name.into_arg()),+])
            }
        }
    };
}

tuple_args!(A);
tuple_args!(A, B);
tuple_args!(A, B, C);
tuple_args!(A, B, C, D);
tuple_args!(A, B, C, D, E);
tuple_args!(A, B, C, D, E, F);
tuple_args!(A, B, C, D, E, F, G);
tuple_args!(A, B, C, D, E, F, G, H);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::js;

    #[test]
    fn test_absent_values_are_dropped() {
        let args = (1, "a", ABSENT, 3).into_args();
        assert_eq!(args.len(), 4);
        assert_eq!(args.format(Rendering::Repr), r#"1, "a", 3"#);
    }

    #[test]
    fn test_order_is_preserved() {
        let args = Args::new().arg(3).absent().arg(js("x")).arg(1);
        assert_eq!(args.format(Rendering::Repr), "3, x, 1");
    }

    #[test]
    fn test_all_absent_is_empty() {
        assert_eq!((ABSENT, ABSENT).into_args().format(Rendering::Repr), "");
        assert_eq!(().into_args().format(Rendering::Plain), "");
    }

    #[test]
    fn test_optional_values() {
        let width: Option<i32> = Some(640);
        let height: Option<i32> = None;
        let args = (width, height).into_args();
        assert_eq!(args.format(Rendering::Repr), "640");
    }

    #[test]
    fn test_single_values_are_one_argument() {
        assert_eq!(".0f".into_args().format(Rendering::Plain), ".0f");
        assert_eq!(vec![0, 100].into_args().format(Rendering::Repr), "[0, 100]");
        assert_eq!([1.5, 2.0].into_args().len(), 1);
    }

    #[test]
    fn test_format_arguments_on_slices() {
        let values = [Some(Value::from("a")), None, Some(js("b"))];
        assert_eq!(format_arguments(&values, Rendering::Repr), r#""a", b"#);
        assert_eq!(format_arguments(&values, Rendering::Plain), "a, b");
        assert_eq!(format_arguments(&[], Rendering::Repr), "");
    }
}
