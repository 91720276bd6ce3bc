/// Register a chain-backed type as a JavaScript expression.
///
/// The type must provide `fn content(&self) -> &str`. The macro implements
/// `Display` and lets values of the type (owned or borrowed) be passed as
/// call arguments, where they are emitted verbatim.
///
/// ```
/// use detroit_chain::{Chain, Rendering, impl_expression};
///
/// struct Axis(Chain);
///
/// impl Axis {
///     fn content(&self) -> &str {
///         self.0.content()
///     }
/// }
///
/// impl_expression!(Axis);
///
/// let axis = Axis(Chain::new("d3.axisBottom(x)"));
/// let g = Chain::new("g").call("call", &axis, Rendering::Repr);
/// assert_eq!(g.content(), "g.call(d3.axisBottom(x))");
/// ```
#[macro_export]
macro_rules! impl_expression {
    ($ty:ty) => {
        impl ::core::convert::From<$ty> for $crate::Value {
            fn from(value: $ty) -> Self {
                $crate::Value::Js(value.content().to_string())
            }
        }

        impl ::core::convert::From<&$ty> for $crate::Value {
            fn from(value: &$ty) -> Self {
                $crate::Value::Js(value.content().to_string())
            }
        }

        impl $crate::IntoArg for $ty {
            fn into_arg(self) -> ::core::option::Option<$crate::Value> {
                ::core::option::Option::Some($crate::Value::from(self))
            }
        }

        impl $crate::IntoArg for &$ty {
            fn into_arg(self) -> ::core::option::Option<$crate::Value> {
                ::core::option::Option::Some($crate::Value::from(self))
            }
        }

        impl $crate::IntoArgs for $ty {
            fn into_args(self) -> $crate::Args {
                $crate::Args::new().arg(self)
            }
        }

        impl $crate::IntoArgs for &$ty {
            fn into_args(self) -> $crate::Args {
                $crate::Args::new().arg(self)
            }
        }

        impl ::core::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.content())
            }
        }
    };
}
