use crate::{args::IntoArgs, value::Rendering};

/// Immutable snapshot of an accumulated JavaScript call chain.
///
/// A chain never references its predecessor: the whole expression is baked
/// into its text at every step.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chain {
    content: String,
}

impl Chain {
    /// Start a chain at a root expression such as `d3` or `Plot`.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// The JavaScript source accumulated so far.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }

    /// Append `.method(args)` and return the new chain.
    pub fn call(&self, method: &str, args: impl IntoArgs, rendering: Rendering) -> Self {
        let arguments = args.into_args().format(rendering);
        Self {
            content: format!("{}.{}({})", self.content, method, arguments),
        }
    }

    /// Append `.name` without calling it, for constants and function
    /// references such as `d3.curveLinear`.
    pub fn get(&self, name: &str) -> Self {
        Self {
            content: format!("{}.{}", self.content, name),
        }
    }

    /// Call the expression itself: `content(args)`.
    pub fn invoke(&self, args: impl IntoArgs, rendering: Rendering) -> Self {
        let arguments = args.into_args().format(rendering);
        Self {
            content: format!("{}({})", self.content, arguments),
        }
    }
}

impl From<String> for Chain {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

impl From<&str> for Chain {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl AsRef<str> for Chain {
    fn as_ref(&self) -> &str {
        &self.content
    }
}

crate::impl_expression!(Chain);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ABSENT, Args, Value, js};

    #[test]
    fn test_call_without_arguments() {
        let node = Chain::new("d3.select(\"svg\")");
        assert_eq!(node.call("remove", (), Rendering::Repr).content(), "d3.select(\"svg\").remove()");
    }

    #[test]
    fn test_call_drops_absent_arguments() {
        let node = Chain::new("Plot");
        let next = node.call("bar", (1, "a", ABSENT, 3), Rendering::Repr);
        assert_eq!(next.content(), r#"Plot.bar(1, "a", 3)"#);
    }

    #[test]
    fn test_call_does_not_mutate_input() {
        let root = Chain::new("Plot");
        let _ = root.call("dot", js("data"), Rendering::Repr);
        assert_eq!(root.content(), "Plot");
    }

    #[test]
    fn test_calls_are_deterministic() {
        let build = |root: &Chain| {
            root.call("scaleLinear", (), Rendering::Plain)
                .call("domain", vec![0, 1], Rendering::Repr)
                .call("range", Args::new().arg(js("[height, 0]")), Rendering::Repr)
        };
        let root = Chain::new("d3");
        let first = build(&root);
        let second = build(&Chain::new(first.content()).call("copy", (), Rendering::Repr));
        assert_eq!(first, build(&root));
        assert_eq!(
            second.content(),
            "d3.scaleLinear().domain([0, 1]).range([height, 0]).copy().scaleLinear().domain([0, 1]).range([height, 0])"
        );
    }

    #[test]
    fn test_get_does_not_call() {
        let curve = Chain::new("d3").get("curveLinear");
        assert_eq!(curve.content(), "d3.curveLinear");
        let line = Chain::new("d3.line()").call("curve", &curve, Rendering::Repr);
        assert_eq!(line.content(), "d3.line().curve(d3.curveLinear)");
    }

    #[test]
    fn test_invoke() {
        let format = Chain::new("d3.format").invoke(".0f", Rendering::Plain);
        assert_eq!(format.content(), "d3.format(.0f)");
        let plot = Chain::new("Plot").invoke((), Rendering::Repr);
        assert_eq!(plot.content(), "Plot()");
    }

    #[test]
    fn test_chain_as_argument() {
        let format = Chain::new("d3").call("format", ".0f", Rendering::Repr);
        let axis = Chain::new("d3.axisBottom(x)").call("tickFormat", &format, Rendering::Repr);
        assert_eq!(axis.content(), r#"d3.axisBottom(x).tickFormat(d3.format(".0f"))"#);
        assert_eq!(Value::from(format), js(r#"d3.format(".0f")"#));
    }

    #[test]
    fn test_display() {
        let node = Chain::new("Plot").call("plot", (), Rendering::Repr);
        insta::assert_snapshot!(node.to_string(), @"Plot.plot()");
    }
}
