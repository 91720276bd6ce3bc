//! Catalog types for detroit.toml files.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Language, Param};

/// Default comment placed at the top of every generated file.
pub const DEFAULT_HEADER: &str = detroit_core::GENERATED_HEADER;

/// Default crate path of the chain runtime used by generated Rust code.
pub const DEFAULT_RUNTIME: &str = "detroit_chain";

/// Root of a detroit.toml catalog.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Catalog {
    /// Generation settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// One entry per generated type, in generation order
    #[serde(default)]
    pub namespaces: Vec<Namespace>,
}

/// The `[generator]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub language: Language,

    #[serde(default = "default_header")]
    pub header: String,

    /// Path of the runtime crate in generated Rust code
    #[serde(default = "default_runtime")]
    pub runtime: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            header: default_header(),
            runtime: default_runtime(),
        }
    }
}

fn default_header() -> String {
    DEFAULT_HEADER.to_string()
}

fn default_runtime() -> String {
    DEFAULT_RUNTIME.to_string()
}

/// How the methods of a namespace produce JavaScript text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NamespaceKind {
    /// Methods append `.name(args)` to the current chain.
    #[default]
    Chain,
    /// Methods build `head(args)` from the method's full head, e.g.
    /// `d3.scaleLinear(...)`.
    Static,
}

impl NamespaceKind {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Argument rendering policy of a namespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rendering {
    /// Strings are quoted JavaScript literals.
    #[default]
    Repr,
    /// Top-level strings are emitted verbatim as JavaScript source.
    Plain,
}

impl Rendering {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rendering::Repr => "repr",
            Rendering::Plain => "plain",
        }
    }
}

impl FromStr for Rendering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "repr" => Ok(Rendering::Repr),
            "plain" => Ok(Rendering::Plain),
            _ => Err(format!("unknown rendering '{}', expected 'repr' or 'plain'", s)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Namespace {
    #[serde(default)]
    pub name: String,

    /// Root expression of new chains, defaults to the namespace name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,

    #[serde(default, skip_serializing_if = "NamespaceKind::is_default")]
    pub kind: NamespaceKind,

    #[serde(default)]
    pub rendering: Rendering,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub doc: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default)]
    pub methods: Vec<Method>,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The root expression a fresh chain of this namespace starts from.
    pub fn root(&self) -> &str {
        self.root.as_deref().unwrap_or(&self.name)
    }

    pub fn is_static(&self) -> bool {
        self.kind == NamespaceKind::Static
    }

    /// The JavaScript method name a descriptor is generated under.
    ///
    /// Static heads lose a leading `new ` and the `{root}.` prefix:
    /// `new d3.Delaunay` and `d3.scaleLinear` give `Delaunay` and `scaleLinear`
    /// under root `d3`.
    pub fn method_name<'a>(&self, method: &'a Method) -> &'a str {
        if !self.is_static() {
            return &method.name;
        }
        let head = strip_new(&method.name);
        head.strip_prefix(self.root())
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(head)
    }

    /// The JavaScript text a static method calls, e.g. `new d3.Delaunay`.
    ///
    /// Heads without the root prefix get it added.
    pub fn head(&self, method: &Method) -> String {
        let root = self.root();
        let (is_new, head) = match method.name.strip_prefix("new ") {
            Some(rest) => (true, rest.trim_start()),
            None => (false, method.name.as_str()),
        };
        let qualified = if head.starts_with(&format!("{}.", root)) {
            head.to_string()
        } else {
            format!("{}.{}", root, head)
        };
        if is_new {
            format!("new {}", qualified)
        } else {
            qualified
        }
    }

    /// Find a method by its generated JavaScript name.
    pub fn find_method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| self.method_name(m) == name)
    }
}

fn strip_new(name: &str) -> &str {
    name.strip_prefix("new ").map(str::trim_start).unwrap_or(name)
}

/// What a method descriptor generates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    /// `name(args)`
    #[default]
    Call,
    /// A property read such as `d3.schemeCategory10`; never called and
    /// never takes parameters.
    Constant,
}

impl MethodKind {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// A method descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Method {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "MethodKind::is_default")]
    pub kind: MethodKind,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Param>,

    /// Markdown documentation (paragraphs and ```js fences)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub doc: String,

    /// Namespace of the returned chain, defaults to the owning namespace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_params(mut self, params: impl IntoIterator<Item = Param>) -> Self {
        self.params = params.into_iter().collect();
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }

    pub fn with_returns(mut self, returns: impl Into<String>) -> Self {
        self.returns = Some(returns.into());
        self
    }

    pub fn with_kind(mut self, kind: MethodKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn has_params(&self) -> bool {
        !self.params.is_empty()
    }

    pub fn is_constant(&self) -> bool {
        self.kind == MethodKind::Constant
    }
}

impl Catalog {
    pub fn namespace(&self, name: &str) -> Option<&Namespace> {
        self.namespaces.iter().find(|ns| ns.name == name)
    }

    pub fn has_namespace(&self, name: &str) -> bool {
        self.namespace(name).is_some()
    }

    /// Total number of method descriptors.
    pub fn method_count(&self) -> usize {
        self.namespaces.iter().map(|ns| ns.methods.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d3() -> Namespace {
        Namespace {
            kind: NamespaceKind::Static,
            ..Namespace::new("d3")
        }
    }

    #[test]
    fn test_root_defaults_to_name() {
        let plot = Namespace::new("Plot");
        assert_eq!(plot.root(), "Plot");

        let axis = Namespace {
            root: Some("d3.axisBottom(x)".to_string()),
            ..Namespace::new("Axis")
        };
        assert_eq!(axis.root(), "d3.axisBottom(x)");
    }

    #[test]
    fn test_static_method_name_strips_prefixes() {
        let ns = d3();
        assert_eq!(ns.method_name(&Method::new("d3.scaleLinear")), "scaleLinear");
        assert_eq!(ns.method_name(&Method::new("new d3.Delaunay")), "Delaunay");
        assert_eq!(ns.method_name(&Method::new("line")), "line");
        assert_eq!(ns.method_name(&Method::new("d3x.foo")), "d3x.foo");
    }

    #[test]
    fn test_chain_method_name_is_verbatim() {
        let plot = Namespace::new("Plot");
        assert_eq!(plot.method_name(&Method::new("dot")), "dot");
    }

    #[test]
    fn test_static_head() {
        let ns = d3();
        assert_eq!(ns.head(&Method::new("d3.scaleLinear")), "d3.scaleLinear");
        assert_eq!(ns.head(&Method::new("new d3.Delaunay")), "new d3.Delaunay");
        assert_eq!(ns.head(&Method::new("line")), "d3.line");
        assert_eq!(ns.head(&Method::new("new Voronoi")), "new d3.Voronoi");
    }

    #[test]
    fn test_rendering_from_str() {
        assert_eq!("plain".parse::<Rendering>().unwrap(), Rendering::Plain);
        assert!("quoted".parse::<Rendering>().is_err());
    }

    #[test]
    fn test_method_kind_serde() {
        let method: Method =
            toml::from_str("name = \"schemeCategory10\"\nkind = \"constant\"").unwrap();
        assert!(method.is_constant());

        let method: Method = toml::from_str("name = \"scaleLinear\"").unwrap();
        assert_eq!(method.kind, MethodKind::Call);
        assert!(!toml::to_string(&method).unwrap().contains("kind"));
    }

    #[test]
    fn test_find_method() {
        let mut ns = d3();
        ns.methods.push(Method::new("d3.scaleLinear"));
        assert!(ns.find_method("scaleLinear").is_some());
        assert!(ns.find_method("d3.scaleLinear").is_none());
    }
}
