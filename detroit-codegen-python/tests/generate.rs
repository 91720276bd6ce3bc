//! End-to-end tests for the Python backend.

use detroit_catalog::Catalog;
use detroit_codegen_python::{Generator, LanguageCodegen};

fn preview(src: &str) -> Vec<(String, String)> {
    let catalog: Catalog = src.parse().unwrap();
    Generator::new(&catalog)
        .unwrap()
        .preview()
        .into_iter()
        .map(|file| (file.path, file.content))
        .collect()
}

fn file<'a>(files: &'a [(String, String)], path: &str) -> &'a str {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, content)| content.as_str())
        .unwrap_or_else(|| panic!("{} not generated", path))
}

const PLOT: &str = r#"
[generator]
language = "python"

[[namespaces]]
name = "Plot"
url = "https://observablehq.com/plot/"

[[namespaces.methods]]
name = "dot"
params = ["data", "options"]
doc = "Draws circles."

[[namespaces.methods]]
name = "plot"
"#;

const PLOT_PY: &str = r#"# Generated by detroit. Do not edit.

from functools import partial
from operator import is_not


class Plot:
    """See more information: <https://observablehq.com/plot/>"""

    def __init__(self, content: str = "Plot"):
        self.content = content

    def __repr__(self):
        return self.content

    def __str__(self):
        return self.content

    def __call__(self, *args):
        arguments = ", ".join(map(repr, filter(partial(is_not, None), args)))
        return Plot(f"{self.content}({arguments})")

    def get(self, name: str):
        """Read a member without calling it: ``content.name``."""
        return Plot(f"{self.content}.{name}")

    def dot(self, data=None, options=None):
        """Draws circles."""
        arguments = ", ".join(map(repr, filter(partial(is_not, None), (data, options))))
        return Plot(f"{self.content}.dot({arguments})")

    def plot(self):
        return Plot(f"{self.content}.plot()")
"#;

#[test]
fn test_plot_class() {
    let files = preview(PLOT);
    assert_eq!(files.len(), 2);
    assert_eq!(file(&files, "plot.py"), PLOT_PY);
}

#[test]
fn test_init_py() {
    let files = preview(PLOT);
    insta::assert_snapshot!(file(&files, "__init__.py"), @r#"
    # Generated by detroit. Do not edit.

    from .plot import Plot


    __all__ = ["Plot"]
    "#);
}

#[test]
fn test_keywords_are_remapped() {
    let files = preview(
        r#"
[[namespaces]]
name = "Selection"
root = "d3.select(\"svg\")"

[[namespaces.methods]]
name = "from"
params = ["lambda"]

[[namespaces.methods]]
name = "raise"
"#,
    );
    let selection = file(&files, "selection.py");

    assert!(selection.contains("    def __init__(self, content: str = \"d3.select(\\\"svg\\\")\"):"));
    assert!(selection.contains(
        "    def from_(self, lambda_=None):\n        arguments = \", \".join(map(repr, filter(partial(is_not, None), (lambda_,))))\n        return Selection(f\"{self.content}.from({arguments})\")\n"
    ));
    assert!(selection.contains(
        "    def raise_(self):\n        return Selection(f\"{self.content}.raise()\")\n"
    ));
}

const D3: &str = r#"
[[namespaces]]
name = "d3"
kind = "static"
rendering = "plain"

[[namespaces.methods]]
name = "d3.scaleLinear"
params = ["domain", "range"]
returns = "ScaleLinear"

[[namespaces.methods]]
name = "new d3.Delaunay"
params = ["points"]
returns = "Delaunay"

[[namespaces.methods]]
name = "d3.scaleLog"
returns = "ScaleLinear"

[[namespaces.methods]]
name = "d3.schemeCategory10"
kind = "constant"

[[namespaces]]
name = "ScaleLinear"
root = "d3.scaleLinear()"

[[namespaces.methods]]
name = "unknown"
kind = "constant"

[[namespaces.methods]]
name = "domain"
params = ["...values"]

[[namespaces.methods]]
name = "ticks"
params = ["count = 10"]

[[namespaces.methods]]
name = "nice"
params = ["count", "...rest"]
doc = """
Extends the domain.

```js
x.nice()
```"""

[[namespaces]]
name = "Delaunay"
"#;

#[test]
fn test_static_methods() {
    let files = preview(D3);
    let d3 = file(&files, "d3.py");

    assert!(d3.contains(
        "from operator import is_not\n\nfrom .scale_linear import ScaleLinear\nfrom .delaunay import Delaunay\n\n\nclass d3:\n"
    ));
    assert!(d3.contains(
        "    @staticmethod\n    def scaleLinear(domain=None, range=None):\n        arguments = \", \".join(map(str, filter(partial(is_not, None), (domain, range))))\n        return ScaleLinear(f\"d3.scaleLinear({arguments})\")\n"
    ));
    assert!(d3.contains(
        "    @staticmethod\n    def Delaunay(points=None):\n        arguments = \", \".join(map(str, filter(partial(is_not, None), (points,))))\n        return Delaunay(f\"new d3.Delaunay({arguments})\")\n"
    ));
    assert!(d3.contains(
        "    @staticmethod\n    def scaleLog():\n        return ScaleLinear(\"d3.scaleLog()\")\n"
    ));
}

#[test]
fn test_constants_are_not_called() {
    let files = preview(D3);

    let d3 = file(&files, "d3.py");
    assert!(d3.contains(
        "    @staticmethod\n    def schemeCategory10():\n        return d3(\"d3.schemeCategory10\")\n"
    ));

    let scale = file(&files, "scale_linear.py");
    assert!(scale.contains(
        "    def unknown(self):\n        return ScaleLinear(f\"{self.content}.unknown\")\n"
    ));
    assert!(scale.contains(
        "    def get(self, name: str):\n        \"\"\"Read a member without calling it: ``content.name``.\"\"\"\n        return ScaleLinear(f\"{self.content}.{name}\")\n"
    ));
}

#[test]
fn test_rest_and_default_params() {
    let files = preview(D3);
    let scale = file(&files, "scale_linear.py");

    assert!(scale.contains(
        "    def domain(self, *values):\n        arguments = \", \".join(map(repr, filter(partial(is_not, None), (*values,))))\n"
    ));
    assert!(scale.contains("    def ticks(self, count=10):\n"));
    assert!(scale.contains("(count,)"));
    assert!(scale.contains("    def nice(self, count=None, *rest):\n"));
    assert!(scale.contains("(count, *rest)"));
}

#[test]
fn test_docstring_code_directive() {
    let files = preview(D3);
    let scale = file(&files, "scale_linear.py");

    assert!(scale.contains(
        "        \"\"\"\n        Extends the domain.\n\n        .. code:: javascript\n\n            x.nice()\n        \"\"\"\n"
    ));
}

#[test]
fn test_generate_writes_package() {
    let dir = tempfile::tempdir().unwrap();
    let catalog: Catalog = PLOT.parse().unwrap();

    let result = Generator::new(&catalog)
        .unwrap()
        .generate(dir.path())
        .unwrap();

    assert_eq!(result.written.len(), 2);
    assert!(dir.path().join("__init__.py").exists());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("plot.py")).unwrap(),
        PLOT_PY
    );
}
