//! List operation: generated identifiers per namespace.

use detroit_catalog::Catalog;
use detroit_codegen::GenerationPlan;
use eyre::Result;

use crate::{
    language::LanguageSupport,
    reports::{ListReport, MethodEntry, NamespaceEntry},
};

pub fn list(catalog: &Catalog, lang: &LanguageSupport) -> Result<ListReport> {
    let plan = GenerationPlan::new(catalog, lang.naming())?;
    let extension = lang.language().extension();

    let namespaces = plan
        .namespaces
        .iter()
        .map(|ns| NamespaceEntry {
            type_name: ns.type_name.clone(),
            file: format!("{}.{}", ns.file_stem, extension),
            root: ns.root.clone(),
            is_static: ns.is_static(),
            methods: ns
                .methods
                .iter()
                .map(|method| {
                    let js = method.head.as_deref().unwrap_or(&method.js_name);
                    MethodEntry {
                        ident: method.ident.clone(),
                        js: (js != method.ident).then(|| js.to_string()),
                        returns: (method.returns != ns.type_name).then(|| method.returns.clone()),
                    }
                })
                .collect(),
        })
        .collect();

    Ok(ListReport { namespaces })
}

#[cfg(test)]
mod tests {
    use detroit_catalog::Language;

    use super::*;
    use crate::ops::PLOT;

    #[test]
    fn test_list_rust_identifiers() {
        let catalog: Catalog = PLOT.parse().unwrap();
        let report = list(&catalog, &LanguageSupport::get(Language::Rust)).unwrap();

        let plot = &report.namespaces[0];
        assert_eq!(plot.type_name, "Plot");
        assert_eq!(plot.file, "plot.rs");
        assert!(!plot.is_static);

        let from = &plot.methods[1];
        assert_eq!(from.ident, "from_");
        assert_eq!(from.js.as_deref(), Some("from"));
        assert_eq!(from.returns.as_deref(), Some("Axis"));

        let dot = &plot.methods[0];
        assert_eq!(dot.js, None);
        assert_eq!(dot.returns, None);

        assert_eq!(report.namespaces[1].root, "Plot.axisX()");
    }

    #[test]
    fn test_list_python_files() {
        let catalog: Catalog = PLOT.parse().unwrap();
        let report = list(&catalog, &LanguageSupport::get(Language::Python)).unwrap();
        assert_eq!(report.namespaces[1].file, "axis.py");
        assert_eq!(report.namespaces[0].methods[1].ident, "from_");
    }

    #[test]
    fn test_list_static_heads() {
        let catalog: Catalog = r#"
[[namespaces]]
name = "d3"
kind = "static"

[[namespaces.methods]]
name = "d3.scaleLinear"
"#
        .parse()
        .unwrap();

        let report = list(&catalog, &LanguageSupport::get(Language::Rust)).unwrap();
        let d3 = &report.namespaces[0];
        assert_eq!(d3.type_name, "D3");
        assert!(d3.is_static);
        assert_eq!(d3.methods[0].ident, "scale_linear");
        assert_eq!(d3.methods[0].js.as_deref(), Some("d3.scaleLinear"));
    }
}
