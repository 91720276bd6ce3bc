//! List command report.

use super::output::{Output, Report};

/// Generated identifiers of one namespace.
#[derive(Debug)]
pub struct NamespaceEntry {
    pub type_name: String,
    pub file: String,
    pub root: String,
    pub is_static: bool,
    pub methods: Vec<MethodEntry>,
}

#[derive(Debug)]
pub struct MethodEntry {
    pub ident: String,
    /// JavaScript text the method emits, when it differs from `ident`
    pub js: Option<String>,
    pub returns: Option<String>,
}

#[derive(Debug)]
pub struct ListReport {
    pub namespaces: Vec<NamespaceEntry>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.namespaces.is_empty() {
            out.preformatted("No namespaces defined");
            return;
        }

        for (i, namespace) in self.namespaces.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            let kind = if namespace.is_static { ", static" } else { "" };
            out.section(&format!(
                "{} ({}, root `{}`{})",
                namespace.type_name, namespace.file, namespace.root, kind
            ));
            for method in &namespace.methods {
                let mut line = method.ident.clone();
                if let Some(js) = &method.js {
                    line.push_str(&format!(" → {}", js));
                }
                if let Some(returns) = &method.returns {
                    line.push_str(&format!(" : {}", returns));
                }
                out.list_item(&line);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::StringOutput;

    #[test]
    fn test_render_list() {
        let report = ListReport {
            namespaces: vec![NamespaceEntry {
                type_name: "Plot".to_string(),
                file: "plot.py".to_string(),
                root: "Plot".to_string(),
                is_static: false,
                methods: vec![
                    MethodEntry {
                        ident: "dot".to_string(),
                        js: None,
                        returns: None,
                    },
                    MethodEntry {
                        ident: "from_".to_string(),
                        js: Some("from".to_string()),
                        returns: Some("Axis".to_string()),
                    },
                ],
            }],
        };

        let mut out = StringOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.0,
            "Plot (plot.py, root `Plot`):\n  - dot\n  - from_ → from : Axis\n"
        );
    }

    #[test]
    fn test_render_empty() {
        let report = ListReport {
            namespaces: Vec::new(),
        };
        let mut out = StringOutput::default();
        report.render(&mut out);
        assert_eq!(out.0, "No namespaces defined\n");
    }
}
