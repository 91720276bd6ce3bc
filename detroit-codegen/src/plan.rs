//! Language-resolved view of a catalog.
//!
//! A [`GenerationPlan`] applies a [`NamingConvention`] to every namespace and
//! method of a validated catalog, so backends only deal with final
//! identifiers. Name collisions introduced by case conversion or reserved-word
//! escaping are reported here, before anything is rendered.

use std::collections::HashMap;

use detroit_catalog::{Catalog, MethodKind, Namespace, NamespaceKind, Param, Rendering};
use eyre::{Result, bail};
use indexmap::IndexSet;

use crate::NamingConvention;

#[derive(Debug, Clone)]
pub struct GenerationPlan {
    pub namespaces: Vec<NamespacePlan>,
}

#[derive(Debug, Clone)]
pub struct NamespacePlan {
    /// Name in the catalog
    pub name: String,
    pub type_name: String,
    /// Module identifier, possibly escaped (`r#type`)
    pub module: String,
    pub file_stem: String,
    /// Root expression of fresh chains
    pub root: String,
    pub kind: NamespaceKind,
    pub rendering: Rendering,
    pub doc: String,
    pub url: Option<String>,
    pub methods: Vec<MethodPlan>,
    /// Other namespaces returned by methods, in order of first use
    pub imports: Vec<Import>,
}

impl NamespacePlan {
    pub fn is_static(&self) -> bool {
        self.kind == NamespaceKind::Static
    }
}

#[derive(Debug, Clone)]
pub struct MethodPlan {
    /// Generated method identifier
    pub ident: String,
    /// Method name written into the JavaScript text
    pub js_name: String,
    /// Full head of a static method, e.g. `new d3.Delaunay`
    pub head: Option<String>,
    pub kind: MethodKind,
    pub params: Vec<Param>,
    pub doc: String,
    /// Type name of the returned namespace
    pub returns: String,
}

impl MethodPlan {
    pub fn has_params(&self) -> bool {
        !self.params.is_empty()
    }

    /// Constants read `content.name` (or their head) without a call.
    pub fn is_constant(&self) -> bool {
        self.kind == MethodKind::Constant
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Import {
    pub module: String,
    pub type_name: String,
}

impl GenerationPlan {
    /// Resolve every identifier of `catalog` under `naming`.
    ///
    /// The catalog must already be validated; this only checks what the
    /// naming convention can break.
    pub fn new(catalog: &Catalog, naming: &NamingConvention) -> Result<Self> {
        let mut type_names: HashMap<String, &str> = HashMap::new();
        let mut modules: HashMap<String, &str> = HashMap::new();

        for namespace in &catalog.namespaces {
            let type_name = naming.type_name(&namespace.name);
            if let Some(other) = type_names.insert(type_name.clone(), &namespace.name) {
                bail!(
                    "namespaces '{}' and '{}' both generate type '{}'",
                    other,
                    namespace.name,
                    type_name
                );
            }
            let file_stem = naming.file_stem(&namespace.name);
            if let Some(other) = modules.insert(file_stem.clone(), &namespace.name) {
                bail!(
                    "namespaces '{}' and '{}' both generate module '{}'",
                    other,
                    namespace.name,
                    file_stem
                );
            }
        }

        let namespaces = catalog
            .namespaces
            .iter()
            .map(|namespace| plan_namespace(catalog, namespace, naming))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { namespaces })
    }

    pub fn namespace(&self, name: &str) -> Option<&NamespacePlan> {
        self.namespaces.iter().find(|ns| ns.name == name)
    }
}

fn plan_namespace(
    catalog: &Catalog,
    namespace: &Namespace,
    naming: &NamingConvention,
) -> Result<NamespacePlan> {
    let type_name = naming.type_name(&namespace.name);
    let mut idents: HashMap<String, &str> = HashMap::new();
    let mut imports = IndexSet::new();
    let mut methods = Vec::with_capacity(namespace.methods.len());

    for method in &namespace.methods {
        let js_name = namespace.method_name(method);
        let ident = naming.method_name(js_name);
        if let Some(other) = idents.insert(ident.clone(), &method.name) {
            bail!(
                "methods '{}' and '{}' of namespace '{}' both generate '{}'",
                other,
                method.name,
                namespace.name,
                ident
            );
        }

        let returns = match &method.returns {
            Some(target) if *target != namespace.name => {
                let Some(target) = catalog.namespace(target) else {
                    bail!(
                        "method '{}' of namespace '{}' returns unknown namespace '{}'",
                        method.name,
                        namespace.name,
                        target
                    );
                };
                let import = Import {
                    module: naming.module_name(&target.name),
                    type_name: naming.type_name(&target.name),
                };
                let returns = import.type_name.clone();
                imports.insert(import);
                returns
            }
            _ => type_name.clone(),
        };

        methods.push(MethodPlan {
            ident,
            js_name: js_name.to_string(),
            head: namespace.is_static().then(|| namespace.head(method)),
            kind: method.kind,
            params: method.params.clone(),
            doc: method.doc.clone(),
            returns,
        });
    }

    Ok(NamespacePlan {
        name: namespace.name.clone(),
        module: naming.module_name(&namespace.name),
        file_stem: naming.file_stem(&namespace.name),
        type_name,
        root: namespace.root().to_string(),
        kind: namespace.kind,
        rendering: namespace.rendering,
        doc: namespace.doc.clone(),
        url: namespace.url.clone(),
        methods,
        imports: imports.into_iter().collect(),
    })
}
