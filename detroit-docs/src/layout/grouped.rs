use detroit_catalog::{Catalog, Method, MethodKind, Namespace, NamespaceKind, Param, Rendering};
use detroit_core::{is_identifier, to_pascal_case};
use indexmap::IndexMap;

use super::{ImportOptions, Imported, method_kind};
use crate::{Record, assemble_doc, parse_signature, see_more};

/// Records left out of grouped imports: easing and curve variants, JS
/// iterators, and the format specifier constructor.
const EXCLUDED: &[&str] = &[
    "back.",
    "elastic.",
    "poly.",
    "iterator",
    "cardinal.",
    "bundle.",
    "catmullRom.",
    "new d3.FormatSpecifier",
];

/// A static method of the root namespace being assembled.
#[derive(Debug, Default)]
struct Entry {
    params: Vec<Param>,
    kind: MethodKind,
    doc: Vec<String>,
    /// Methods of the sub-object the static method returns, by name
    subs: IndexMap<String, Method>,
}

impl Entry {
    fn new(params: Vec<Param>, kind: MethodKind, doc: String) -> Self {
        let mut entry = Self {
            params,
            kind,
            ..Self::default()
        };
        entry.push_doc(doc);
        entry
    }

    /// Take over the signature of a later record and append its doc.
    fn merge(&mut self, params: Vec<Param>, kind: MethodKind, doc: String) {
        self.params = params;
        self.kind = kind;
        self.push_doc(doc);
    }

    fn push_doc(&mut self, doc: String) {
        if !doc.is_empty() {
            self.doc.push(doc);
        }
    }
}

/// Heads starting with the root prefix (or `new `) are static methods of the
/// root namespace; `prefix.method` records are attached to every static
/// method whose name contains `prefix`. Grouping stays within a section.
pub(super) fn import(records: &[Record], options: &ImportOptions) -> Imported {
    let mut imported = Imported::new(Catalog::default());

    let mut sections: IndexMap<Option<&str>, Vec<&Record>> = IndexMap::new();
    for record in records {
        sections
            .entry(record.section.as_deref())
            .or_default()
            .push(record);
    }

    let mut groups = Vec::with_capacity(sections.len());
    for records in sections.values() {
        groups.push(group(records, options, &mut imported));
    }

    let (root, subs) = build(groups, options, &mut imported);
    imported.catalog.namespaces.push(root);
    imported.catalog.namespaces.extend(subs);
    imported
}

/// Name of a static method once `new ` and the root prefix are removed.
fn stripped<'a>(key: &'a str, prefix: &str) -> &'a str {
    let key = key.strip_prefix("new ").unwrap_or(key);
    key.strip_prefix(prefix).unwrap_or(key)
}

fn group(
    records: &[&Record],
    options: &ImportOptions,
    imported: &mut Imported,
) -> IndexMap<String, Entry> {
    let prefix = options.root_prefix();
    let mut entries: IndexMap<String, Entry> = IndexMap::new();

    for record in records {
        let name = record.name.trim();
        if name.is_empty() {
            imported.skip(name, "record has no name");
            continue;
        }
        if name.contains('[') {
            imported.skip(name, "iterator entry");
            continue;
        }

        let is_new = name.starts_with("new ");
        let qualified = match name.strip_prefix("new ").map(str::trim_start) {
            Some(rest) if !rest.starts_with(&prefix) => format!("new {}{}", prefix, rest),
            _ => name.to_string(),
        };
        if let Some(token) = EXCLUDED
            .iter()
            .find(|token| name.contains(*token) || qualified.contains(*token))
        {
            imported.skip(name, format!("excluded ({})", token));
            continue;
        }

        let signature = parse_signature(record.signature());
        let kind = method_kind(record, &signature);
        let doc = assemble_doc(record.body(), record.url.as_deref());

        if is_new || qualified.starts_with(&prefix) {
            match entries.get_mut(&qualified) {
                Some(entry) => entry.merge(signature.params, kind, doc),
                None => {
                    entries.insert(qualified, Entry::new(signature.params, kind, doc));
                }
            }
        } else if let Some((object, suffix)) = name.split_once('.') {
            if !is_identifier(suffix) {
                imported.skip(name, format!("'{}' is not a method name", suffix));
                continue;
            }
            let method = Method::new(suffix)
                .with_kind(kind)
                .with_params(signature.params)
                .with_doc(doc);

            let needle = object.to_lowercase();
            let mut found = false;
            for (key, entry) in entries.iter_mut() {
                if stripped(key, &prefix).to_lowercase().contains(&needle) {
                    entry
                        .subs
                        .entry(suffix.to_string())
                        .or_insert_with(|| method.clone());
                    found = true;
                }
            }

            if !found {
                let doc = record.url.as_deref().map(see_more).unwrap_or_default();
                let mut entry = Entry::new(Vec::new(), MethodKind::Call, doc);
                entry.subs.insert(suffix.to_string(), method);
                entries.insert(format!("{}{}", prefix, object), entry);
            }
        } else {
            let needle = name.to_lowercase();
            let key = entries
                .keys()
                .find(|key| stripped(key, &prefix).to_lowercase().contains(&needle))
                .cloned()
                .unwrap_or_else(|| format!("{}{}", prefix, name));
            match entries.get_mut(&key) {
                Some(entry) => entry.merge(signature.params, kind, doc),
                None => {
                    entries.insert(key, Entry::new(signature.params, kind, doc));
                }
            }
        }
    }

    entries
}

fn build(
    groups: Vec<IndexMap<String, Entry>>,
    options: &ImportOptions,
    imported: &mut Imported,
) -> (Namespace, Vec<Namespace>) {
    let prefix = options.root_prefix();
    let name = options.namespace_name();

    let mut root = Namespace::new(name);
    if name != options.root {
        root.root = Some(options.root.clone());
    }
    root.kind = NamespaceKind::Static;
    root.rendering = options.rendering.unwrap_or(Rendering::Plain);
    root.url = options.url.clone();

    let mut subs: Vec<Namespace> = Vec::new();

    for (key, entry) in groups.into_iter().flatten() {
        let method_name = stripped(&key, &prefix);
        if !is_identifier(method_name) {
            imported.skip(&key, format!("'{}' is not a method name", method_name));
            continue;
        }

        if let Some(existing) = root
            .methods
            .iter_mut()
            .find(|m| stripped(&m.name, &prefix) == method_name)
        {
            if entry.subs.is_empty() {
                imported.skip(&key, format!("duplicate method '{}'", method_name));
                continue;
            }
            let root_expr = sub_root(&existing.name, existing.kind);
            let sub_name = existing
                .returns
                .get_or_insert_with(|| to_pascal_case(method_name))
                .clone();
            merge_sub(&mut subs, &sub_name, root_expr, entry.subs);
            continue;
        }

        let mut method = Method::new(key.as_str())
            .with_kind(entry.kind)
            .with_params(entry.params)
            .with_doc(entry.doc.join("\n\n"));
        if !entry.subs.is_empty() {
            let sub_name = to_pascal_case(method_name);
            merge_sub(&mut subs, &sub_name, sub_root(&key, entry.kind), entry.subs);
            method = method.with_returns(sub_name);
        }
        tracing::debug!(method = %key, "imported static method");
        root.methods.push(method);
    }

    (root, subs)
}

/// Expression a sub-object chain starts from: the call of its static
/// method, or the constant itself.
fn sub_root(head: &str, kind: MethodKind) -> String {
    match kind {
        MethodKind::Call => format!("{}()", head),
        MethodKind::Constant => head.to_string(),
    }
}

/// Add sub-object methods to the namespace `name`, creating it on first use.
fn merge_sub(
    subs: &mut Vec<Namespace>,
    name: &str,
    root: String,
    methods: IndexMap<String, Method>,
) {
    let index = match subs.iter().position(|ns| ns.name == name) {
        Some(index) => index,
        None => {
            let mut namespace = Namespace::new(name);
            namespace.root = Some(root);
            subs.push(namespace);
            subs.len() - 1
        }
    };

    let namespace = &mut subs[index];
    for (suffix, method) in methods {
        if !namespace.methods.iter().any(|m| m.name == suffix) {
            namespace.methods.push(method);
        }
    }
}
