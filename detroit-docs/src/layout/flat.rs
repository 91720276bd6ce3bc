use detroit_catalog::{Catalog, Method, Namespace, Rendering};
use detroit_core::is_identifier;

use super::{ImportOptions, Imported, method_kind};
use crate::{Record, assemble_doc, parse_signature};

/// Every record becomes a chain method of one namespace.
pub(super) fn import(records: &[Record], options: &ImportOptions) -> Imported {
    let name = options.namespace_name();
    let mut namespace = Namespace::new(name);
    if name != options.root {
        namespace.root = Some(options.root.clone());
    }
    namespace.rendering = options.rendering.unwrap_or(Rendering::Repr);
    namespace.url = options.url.clone();

    let mut imported = Imported::new(Catalog::default());
    let prefix = options.root_prefix();

    for record in records {
        let record_name = record.name.trim();
        if record_name.is_empty() {
            imported.skip(record_name, "record has no name");
            continue;
        }
        if record_name.contains('[') {
            imported.skip(record_name, "iterator entry");
            continue;
        }

        let signature = parse_signature(record.signature());
        let head = signature.head.strip_prefix(&prefix).unwrap_or(&signature.head);
        if !is_identifier(head) {
            imported.skip(record_name, format!("'{}' is not a method name", head));
            continue;
        }
        if namespace.methods.iter().any(|m| m.name == head) {
            imported.skip(record_name, format!("duplicate method '{}'", head));
            continue;
        }

        tracing::debug!(method = %head, "imported method");
        let kind = method_kind(record, &signature);
        namespace.methods.push(
            Method::new(head)
                .with_kind(kind)
                .with_params(signature.params)
                .with_doc(assemble_doc(record.body(), record.url.as_deref())),
        );
    }

    imported.catalog.namespaces.push(namespace);
    imported
}
