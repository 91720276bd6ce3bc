//! Import operation: scraped records to a catalog.

use detroit_catalog::Catalog;
use detroit_docs::{ImportOptions, Record, import_records};

use crate::reports::ImportReport;

/// Build a catalog from scraped records.
///
/// The report leaves `output` unset; the caller fills it in once the catalog
/// is written.
pub fn import(records: &[Record], options: &ImportOptions) -> (Catalog, ImportReport) {
    let imported = import_records(records, options);
    tracing::info!(
        layout = %options.layout,
        namespaces = imported.catalog.namespaces.len(),
        skipped = imported.skipped.len(),
        "imported records"
    );

    let report = ImportReport {
        records: records.len(),
        namespaces: imported.catalog.namespaces.len(),
        methods: imported.catalog.method_count(),
        skipped: imported.skipped,
        output: None,
    };
    (imported.catalog, report)
}
