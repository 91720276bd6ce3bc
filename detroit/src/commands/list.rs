use std::path::PathBuf;

use clap::Args;
use detroit_catalog::{CATALOG_FILE, CatalogFile, Language};
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    language::LanguageSupport,
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Path to the catalog
    #[arg(short, long, default_value = CATALOG_FILE)]
    pub config: PathBuf,

    /// Show identifiers for this language instead of the catalog's
    #[arg(short, long)]
    pub language: Option<Language>,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let file = CatalogFile::open(&self.config).unwrap_or_exit();
        let catalog = file.catalog();
        let lang = LanguageSupport::get(self.language.unwrap_or(catalog.generator.language));

        ops::list(catalog, &lang)?.render(&mut TerminalOutput::new());
        Ok(())
    }
}
