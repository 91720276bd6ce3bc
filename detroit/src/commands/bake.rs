use std::path::PathBuf;

use clap::Args;
use detroit_catalog::{CATALOG_FILE, CatalogFile, Language};
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    language::LanguageSupport,
    ops::{self, BakeOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BakeCommand {
    /// Path to the catalog
    #[arg(short, long, default_value = CATALOG_FILE)]
    pub config: PathBuf,

    /// Output directory (defaults to src/namespaces for Rust, namespaces for Python)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Target language (overrides the catalog setting)
    #[arg(short, long)]
    pub language: Option<Language>,
}

impl BakeCommand {
    pub fn run(&self) -> Result<()> {
        let file = CatalogFile::open(&self.config).unwrap_or_exit();
        let catalog = file.catalog();
        let lang = LanguageSupport::get(self.language.unwrap_or(catalog.generator.language));

        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(lang.default_output));

        let report = ops::bake(
            catalog,
            &lang,
            BakeOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
