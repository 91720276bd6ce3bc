use std::path::PathBuf;

use clap::Args;
use detroit_catalog::{CatalogFile, Rendering};
use detroit_docs::{ImportOptions, Layout, load_records};
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ImportCommand {
    /// Scraped records (JSON array)
    pub records: PathBuf,

    /// `flat` (Observable Plot) or `grouped` (D3)
    #[arg(long, default_value = "flat")]
    pub layout: Layout,

    /// Root JavaScript expression, e.g. `Plot` or `d3`
    #[arg(long)]
    pub root: String,

    /// Name of the root namespace (defaults to the root expression)
    #[arg(long)]
    pub name: Option<String>,

    /// Rendering of the root namespace: `repr` or `plain`
    #[arg(long)]
    pub rendering: Option<Rendering>,

    /// Documentation URL of the root namespace
    #[arg(long)]
    pub url: Option<String>,

    /// Catalog to write
    #[arg(short, long, default_value = "detroit.toml")]
    pub output: PathBuf,

    /// Print the catalog instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl ImportCommand {
    pub fn run(&self) -> Result<()> {
        let records = load_records(&self.records)?;

        let mut options = ImportOptions::new(self.layout, self.root.as_str());
        options.name = self.name.clone();
        options.rendering = self.rendering;
        options.url = self.url.clone();

        let (catalog, mut report) = ops::import(&records, &options);
        if self.dry_run {
            catalog.validate().unwrap_or_exit();
            println!("{}", catalog.to_toml_string().unwrap_or_exit());
        } else {
            CatalogFile::create(&self.output, catalog).unwrap_or_exit();
            report.output = Some(self.output.clone());
        }

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
