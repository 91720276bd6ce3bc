use std::path::{Path, PathBuf};

use crate::{Catalog, Error, Result};

/// A catalog file with both its raw content and the parsed catalog.
#[derive(Debug)]
pub struct CatalogFile {
    path: PathBuf,
    content: String,
    catalog: Catalog,
}

impl CatalogFile {
    /// Open and parse a catalog file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let catalog = Catalog::from_str_with_filename(&content, &path.display().to_string())?;

        Ok(Self {
            path,
            content,
            catalog,
        })
    }

    /// Validate `catalog` and write it to `path`.
    pub fn create(path: impl AsRef<Path>, catalog: Catalog) -> Result<Self> {
        catalog.validate()?;
        let path = path.as_ref().to_path_buf();
        let content = catalog.to_toml_string()?;
        std::fs::write(&path, &content).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;

        Ok(Self {
            path,
            content,
            catalog,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }
}
