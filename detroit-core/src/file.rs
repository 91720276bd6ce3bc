use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Default comment placed at the top of every generated file.
pub const GENERATED_HEADER: &str = "Generated by detroit. Do not edit.";

/// Trait for types that represent a generated file.
///
/// Generated files are always overwritten; their header says so.
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Render into a [`File`] rooted at `base` without touching the disk.
    fn to_file(&self, base: &Path) -> File {
        File {
            path: self.path(base),
            content: self.render(),
        }
    }

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<()> {
        self.to_file(base).write()
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// A rendered file waiting to be written
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file, replacing any previous content.
    pub fn write(&self) -> Result<()> {
        write_file(&self.path, &self.content)?;
        tracing::info!(path = %self.path.display(), "wrote file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Greeting;

    impl GeneratedFile for Greeting {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("greeting.txt")
        }

        fn render(&self) -> String {
            "hello".to_string()
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_file_write_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        fs::write(&path, "original").unwrap();
        File::new(&path, "updated").write().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_generated_file_to_file() {
        let temp = TempDir::new().unwrap();
        let file = Greeting.to_file(temp.path());

        assert_eq!(file.path(), temp.path().join("greeting.txt"));
        assert_eq!(file.content(), "hello");
        assert!(!file.path().exists());

        Greeting.write(temp.path()).unwrap();
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "hello");
    }
}
