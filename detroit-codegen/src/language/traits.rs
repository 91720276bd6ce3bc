//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use detroit_core::File;
use eyre::Result;

/// Trait for language-specific code generators.
///
/// Implement this trait to add support for generating namespace types in a
/// new language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "rust", "python")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "rs", "py")
    fn file_extension(&self) -> &'static str;

    /// Render every file in memory, relative to `output_dir`.
    fn files(&self, output_dir: &Path) -> Vec<File>;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile> {
        self.files(Path::new(""))
            .into_iter()
            .map(|file| PreviewFile {
                path: file.path().display().to_string(),
                content: file.content().to_string(),
            })
            .collect()
    }

    /// Generate all files into the specified output directory.
    ///
    /// Every file is rendered before the first one is written.
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        write_files(self.files(output_dir))
    }
}

/// Write rendered files in order.
pub fn write_files(files: Vec<File>) -> Result<GenerateResult> {
    let mut result = GenerateResult::default();
    for file in files {
        file.write()?;
        result.written.push(file.path().to_path_buf());
    }
    Ok(result)
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    pub written: Vec<PathBuf>,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    pub content: String,
}
