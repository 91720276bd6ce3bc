//! Scraped page records.

use std::path::Path;

use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

/// One documented API entry extracted from a reference page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Record {
    /// Link text of the API index, e.g. `d3.scaleLinear` or `linear.domain`
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub url: Option<String>,

    /// Section of the API index; grouping never crosses sections
    #[serde(default)]
    pub section: Option<String>,

    /// Page content in order; the first heading is the signature
    #[serde(default)]
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Block {
    Heading(String),
    Paragraph(String),
    Code(Vec<String>),
}

impl Record {
    pub fn heading(&self) -> Option<&str> {
        self.blocks.iter().find_map(|block| match block {
            Block::Heading(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// The API signature: the first heading, or the name without one.
    pub fn signature(&self) -> &str {
        self.heading().unwrap_or(&self.name)
    }

    /// Documentation blocks, the signature heading excluded.
    pub fn body(&self) -> Vec<&Block> {
        let mut seen_heading = false;
        self.blocks
            .iter()
            .filter(|block| {
                if !seen_heading && matches!(block, Block::Heading(_)) {
                    seen_heading = true;
                    return false;
                }
                true
            })
            .collect()
    }
}

/// Parse a JSON array of records.
pub fn parse_records(json: &str) -> Result<Vec<Record>> {
    serde_json::from_str(json).wrap_err("invalid scraped records")
}

/// Read a JSON array of records from a file.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
    parse_records(&json).wrap_err_with(|| format!("in '{}'", path.display()))
}
