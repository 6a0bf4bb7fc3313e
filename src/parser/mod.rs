//! Leaf parsers: frontmatter splitting and section extraction.

pub mod frontmatter;
pub mod sections;

use frontmatter::{Frontmatter, FrontmatterError};
use std::path::{Path, PathBuf};

/// One source file after frontmatter splitting.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub path: PathBuf,
    pub frontmatter: Frontmatter,
    pub body: String,
    /// 1-indexed file line on which `body` starts.
    pub body_line: usize,
}

impl RawDocument {
    /// Splits already-read file `content` into a document.
    pub fn parse(path: &Path, content: &str) -> Result<RawDocument, FrontmatterError> {
        let split = frontmatter::split(content)?;
        Ok(RawDocument {
            path: path.to_path_buf(),
            frontmatter: split.frontmatter,
            body: split.body,
            body_line: split.body_line,
        })
    }

    pub fn outline(&self) -> sections::Outline {
        sections::extract(&self.body, self.body_line)
    }
}
