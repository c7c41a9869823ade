//! Content Configuration

use std::path::PathBuf;

/// Content reader configuration
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// Directory holding one sub-directory per locale
    pub content_root: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            content_root: PathBuf::from("content/blog"),
        }
    }
}

impl ContentConfig {
    pub fn new(content_root: impl Into<PathBuf>) -> Self {
        Self {
            content_root: content_root.into(),
        }
    }
}
