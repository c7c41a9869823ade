//! File-System Repository
//!
//! Layout: `<content_root>/<locale>/<name>.md` (or `.mdx`).

use std::fs::FileType;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use crate::domain::entities::SourceDocument;
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::Locale;
use crate::error::ContentResult;

const CONTENT_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Content files read from disk on every call
#[derive(Debug, Clone)]
pub struct FsPostRepository {
    content_root: PathBuf,
}

impl FsPostRepository {
    pub fn new(content_root: impl Into<PathBuf>) -> Self {
        Self {
            content_root: content_root.into(),
        }
    }

    pub fn content_root(&self) -> &Path {
        &self.content_root
    }

    fn locale_dir(&self, locale: &Locale) -> PathBuf {
        self.content_root.join(locale.as_str())
    }
}

fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CONTENT_EXTENSIONS.contains(&ext))
}

/// Whether a content-named entry should be read
///
/// An entry whose type cannot be read (e.g. deleted after the directory
/// listing) is skipped with a warning.
fn is_readable_entry(path: &Path, file_type: io::Result<FileType>) -> bool {
    match file_type {
        Ok(file_type) => !file_type.is_dir(),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Skipping content entry with unreadable file type"
            );
            false
        }
    }
}

impl PostRepository for FsPostRepository {
    async fn load_documents(&self, locale: &Locale) -> ContentResult<Vec<SourceDocument>> {
        let dir = self.locale_dir(locale);

        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(locale = %locale, "No content directory for locale");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if is_content_file(&path) && is_readable_entry(&path, entry.file_type().await) {
                paths.push(path);
            }
        }
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            let stem = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();

            match tokio::fs::read_to_string(&path).await {
                Ok(raw) => documents.push(SourceDocument { stem, raw }),
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Skipping unreadable content file"
                    );
                }
            }
        }

        tracing::debug!(locale = %locale, count = documents.len(), "Loaded content files");
        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_with_unreadable_type_is_skipped() {
        let gone = Path::new("deleted-after-listing.md");
        assert!(!is_readable_entry(gone, Err(io::Error::from(ErrorKind::NotFound))));
    }

    #[test]
    fn test_entry_type_filter() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("post.md");
        std::fs::write(&file, "x").unwrap();

        let file_type = std::fs::metadata(&file).map(|m| m.file_type());
        assert!(is_readable_entry(&file, file_type));

        let dir_type = std::fs::metadata(dir.path()).map(|m| m.file_type());
        assert!(!is_readable_entry(dir.path(), dir_type));
    }

    #[test]
    fn test_content_extensions() {
        assert!(is_content_file(Path::new("a.md")));
        assert!(is_content_file(Path::new("a.mdx")));
        assert!(!is_content_file(Path::new("a.txt")));
        assert!(!is_content_file(Path::new("md")));
    }
}
