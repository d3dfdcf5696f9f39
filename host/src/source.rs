//! Theme sources: the documents bundled with the binary and a directory of
//! user themes.

use crate::error::{AppError, AppResult};
use engine::SourceDocument;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const BUNDLED: &[(&str, &str)] = &[
    ("one_dark_pro.json", include_str!("../themes/one_dark_pro.json")),
    ("one_light.json", include_str!("../themes/one_light.json")),
];

/// Themes compiled into the binary.
pub fn bundled_themes() -> Vec<SourceDocument> {
    BUNDLED
        .iter()
        .map(|(name, text)| SourceDocument::text(*name, *text))
        .collect()
}

/// Reads every `*.json` file of one directory, sorted by file name.
#[derive(Debug, Clone)]
pub struct DirectoryThemeSource {
    dir: PathBuf,
}

impl DirectoryThemeSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// A missing directory yields no documents. Unreadable files are logged
    /// and skipped; their content never reaches the registry.
    pub fn documents(&self) -> AppResult<Vec<SourceDocument>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("Themes directory {} does not exist", self.dir.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(AppError::io(
                    format!("reading themes directory {}", self.dir.display()),
                    e,
                ));
            }
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && is_json(path))
            .collect();
        paths.sort();

        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            match fs::read_to_string(&path) {
                Ok(text) => documents.push(SourceDocument::text(name, text)),
                Err(e) => log::warn!("Skipping unreadable theme {}: {e}", path.display()),
            }
        }

        log::debug!(
            "Found {} theme file(s) in {}",
            documents.len(),
            self.dir.display()
        );
        Ok(documents)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::ThemeRegistry;

    #[test]
    fn test_bundled_themes_load_cleanly() {
        let mut registry = ThemeRegistry::new();
        let summary = registry.load(bundled_themes());

        assert_eq!(summary.skipped, 0);
        assert!(!summary.fallback_synthesized);
        assert!(registry.contains("one_dark_pro"));
        assert!(registry.contains("one_light"));
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirectoryThemeSource::new(dir.path().join("absent"));
        assert!(source.documents().unwrap().is_empty());
    }

    #[test]
    fn test_only_json_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();
        fs::write(dir.path().join("a.JSON"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let names: Vec<String> = DirectoryThemeSource::new(dir.path())
            .documents()
            .unwrap()
            .iter()
            .map(|doc| doc.name().to_string())
            .collect();
        assert_eq!(names, vec!["a.JSON", "b.json"]);
    }
}
