//! File-backed collaborators.
//!
//! The host hands artifacts to the consuming application through files in
//! the output directory; the application watches them and reloads.

use crate::utils::write_atomically;
use engine::Surface;
use engine::collaborators::{ModeSignal, StyleInjector, SurfaceInjectors};
use engine::common::CollaboratorError;
use std::path::{Path, PathBuf};

pub const MODE_FILE_NAME: &str = "mode";

/// File name receiving each surface's artifact.
pub fn artifact_file_name(surface: Surface) -> &'static str {
    match surface {
        Surface::Content => "content.css",
        Surface::Chrome => "chrome.qss",
        Surface::Restricted => "restricted.css",
    }
}

/// Writes an artifact to a fixed file, replacing the previous one.
#[derive(Debug, Clone)]
pub struct FileInjector {
    path: PathBuf,
}

impl FileInjector {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn for_surface(output_dir: &Path, surface: Surface) -> Self {
        Self::new(output_dir.join(artifact_file_name(surface)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StyleInjector for FileInjector {
    fn inject(&self, artifact: &str) -> Result<(), CollaboratorError> {
        write_atomically(&self.path, artifact.as_bytes())?;
        log::debug!("Wrote {} bytes to {}", artifact.len(), self.path.display());
        Ok(())
    }
}

/// Writes `dark` or `light` to a file.
#[derive(Debug, Clone)]
pub struct ModeFile {
    path: PathBuf,
}

impl ModeFile {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            path: output_dir.join(MODE_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ModeSignal for ModeFile {
    fn set_dark_mode(&self, dark: bool) -> Result<(), CollaboratorError> {
        let mode = if dark { "dark\n" } else { "light\n" };
        write_atomically(&self.path, mode.as_bytes())?;
        Ok(())
    }
}

/// One file injector per surface, all in `output_dir`.
pub fn file_injectors(output_dir: &Path) -> SurfaceInjectors {
    Surface::ALL
        .into_iter()
        .fold(SurfaceInjectors::new(), |injectors, surface| {
            injectors.with(surface, FileInjector::for_surface(output_dir, surface))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_double_injection_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let injector = FileInjector::for_surface(dir.path(), Surface::Chrome);

        injector.inject("QWidget { color: #FFFFFF; }").unwrap();
        injector.inject("QWidget { color: #000000; }").unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("chrome.qss")).unwrap(),
            "QWidget { color: #000000; }"
        );
    }

    #[test]
    fn test_mode_file() {
        let dir = tempfile::tempdir().unwrap();
        let mode = ModeFile::new(dir.path());

        mode.set_dark_mode(false).unwrap();
        assert_eq!(fs::read_to_string(mode.path()).unwrap(), "light\n");
        mode.set_dark_mode(true).unwrap();
        assert_eq!(fs::read_to_string(mode.path()).unwrap(), "dark\n");
    }

    #[test]
    fn test_unwritable_target_is_collaborator_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file, not a directory").unwrap();

        let injector = FileInjector::new(blocker.join("content.css"));
        assert!(injector.inject("body {}").is_err());
    }
}
