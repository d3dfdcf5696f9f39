//! Wiring of the engine with the host's file-backed collaborators.

use crate::config::{AppSettings, TomlConfigStore};
use crate::error::AppResult;
use crate::injectors::{ModeFile, file_injectors};
use crate::source::{DirectoryThemeSource, bundled_themes};
use engine::{ApplicationCoordinator, SourceDocument, ThemeRegistry};

/// Bundled themes first, then the themes directory. A user file with the
/// same id as a bundled theme replaces it.
pub fn theme_documents(settings: &AppSettings) -> AppResult<Vec<SourceDocument>> {
    let mut documents = bundled_themes();
    documents.extend(DirectoryThemeSource::new(settings.themes_dir()).documents()?);
    Ok(documents)
}

pub fn build_coordinator(settings: &AppSettings) -> AppResult<ApplicationCoordinator> {
    let mut registry = ThemeRegistry::new();
    registry.load(theme_documents(settings)?);

    let output_dir = settings.output_dir();
    let store = TomlConfigStore::new(settings.state_file());
    let coordinator = ApplicationCoordinator::from_store(registry, Box::new(store))?
        .with_injectors(file_injectors(&output_dir))
        .with_mode_signal(ModeFile::new(&output_dir));

    log::debug!("Coordinator ready: {coordinator:?}");
    Ok(coordinator)
}
