use super::model::{ContentUnit, Tenant};
use std::path::PathBuf;

const TEXTS_DIR: &str = "texts";
const AUDIO_DIR: &str = "audio";

pub const TEXT_EXTENSION: &str = "txt";
pub const AUDIO_EXTENSION: &str = "mp3";

/// Maps content units to their text source and audio artifact paths.
///
/// The mapping is pure: it never touches the filesystem.
///
/// ```text
/// <tenant>/texts/<lang>/<monument>/<mode>.txt
/// <tenant>/audio/<lang>/<monument>/<mode>.mp3
/// ```
#[derive(Debug, Clone)]
pub struct ContentLayout {
    base_dir: PathBuf,
}

impl ContentLayout {
    pub fn new(tenant: &Tenant) -> Self {
        Self {
            base_dir: tenant.base_dir.clone(),
        }
    }

    pub fn text_root(&self, language: &str) -> PathBuf {
        self.base_dir.join(TEXTS_DIR).join(language)
    }

    pub fn audio_root(&self, language: &str) -> PathBuf {
        self.base_dir.join(AUDIO_DIR).join(language)
    }

    pub fn audio_dir(&self, unit: &ContentUnit) -> PathBuf {
        self.audio_root(&unit.language).join(&unit.monument)
    }

    pub fn text_path(&self, unit: &ContentUnit) -> PathBuf {
        self.text_root(&unit.language)
            .join(&unit.monument)
            .join(format!("{}.{}", unit.mode, TEXT_EXTENSION))
    }

    pub fn audio_path(&self, unit: &ContentUnit) -> PathBuf {
        self.audio_dir(unit)
            .join(format!("{}.{}", unit.mode, AUDIO_EXTENSION))
    }
}
