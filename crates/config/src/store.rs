// Persistence seam for the live force settings.
// The engine never touches storage directly; hosts hand a store to the
// persistence resource which writes whenever the settings change.

use std::fs;
use std::path::{Path, PathBuf};

use crate::PhysicsSettings;

/// Key-value style storage for [`PhysicsSettings`].
pub trait SettingsStore: Send + Sync {
    /// `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<PhysicsSettings>, String>;
    fn save(&mut self, settings: &PhysicsSettings) -> Result<(), String>;
}

/// Stores settings as a small RON document on disk.
#[derive(Debug, Clone)]
pub struct RonFileStore {
    path: PathBuf,
}

impl RonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for RonFileStore {
    fn load(&self) -> Result<Option<PhysicsSettings>, String> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path)
            .map_err(|e| format!("{}: read error: {e}", self.path.display()))?;
        ron::from_str::<PhysicsSettings>(&data)
            .map(Some)
            .map_err(|e| format!("{}: parse error: {e}", self.path.display()))
    }

    fn save(&mut self, settings: &PhysicsSettings) -> Result<(), String> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| format!("{}: create dir: {e}", parent.display()))?;
        }
        let text = ron::ser::to_string_pretty(settings, ron::ser::PrettyConfig::default())
            .map_err(|e| format!("serialize settings: {e}"))?;
        fs::write(&self.path, text).map_err(|e| format!("{}: write error: {e}", self.path.display()))
    }
}

/// In-memory store; counts writes so callers can assert on save behaviour.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    pub saved: Option<PhysicsSettings>,
    pub writes: usize,
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Option<PhysicsSettings>, String> {
        Ok(self.saved)
    }

    fn save(&mut self, settings: &PhysicsSettings) -> Result<(), String> {
        self.saved = Some(*settings);
        self.writes += 1;
        Ok(())
    }
}
