use bevy::prelude::*;
use lv_config::{PhysicsSettings, SettingsStore};
use lv_core::Simulation;

/// Writes the live settings to a [`SettingsStore`] whenever they change.
/// Optional: hosts without persistence simply don't insert it.
#[derive(Resource)]
pub struct SettingsPersistence {
    store: Box<dyn SettingsStore>,
    last_saved: Option<PhysicsSettings>,
}

impl SettingsPersistence {
    pub fn new(store: impl SettingsStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            last_saved: None,
        }
    }

    /// Treat `baseline` as already stored (e.g. it was just loaded from the same store).
    pub fn with_baseline(store: impl SettingsStore + 'static, baseline: PhysicsSettings) -> Self {
        Self {
            store: Box::new(store),
            last_saved: Some(baseline),
        }
    }

    pub fn last_saved(&self) -> Option<&PhysicsSettings> {
        self.last_saved.as_ref()
    }

    /// Save `current` if it differs from the last value handed to the store.
    /// A failed write is not retried until the settings change again.
    pub fn sync(&mut self, current: &PhysicsSettings) -> Result<bool, String> {
        if self.last_saved.as_ref() == Some(current) {
            return Ok(false);
        }
        self.last_saved = Some(*current);
        self.store.save(current).map(|_| true)
    }
}

pub(crate) fn persist_settings(
    sim: Res<Simulation>,
    persistence: Option<ResMut<SettingsPersistence>>,
) {
    let Some(mut persistence) = persistence else {
        return;
    };
    if !sim.is_changed() {
        return;
    }
    match persistence.sync(sim.settings()) {
        Ok(true) => debug!(settings = ?sim.settings(), "Settings saved"),
        Ok(false) => {}
        Err(e) => warn!("SETTINGS SAVE FAILED: {e}"),
    }
}
