// Pure-data configuration crate (no Bevy dependency).
// Provides: data structures, layered RON loading, validation producing warnings (non-fatal),
// and the settings persistence seam.

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

mod settings;
mod store;

pub use settings::{clamp_strength, PhysicsSettings, STRENGTH_MAX, STRENGTH_MIN};
pub use store::{MemoryStore, RonFileStore, SettingsStore};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            title: "Levity".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of driven elements; fixed for the lifetime of a simulation.
    pub element_count: usize,
    /// Seed for the deterministic jitter source. `None` = entropy.
    pub seed: Option<u64>,
}
impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            element_count: 10,
            seed: None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct PersistenceConfig {
    pub enabled: bool,
    /// RON file holding the last used [`PhysicsSettings`].
    pub path: String,
}
impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "assets/config/settings.ron".into(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub simulation: SimulationConfig,
    /// Initial force settings; a persisted record (if any) takes precedence.
    pub physics: PhysicsSettings,
    pub persistence: PersistenceConfig,
}

impl AppConfig {
    /// Load from a single RON file (errors contain human-readable context).
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Load file; on failure returns default config plus error string.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load multiple layers; later overrides earlier (deep merge).
    /// Skips missing files; returns (config, used_paths, errors).
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();

        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                if let Some(val) = incoming.take() {
                                    merge_value(ev, val);
                                }
                                break;
                            }
                        }
                        if let Some(val) = incoming {
                            bm.insert(k, val);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }

        for p in paths {
            let path_ref = p.as_ref();
            if !path_ref.exists() {
                continue;
            }
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        match &mut merged {
                            Some(cur) => merge_value(cur, val),
                            None => merged = Some(val),
                        }
                        used.push(path_ref.to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }

        let Some(val) = merged else {
            return (AppConfig::default(), used, errors);
        };
        match val.into_rust::<AppConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (AppConfig::default(), used, errors)
            }
        }
    }

    /// Produce validation warnings (non-fatal) for suspicious values.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.width < 200.0 {
            w.push(format!(
                "window.width {} below 200; side walls cross the origin",
                self.window.width
            ));
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if self.simulation.element_count == 0 {
            w.push("simulation.element_count is 0; nothing will move".into());
        }
        if self.simulation.element_count > 10_000 {
            w.push(format!(
                "simulation.element_count {} very high; performance may suffer",
                self.simulation.element_count
            ));
        }
        self.physics.validate_into("physics.", &mut w);
        if self.persistence.enabled && self.persistence.path.trim().is_empty() {
            w.push("persistence.path empty while persistence enabled".into());
        }
        w
    }
}
