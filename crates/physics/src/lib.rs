//! lv_physics: Bevy scheduling layer for the levity force engine.
//!
//! Responsibilities:
//! * Own the [`Simulation`] resource and tick it once per frame while a force is on.
//! * Apply [`SimCommand`] events (toggles, strengths, shake, reset) and emit [`Notice`]s.
//! * Track the primary window into [`Viewport`], fresh every frame.
//! * Publish offsets to [`RenderSnapshot`] and keep the cosmetic [`Flashes`].
//! * Save changed settings through an optional [`SettingsPersistence`].

use bevy::prelude::*;
use lv_config::{AppConfig, PhysicsSettings};
use lv_core::{Simulation, Viewport};

mod commands;
mod flash;
mod persist;
mod scheduler;
mod viewport;

pub use commands::{Notice, NoticeKind, SimCommand};
pub use flash::{Flash, Flashes, FLASH_SECS};
pub use persist::SettingsPersistence;
pub use scheduler::{scheduler_running, RenderSnapshot, SchedulerPhase};

use commands::apply_commands;
use flash::tick_flashes;
use persist::persist_settings;
use scheduler::{advance_simulation, publish_snapshot, track_scheduler_phase};
use viewport::track_primary_window;

/// Frame ordering: commands land before the tick, consumers read after it.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum SimSet {
    Commands,
    Tick,
    Publish,
}

pub struct SimulationPlugin {
    pub element_count: usize,
    pub settings: PhysicsSettings,
    /// `Some` = deterministic jitter.
    pub seed: Option<u64>,
}

impl Default for SimulationPlugin {
    fn default() -> Self {
        Self {
            element_count: 10,
            settings: PhysicsSettings::default(),
            seed: None,
        }
    }
}

impl SimulationPlugin {
    pub fn from_config(cfg: &AppConfig) -> Self {
        Self {
            element_count: cfg.simulation.element_count,
            settings: cfg.physics,
            seed: cfg.simulation.seed,
        }
    }

    fn build_simulation(&self) -> Simulation {
        match self.seed {
            Some(seed) => Simulation::seeded(self.element_count, self.settings, seed),
            None => Simulation::from_entropy(self.element_count, self.settings),
        }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // A host may insert its own Simulation (custom jitter) before adding the plugin.
        if !app.world().contains_resource::<Simulation>() {
            app.insert_resource(self.build_simulation());
        }
        let offsets = app.world().resource::<Simulation>().offsets();

        app.init_resource::<Viewport>()
            .init_resource::<Flashes>()
            .init_resource::<SchedulerPhase>()
            .insert_resource(RenderSnapshot { offsets, tick: 0 })
            .add_event::<SimCommand>()
            .add_event::<Notice>()
            .configure_sets(
                Update,
                (SimSet::Commands, SimSet::Tick, SimSet::Publish).chain(),
            )
            .add_systems(PreUpdate, track_primary_window)
            .add_systems(
                Update,
                (
                    (tick_flashes, apply_commands).chain().in_set(SimSet::Commands),
                    (
                        track_scheduler_phase,
                        advance_simulation.run_if(scheduler_running),
                    )
                        .chain()
                        .in_set(SimSet::Tick),
                    (publish_snapshot, persist_settings).in_set(SimSet::Publish),
                ),
            );

        let sim = app.world().resource::<Simulation>();
        info!(
            elements = sim.element_count(),
            settings = ?sim.settings(),
            "SimulationPlugin ready"
        );
    }
}
