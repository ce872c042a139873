use std::fmt;

use bevy::math::Vec2;
use bevy::prelude::Resource;
use lv_config::{clamp_strength, PhysicsSettings};

use crate::{EntropyJitter, Jitter, SeededJitter, SimulationState, Viewport};

/// Half width of the per-axis velocity window assigned by [`Simulation::shake`].
pub const SHAKE_IMPULSE: f32 = 20.0;

/// Simulation context: the element snapshot, the live force settings and the
/// random source. Every mutation of the element array goes through here.
#[derive(Resource)]
pub struct Simulation {
    state: SimulationState,
    settings: PhysicsSettings,
    jitter: Box<dyn Jitter>,
    ticks: u64,
}

impl fmt::Debug for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulation")
            .field("elements", &self.state.len())
            .field("settings", &self.settings)
            .field("ticks", &self.ticks)
            .finish()
    }
}

impl Simulation {
    pub fn new(element_count: usize, settings: PhysicsSettings, jitter: impl Jitter + 'static) -> Self {
        Self {
            state: SimulationState::new(element_count),
            settings: settings.normalized(),
            jitter: Box::new(jitter),
            ticks: 0,
        }
    }

    /// Deterministic simulation (same seed, same drift and shake values).
    pub fn seeded(element_count: usize, settings: PhysicsSettings, seed: u64) -> Self {
        Self::new(element_count, settings, SeededJitter::new(seed))
    }

    pub fn from_entropy(element_count: usize, settings: PhysicsSettings) -> Self {
        Self::new(element_count, settings, EntropyJitter::from_entropy())
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn settings(&self) -> &PhysicsSettings {
        &self.settings
    }

    pub fn offsets(&self) -> Vec<Vec2> {
        self.state.offsets()
    }

    pub fn element_count(&self) -> usize {
        self.state.len()
    }

    /// Number of ticks applied since creation.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Whether the scheduler should be ticking.
    pub fn is_running(&self) -> bool {
        self.settings.any_force()
    }

    /// Flip gravity; switching it on switches antigravity off. Returns the new value.
    pub fn toggle_gravity(&mut self) -> bool {
        self.settings.gravity_on = !self.settings.gravity_on;
        if self.settings.gravity_on {
            self.settings.antigravity_on = false;
        }
        self.settings.gravity_on
    }

    /// Flip antigravity; switching it on switches gravity off. Returns the new value.
    pub fn toggle_antigravity(&mut self) -> bool {
        self.settings.antigravity_on = !self.settings.antigravity_on;
        if self.settings.antigravity_on {
            self.settings.gravity_on = false;
        }
        self.settings.antigravity_on
    }

    /// Returns the stored (clamped) value.
    pub fn set_gravity_strength(&mut self, n: i32) -> i32 {
        self.settings.gravity_strength = clamp_strength(n);
        self.settings.gravity_strength
    }

    /// Returns the stored (clamped) value.
    pub fn set_bounce_strength(&mut self, n: i32) -> i32 {
        self.settings.bounce_strength = clamp_strength(n);
        self.settings.bounce_strength
    }

    /// Replace every velocity with a random impulse. Leaves the force flags alone,
    /// so a stopped simulation stays stopped until a force is enabled.
    pub fn shake(&mut self) {
        let jitter = &mut self.jitter;
        self.state = self.state.with_velocities(|_| {
            Vec2::new(
                jitter.range(-SHAKE_IMPULSE, SHAKE_IMPULSE),
                jitter.range(-SHAKE_IMPULSE, SHAKE_IMPULSE),
            )
        });
    }

    /// Disable both forces and return every element to rest at the origin.
    pub fn reset(&mut self) {
        self.settings.gravity_on = false;
        self.settings.antigravity_on = false;
        self.state = self.state.zeroed();
    }

    /// Advance one tick against `viewport`. No-op (returns false) while no force is on.
    pub fn tick(&mut self, viewport: Viewport) -> bool {
        if !self.is_running() {
            return false;
        }
        let next = self.state.advance(&self.settings, viewport, self.jitter.as_mut());
        self.state = next;
        self.ticks += 1;
        true
    }
}
