//! Per-tick velocity update.
//!
//! Gravity pulls toward +y (screen down), antigravity pushes toward -y and adds a
//! small random horizontal drift. Friction always applies once the model runs.
//! The scheduler does not call into here while both forces are off, so a stopped
//! simulation keeps its velocities instead of decaying them.

use bevy::math::Vec2;
use lv_config::PhysicsSettings;

use crate::Jitter;

/// Downward acceleration per tick at 100% strength.
pub const GRAVITY_ACCEL: f32 = 0.8;
/// Upward acceleration per tick at 100% strength.
pub const ANTIGRAVITY_ACCEL: f32 = 0.6;
/// Half width of the horizontal drift window under antigravity.
pub const DRIFT_SPREAD: f32 = 0.5;
/// Velocity multiplier applied every tick.
pub const FRICTION: f32 = 0.99;

/// Velocity after one tick of forces and friction.
pub fn next_velocity(velocity: Vec2, settings: &PhysicsSettings, jitter: &mut dyn Jitter) -> Vec2 {
    let mut v = velocity;
    let pull = settings.gravity_scale();
    if settings.gravity_on {
        v.y += pull * GRAVITY_ACCEL;
    }
    if settings.antigravity_on {
        v.y -= pull * ANTIGRAVITY_ACCEL;
        v.x += jitter.range(-DRIFT_SPREAD, DRIFT_SPREAD);
    }
    v * FRICTION
}
