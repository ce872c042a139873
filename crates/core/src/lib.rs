//! lv_core: the force engine behind levity.
//!
//! Responsibilities:
//! * `force` – per-tick velocity delta (gravity, antigravity drift, friction).
//! * `boundary` – floor / ceiling / wall clamping against the live viewport.
//! * `state` – index-stable element snapshot, advanced atomically per tick.
//! * `simulation` – the context object owning state, settings and the random
//!   source; hosts call toggles, strength setters, shake, reset and tick on it.
//!
//! Nothing here knows about windows, timers or input; the Bevy scheduling layer
//! lives in `lv_physics`.

pub mod boundary;
pub mod force;
mod jitter;
mod simulation;
mod state;

pub use boundary::{resolve, Viewport};
pub use force::next_velocity;
pub use jitter::{EntropyJitter, FixedJitter, Jitter, SeededJitter};
pub use simulation::{Simulation, SHAKE_IMPULSE};
pub use state::{finite_or_zero, Element, SimulationState};

// Settings are part of the engine's public surface.
pub use lv_config::PhysicsSettings;
