use bevy::prelude::*;
use lv_core::{Simulation, Viewport};

/// Idle while both forces are off; Running otherwise.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerPhase {
    #[default]
    Idle,
    Running,
}

/// Offsets for the render consumer, one per element index. Read-only outside this crate.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct RenderSnapshot {
    pub offsets: Vec<Vec2>,
    /// Simulation tick the offsets belong to.
    pub tick: u64,
}

/// Run condition for the tick system.
pub fn scheduler_running(phase: Res<SchedulerPhase>) -> bool {
    *phase == SchedulerPhase::Running
}

pub(crate) fn track_scheduler_phase(sim: Res<Simulation>, mut phase: ResMut<SchedulerPhase>) {
    let next = if sim.is_running() {
        SchedulerPhase::Running
    } else {
        SchedulerPhase::Idle
    };
    let prev = *phase;
    if phase.set_if_neq(next) {
        info!(from = ?prev, to = ?next, tick = sim.ticks(), "Scheduler phase changed");
    }
}

/// One tick per frame, against the viewport as it is this frame.
pub(crate) fn advance_simulation(mut sim: ResMut<Simulation>, viewport: Res<Viewport>) {
    if !viewport.is_usable() {
        trace!(?viewport, "Viewport unusable; ticking without bounds");
    }
    sim.tick(*viewport);
}

pub(crate) fn publish_snapshot(sim: Res<Simulation>, mut snapshot: ResMut<RenderSnapshot>) {
    if !sim.is_changed() {
        return;
    }
    snapshot.offsets = sim.offsets();
    snapshot.tick = sim.ticks();
}
