// Windowless run: N frames through the same plugin, then the render sink as JSON.

use anyhow::{Context, Result};
use bevy::prelude::*;
use lv_core::Simulation;
use lv_physics::RenderSnapshot;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
pub struct OffsetRow {
    pub index: usize,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct HeadlessReport {
    pub frames: u32,
    pub ticks: u64,
    pub gravity_on: bool,
    pub antigravity_on: bool,
    pub gravity_strength: i32,
    pub bounce_strength: i32,
    pub offsets: Vec<OffsetRow>,
}

pub fn report(app: &App, frames: u32) -> HeadlessReport {
    let world = app.world();
    let sim = world.resource::<Simulation>();
    let snapshot = world.resource::<RenderSnapshot>();
    let settings = sim.settings();
    HeadlessReport {
        frames,
        ticks: snapshot.tick,
        gravity_on: settings.gravity_on,
        antigravity_on: settings.antigravity_on,
        gravity_strength: settings.gravity_strength,
        bounce_strength: settings.bounce_strength,
        offsets: snapshot
            .offsets
            .iter()
            .enumerate()
            .map(|(index, o)| OffsetRow {
                index,
                x: o.x,
                y: o.y,
            })
            .collect(),
    }
}

/// Drive `frames` updates and serialize the final snapshot.
pub fn run(app: &mut App, frames: u32) -> Result<String> {
    app.finish();
    app.cleanup();
    for _ in 0..frames {
        app.update();
    }
    let report = report(app, frames);
    info!(frames, ticks = report.ticks, "Headless run complete");
    serde_json::to_string_pretty(&report).context("serialize headless report")
}
