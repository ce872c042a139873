use std::time::Duration;

use bevy::prelude::*;

/// Length of the cosmetic shake / reset window.
pub const FLASH_SECS: f32 = 0.5;

/// Fire-once cosmetic flag. Triggering again replaces the running timer.
#[derive(Debug, Default, Clone)]
pub struct Flash {
    timer: Option<Timer>,
}

impl Flash {
    pub fn trigger(&mut self) {
        self.timer = Some(Timer::from_seconds(FLASH_SECS, TimerMode::Once));
    }

    pub fn tick(&mut self, delta: Duration) {
        if let Some(timer) = self.timer.as_mut() {
            timer.tick(delta);
            if timer.finished() {
                self.timer = None;
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.timer.is_some()
    }
}

/// `is_shaking` / `is_resetting` for renderers. Never read by the engine.
#[derive(Resource, Debug, Default, Clone)]
pub struct Flashes {
    pub shaking: Flash,
    pub resetting: Flash,
}

impl Flashes {
    pub fn is_shaking(&self) -> bool {
        self.shaking.is_active()
    }

    pub fn is_resetting(&self) -> bool {
        self.resetting.is_active()
    }
}

pub(crate) fn tick_flashes(time: Res<Time>, mut flashes: ResMut<Flashes>) {
    if !flashes.is_shaking() && !flashes.is_resetting() {
        return;
    }
    let delta = time.delta();
    flashes.shaking.tick(delta);
    flashes.resetting.tick(delta);
}
