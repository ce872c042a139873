// Keyboard shortcuts -> SimCommand events.
//   G  toggle gravity        A  toggle antigravity
//   R  reset                 S  shake
//   [ / ]  gravity strength -/+ 10
//   - / =  bounce strength  -/+ 10

use bevy::prelude::*;
use lv_core::{PhysicsSettings, Simulation};
use lv_physics::{SimCommand, SimSet};

pub const STRENGTH_STEP: i32 = 10;

pub struct KeyboardShortcutsPlugin;

impl Plugin for KeyboardShortcutsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, dispatch_shortcuts.before(SimSet::Commands));
    }
}

/// Strength commands are absolute, so they are computed from the live settings.
pub fn command_for_key(key: KeyCode, settings: &PhysicsSettings) -> Option<SimCommand> {
    let cmd = match key {
        KeyCode::KeyG => SimCommand::ToggleGravity,
        KeyCode::KeyA => SimCommand::ToggleAntigravity,
        KeyCode::KeyR => SimCommand::Reset,
        KeyCode::KeyS => SimCommand::Shake,
        KeyCode::BracketLeft => {
            SimCommand::SetGravityStrength(settings.gravity_strength - STRENGTH_STEP)
        }
        KeyCode::BracketRight => {
            SimCommand::SetGravityStrength(settings.gravity_strength + STRENGTH_STEP)
        }
        KeyCode::Minus => SimCommand::SetBounceStrength(settings.bounce_strength - STRENGTH_STEP),
        KeyCode::Equal => SimCommand::SetBounceStrength(settings.bounce_strength + STRENGTH_STEP),
        _ => return None,
    };
    Some(cmd)
}

fn dispatch_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    sim: Res<Simulation>,
    mut out: EventWriter<SimCommand>,
) {
    let settings = *sim.settings();
    for key in keys.get_just_pressed() {
        if let Some(cmd) = command_for_key(*key, &settings) {
            debug!(?key, ?cmd, "Shortcut");
            out.write(cmd);
        }
    }
}
