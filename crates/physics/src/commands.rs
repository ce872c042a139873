// Operation surface consumed by keyboard dispatch and UI controls.
// Commands are applied in SimSet::Commands, before the tick, so their effect is
// visible to the next tick and to this frame's render snapshot.

use bevy::prelude::*;
use lv_core::Simulation;

use crate::flash::Flashes;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimCommand {
    ToggleGravity,
    ToggleAntigravity,
    Shake,
    Reset,
    /// Clamped to 0..=100.
    SetGravityStrength(i32),
    /// Clamped to 0..=100.
    SetBounceStrength(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
}

/// Fire-and-forget message for the host's notification surface.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn new(message: impl Into<String>, kind: NoticeKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// "Gravity ON" (info) / "Gravity OFF" (warning).
    pub fn toggled(force: &str, on: bool) -> Self {
        if on {
            Self::new(format!("{force} ON"), NoticeKind::Info)
        } else {
            Self::new(format!("{force} OFF"), NoticeKind::Warning)
        }
    }
}

pub(crate) fn apply_commands(
    mut commands_in: EventReader<SimCommand>,
    mut sim: ResMut<Simulation>,
    mut flashes: ResMut<Flashes>,
    mut notices: EventWriter<Notice>,
) {
    for cmd in commands_in.read() {
        match *cmd {
            SimCommand::ToggleGravity => {
                let on = sim.toggle_gravity();
                info!(gravity = on, "Gravity toggled");
                notices.write(Notice::toggled("Gravity", on));
            }
            SimCommand::ToggleAntigravity => {
                let on = sim.toggle_antigravity();
                info!(antigravity = on, "Antigravity toggled");
                notices.write(Notice::toggled("Antigravity", on));
            }
            SimCommand::Shake => {
                sim.shake();
                flashes.shaking.trigger();
                info!(elements = sim.element_count(), "Shake impulse applied");
                notices.write(Notice::new("Shake!", NoticeKind::Warning));
            }
            SimCommand::Reset => {
                sim.reset();
                flashes.resetting.trigger();
                info!("Simulation reset");
                notices.write(Notice::new("Reset!", NoticeKind::Success));
            }
            SimCommand::SetGravityStrength(n) => {
                let stored = sim.set_gravity_strength(n);
                debug!(requested = n, stored, "Gravity strength set");
            }
            SimCommand::SetBounceStrength(n) => {
                let stored = sim.set_bounce_strength(n);
                debug!(requested = n, stored, "Bounce strength set");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_notice_text_and_kind() {
        assert_eq!(
            Notice::toggled("Gravity", true),
            Notice::new("Gravity ON", NoticeKind::Info)
        );
        assert_eq!(
            Notice::toggled("Antigravity", false),
            Notice::new("Antigravity OFF", NoticeKind::Warning)
        );
    }
}
