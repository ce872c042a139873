use bevy::prelude::*;
use lv_physics::{Notice, NoticeKind, SimSet};

/// Stand-in for a toast surface: every notice goes to the log.
pub struct NoticeLogPlugin;

impl Plugin for NoticeLogPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, log_notices.after(SimSet::Commands));
    }
}

fn log_notices(mut notices: EventReader<Notice>) {
    for n in notices.read() {
        match n.kind {
            NoticeKind::Info => info!(target: "levity::notice", "{}", n.message),
            NoticeKind::Success => info!(target: "levity::notice", success = true, "{}", n.message),
            NoticeKind::Warning => warn!(target: "levity::notice", "{}", n.message),
        }
    }
}
