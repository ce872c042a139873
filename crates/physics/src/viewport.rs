use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use lv_core::Viewport;

/// Poll the primary window into [`Viewport`] every frame. Headless hosts have no
/// window and keep whatever viewport they inserted.
pub(crate) fn track_primary_window(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<Viewport>,
) {
    let Some(window) = windows.iter().next() else {
        return;
    };
    let next = Viewport::new(window.width(), window.height());
    if viewport.set_if_neq(next) {
        debug!(width = next.width, height = next.height, "Viewport resized");
    }
}
