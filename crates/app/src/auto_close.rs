// Exits the app after `window.autoClose` seconds. 0.0 (default) = run indefinitely.

use bevy::prelude::*;

#[derive(Resource, Deref, DerefMut)]
struct AutoCloseTimer(Timer);

pub struct AutoClosePlugin {
    pub seconds: f32,
}

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        if self.seconds <= 0.0 {
            return;
        }
        info!(seconds = self.seconds, "AutoClose: will exit after {} seconds", self.seconds);
        app.insert_resource(AutoCloseTimer(Timer::from_seconds(
            self.seconds,
            TimerMode::Once,
        )))
        .add_systems(Update, check_autoclose);
    }
}

fn check_autoclose(
    time: Res<Time>,
    mut timer: ResMut<AutoCloseTimer>,
    mut ev_exit: EventWriter<AppExit>,
) {
    timer.tick(time.delta());
    if timer.just_finished() {
        info!("AutoClose: timer finished, requesting app exit");
        ev_exit.write(AppExit::Success);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::time::TimeUpdateStrategy;
    use std::time::Duration;

    fn exits(app: &mut App) -> usize {
        app.world_mut().resource_mut::<Events<AppExit>>().drain().count()
    }

    #[test]
    fn disabled_by_default() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins(AutoClosePlugin { seconds: 0.0 });
        app.update();
        assert!(app.world().get_resource::<AutoCloseTimer>().is_none());
    }

    #[test]
    fn requests_exit_once_elapsed() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins(AutoClosePlugin { seconds: 0.3 })
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)));
        app.update();
        app.update();
        assert_eq!(exits(&mut app), 0);
        let mut total = 0;
        for _ in 0..6 {
            app.update();
            total += exits(&mut app);
        }
        assert_eq!(total, 1);
    }
}
