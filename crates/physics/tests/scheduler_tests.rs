use bevy::prelude::*;
use lv_config::PhysicsSettings;
use lv_core::{Simulation, Viewport};
use lv_physics::*;

fn test_app(settings: PhysicsSettings) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(SimulationPlugin {
        element_count: 4,
        settings,
        seed: Some(2024),
    });
    app.insert_resource(Viewport::new(1200.0, 800.0));
    app
}

fn send(app: &mut App, cmd: SimCommand) {
    app.world_mut().send_event(cmd);
}

fn sim(app: &App) -> &Simulation {
    app.world().resource::<Simulation>()
}

#[test]
fn idle_scheduler_freezes_velocity() {
    let mut app = test_app(PhysicsSettings::default());
    send(&mut app, SimCommand::Shake);
    app.update();
    let before = sim(&app).state().clone();
    for _ in 0..20 {
        app.update();
    }
    assert_eq!(sim(&app).state(), &before, "idle must not decay or move anything");
    assert_eq!(sim(&app).ticks(), 0);
    assert_eq!(*app.world().resource::<SchedulerPhase>(), SchedulerPhase::Idle);
}

#[test]
fn toggling_gravity_starts_and_stops_ticks() {
    let mut app = test_app(PhysicsSettings::default());
    app.update();
    send(&mut app, SimCommand::ToggleGravity);
    for _ in 0..5 {
        app.update();
    }
    assert_eq!(*app.world().resource::<SchedulerPhase>(), SchedulerPhase::Running);
    assert_eq!(sim(&app).ticks(), 5);

    send(&mut app, SimCommand::ToggleGravity);
    app.update();
    let frozen = sim(&app).state().clone();
    for _ in 0..5 {
        app.update();
    }
    assert_eq!(*app.world().resource::<SchedulerPhase>(), SchedulerPhase::Idle);
    assert_eq!(sim(&app).ticks(), 5);
    assert_eq!(sim(&app).state(), &frozen);
}

#[test]
fn gravity_tick_matches_force_model() {
    let mut app = test_app(PhysicsSettings {
        gravity_on: true,
        gravity_strength: 50,
        ..Default::default()
    });
    app.update();
    for e in sim(&app).state().elements() {
        assert!((e.velocity.y - 0.4 * 0.99).abs() < 1e-5, "vy={}", e.velocity.y);
        assert_eq!(e.position, e.velocity);
    }
}

#[test]
fn elements_settle_on_the_floor() {
    let mut app = test_app(PhysicsSettings {
        gravity_on: true,
        gravity_strength: 100,
        bounce_strength: 0,
        ..Default::default()
    });
    for _ in 0..400 {
        app.update();
    }
    let floor = Viewport::new(1200.0, 800.0).floor_y();
    for e in sim(&app).state().elements() {
        assert!(e.position.y <= floor);
        assert!(floor - e.position.y < 1.0, "y={} floor={floor}", e.position.y);
    }
}

#[test]
fn viewport_is_read_fresh_each_tick() {
    let mut app = test_app(PhysicsSettings {
        gravity_on: true,
        gravity_strength: 100,
        bounce_strength: 0,
        ..Default::default()
    });
    for _ in 0..300 {
        app.update();
    }
    // Shrink the window mid-run; next tick must clamp to the new floor.
    app.insert_resource(Viewport::new(1200.0, 500.0));
    app.update();
    let floor = Viewport::new(1200.0, 500.0).floor_y();
    for e in sim(&app).state().elements() {
        assert!(e.position.y <= floor, "y={} floor={floor}", e.position.y);
    }
}

#[test]
fn zero_sized_viewport_disables_clamping() {
    let mut app = test_app(PhysicsSettings {
        gravity_on: true,
        gravity_strength: 100,
        ..Default::default()
    });
    app.insert_resource(Viewport::new(0.0, 0.0));
    for _ in 0..200 {
        app.update();
    }
    let y = sim(&app).state().elements()[0].position.y;
    assert!(y > 600.0, "expected free fall past the usual floor, got {y}");
}

#[test]
fn strength_change_applies_next_tick() {
    let mut app = test_app(PhysicsSettings::default());
    send(&mut app, SimCommand::SetGravityStrength(100));
    send(&mut app, SimCommand::ToggleGravity);
    app.update();
    let vy = sim(&app).state().elements()[0].velocity.y;
    assert!((vy - 0.8 * 0.99).abs() < 1e-5, "vy={vy}");
}

#[test]
fn render_snapshot_follows_ticks() {
    let mut app = test_app(PhysicsSettings {
        antigravity_on: true,
        ..Default::default()
    });
    for _ in 0..3 {
        app.update();
    }
    let snapshot = app.world().resource::<RenderSnapshot>();
    assert_eq!(snapshot.tick, 3);
    assert_eq!(snapshot.offsets, sim(&app).offsets());
    assert_eq!(snapshot.offsets.len(), 4);
}

#[test]
fn flags_never_both_on() {
    let mut app = test_app(PhysicsSettings::default());
    let script = [
        SimCommand::ToggleGravity,
        SimCommand::ToggleAntigravity,
        SimCommand::ToggleAntigravity,
        SimCommand::ToggleGravity,
        SimCommand::ToggleAntigravity,
        SimCommand::Shake,
        SimCommand::ToggleGravity,
        SimCommand::Reset,
    ];
    for cmd in script {
        send(&mut app, cmd);
        app.update();
        let s = sim(&app).settings();
        assert!(!(s.gravity_on && s.antigravity_on), "after {cmd:?}: {s:?}");
    }
}
