/*!
levity: a row of elements pushed around by toggleable gravity / antigravity.

Windowed mode (default) draws one sprite per element and maps keys to commands.
`--headless-ticks N` runs N frames without a window and prints the offsets as JSON.

Settings flow: config layers -> persisted settings (if any) -> CLI overrides.
CLI overrides last for one session; only changes made while running are saved.
Headless runs never write settings.
*/

use std::path::PathBuf;

use anyhow::{Context, Result};
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use clap::Parser;
use lv_config::{AppConfig, PhysicsSettings, RonFileStore, SettingsStore};
use lv_core::Viewport;
use lv_physics::{SettingsPersistence, SimCommand, SimulationPlugin};

mod auto_close;
mod headless;
mod input;
mod notices;
mod render;

use auto_close::AutoClosePlugin;
use input::KeyboardShortcutsPlugin;
use notices::NoticeLogPlugin;
use render::OffsetSpritesPlugin;

const DEFAULT_LAYERS: [&str; 2] = ["assets/config/levity.ron", "assets/config/levity.local.ron"];

#[derive(Parser, Debug, Default)]
#[command(about = "Toggle gravity and antigravity on a row of floating elements", version)]
struct Args {
    /// Config layer (repeatable; later layers win). Defaults to assets/config/levity{,.local}.ron.
    #[arg(long = "config")]
    config: Vec<PathBuf>,
    /// Deterministic jitter seed.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    elements: Option<usize>,
    /// Run this many frames without a window, print JSON and exit. Never saves settings.
    #[arg(long)]
    headless_ticks: Option<u32>,
    /// Write the headless JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Neither read nor write persisted settings.
    #[arg(long)]
    no_persist: bool,
    #[arg(long, conflicts_with = "antigravity")]
    gravity: bool,
    #[arg(long)]
    antigravity: bool,
    /// Queue a shake before the first frame.
    #[arg(long)]
    shake: bool,
}

/// Config, plus everything worth logging once a log subscriber exists.
struct Prepared {
    cfg: AppConfig,
    store: Option<RonFileStore>,
    baseline: Option<PhysicsSettings>,
    notes: Vec<String>,
    warnings: Vec<String>,
}

fn prepare(args: &Args) -> Prepared {
    let layers: Vec<PathBuf> = if args.config.is_empty() {
        DEFAULT_LAYERS.iter().map(PathBuf::from).collect()
    } else {
        args.config.clone()
    };
    let (mut cfg, used, errors) = AppConfig::load_layered(&layers);
    let mut notes = Vec::new();
    let mut warnings: Vec<String> = errors
        .into_iter()
        .map(|e| format!("CONFIG LOAD ISSUE: {e}"))
        .collect();
    if used.is_empty() {
        notes.push("No config layers found; using defaults".to_string());
    } else {
        notes.push(format!("Config layers loaded: {used:?}"));
    }

    let store = (cfg.persistence.enabled && !args.no_persist)
        .then(|| RonFileStore::new(&cfg.persistence.path));
    if let Some(store) = &store {
        match store.load() {
            Ok(Some(saved)) => {
                notes.push(format!("Restored settings from {}", store.path().display()));
                cfg.physics = saved.normalized();
            }
            Ok(None) => {}
            Err(e) => warnings.push(format!("SETTINGS LOAD FAILED: {e}")),
        }
    }

    if let Some(seed) = args.seed {
        cfg.simulation.seed = Some(seed);
    }
    if let Some(n) = args.elements {
        cfg.simulation.element_count = n;
    }
    if args.gravity {
        cfg.physics.gravity_on = true;
        cfg.physics.antigravity_on = false;
    }
    if args.antigravity {
        cfg.physics.antigravity_on = true;
        cfg.physics.gravity_on = false;
    }
    cfg.physics = cfg.physics.normalized();
    // Whatever the session starts with counts as stored.
    let baseline = store.as_ref().map(|_| cfg.physics);

    warnings.extend(cfg.validate().into_iter().map(|w| format!("CONFIG WARNING: {w}")));
    Prepared {
        cfg,
        store,
        baseline,
        notes,
        warnings,
    }
}

fn persistence(prepared: &Prepared) -> Option<SettingsPersistence> {
    let store = prepared.store.clone()?;
    Some(match prepared.baseline {
        Some(baseline) => SettingsPersistence::with_baseline(store, baseline),
        None => SettingsPersistence::new(store),
    })
}

fn log_prepared(prepared: &Prepared) {
    for n in &prepared.notes {
        info!("{n}");
    }
    for w in &prepared.warnings {
        warn!("{w}");
    }
    let cfg = &prepared.cfg;
    info!(?cfg.window, "Window config");
    info!(
        elements = cfg.simulation.element_count,
        seed = ?cfg.simulation.seed,
        physics = ?cfg.physics,
        persistence = prepared.store.is_some(),
        "Runtime summary"
    );
}

/// No `SettingsPersistence`: a headless run reads stored settings but never writes them.
fn headless_app(args: &Args, prepared: &Prepared) -> App {
    let cfg = &prepared.cfg;
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(Viewport::new(cfg.window.width, cfg.window.height))
        .add_plugins(SimulationPlugin::from_config(cfg));
    if args.shake {
        app.world_mut().send_event(SimCommand::Shake);
    }
    app
}

fn run_headless(args: &Args, prepared: &Prepared, frames: u32) -> Result<()> {
    let mut app = headless_app(args, prepared);
    app.add_plugins(LogPlugin {
        level: Level::WARN,
        ..Default::default()
    });
    log_prepared(prepared);

    let json = headless::run(&mut app, frames)?;
    match &args.out {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("write headless report to {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

fn run_windowed(args: &Args, prepared: &Prepared) -> Result<()> {
    let cfg = &prepared.cfg;
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: cfg.window.title.clone(),
            resolution: (cfg.window.width, cfg.window.height).into(),
            resizable: true,
            ..Default::default()
        }),
        ..Default::default()
    }))
    .insert_resource(Viewport::new(cfg.window.width, cfg.window.height))
    .add_plugins(SimulationPlugin::from_config(cfg))
    .add_plugins(KeyboardShortcutsPlugin)
    .add_plugins(OffsetSpritesPlugin {
        width: cfg.window.width,
        height: cfg.window.height,
    })
    .add_plugins(NoticeLogPlugin)
    .add_plugins(AutoClosePlugin {
        seconds: cfg.window.auto_close,
    });
    if let Some(p) = persistence(prepared) {
        app.insert_resource(p);
    }
    log_prepared(prepared);
    if args.shake {
        app.world_mut().send_event(SimCommand::Shake);
    }

    match app.run() {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => anyhow::bail!("app exited with code {code}"),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let prepared = prepare(&args);
    match args.headless_ticks {
        Some(frames) => run_headless(&args, &prepared, frames),
        None => run_windowed(&args, &prepared),
    }
}
