//! Cryptoverse - headless replay of a scripted flight through the cryptoverse.

use std::time::Duration;

use anyhow::{Context, Result};
use engine_core::FrameTicker;
use game::{AssetSource, Catalog, Cryptoverse, DirectoryAssets, GameConfig, PlaceholderAssets, ViewEvent};
use input::{InputScript, KeyCode};

/// Presentation cadence of the headless host.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Accelerate, sweep right in a long arc, then coast down to a stop.
fn demo_script() -> InputScript {
    let mut script = InputScript::new();
    for frame in 1..=15 {
        script.tap(frame, KeyCode::ArrowUp);
    }
    for frame in (120..=300).step_by(12) {
        script.tap(frame, KeyCode::ArrowRight);
    }
    for frame in (600..=900).step_by(20) {
        script.tap(frame, KeyCode::ArrowLeft);
    }
    for frame in 1500..=1515 {
        script.tap(frame, KeyCode::ArrowDown);
    }
    script
}

fn log_transition(session: &Cryptoverse<FrameTicker>, event: &ViewEvent) {
    match event {
        ViewEvent::CurrentGalaxyChanged { current: Some(id), .. } => {
            if let Some(galaxy) = session.state().galaxy(*id) {
                log::info!("Now exploring {}", galaxy.data().name);
            }
        }
        ViewEvent::CurrentGalaxyChanged { current: None, .. } => log::info!("Back in the cryptoverse"),
        ViewEvent::CurrentCryptoidChanged { current: Some(id), .. } => {
            if let Some(cryptoid) = session.state().cryptoid(*id) {
                log::info!("Docked at {} (rank {})", cryptoid.data().name, cryptoid.rank());
            }
        }
        other => log::debug!("{:?}", other),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("╔══════════════════════════════════════════════╗");
    println!("║                 Cryptoverse                  ║");
    println!("╠══════════════════════════════════════════════╣");
    println!("║  CONTROLS:                                   ║");
    println!("║    Up / W     - Launch or boost              ║");
    println!("║    Down / S   - Slow down                    ║");
    println!("║    Left / A   - Turn left                    ║");
    println!("║    Right / D  - Turn right                   ║");
    println!("║    I          - Toggle inventory             ║");
    println!("╚══════════════════════════════════════════════╝");

    let config = GameConfig::load();
    let catalog = match &config.catalog {
        Some(path) => Catalog::load(path).with_context(|| format!("loading catalog {}", path.display()))?,
        None => Catalog::builtin(),
    };
    let assets: Box<dyn AssetSource> = match &config.assets_dir {
        Some(dir) => Box::new(DirectoryAssets::new(dir)),
        None => {
            log::info!("No assets directory configured, using placeholder sprites");
            Box::new(PlaceholderAssets)
        }
    };

    let max_frames = config.max_frames;
    let mut session =
        Cryptoverse::new(config, &catalog, assets, FrameTicker::new()).context("starting cryptoverse")?;
    for event in session.drain_transitions() {
        log_transition(&session, &event);
    }

    let script = demo_script();
    log::info!("Replaying {} input events over {} frames", script.len(), max_frames);
    for frame in 0..max_frames {
        for event in script.events_at(frame) {
            session.handle_key(event);
        }
        session.frame();
        for event in session.drain_transitions() {
            log_transition(&session, &event);
        }
        std::thread::sleep(FRAME_INTERVAL);
    }

    let craft = session.controller().craft();
    let ticker = session.controller().ticker();
    log::info!(
        "Done: {} frames, {} ticks in {:.1}s, craft at ({:.0}, {:.0}) heading {} speed {}",
        ticker.frame_count(),
        ticker.tick_count(),
        ticker.elapsed_seconds(),
        craft.position.x,
        craft.position.y,
        craft.heading(),
        craft.speed()
    );
    Ok(())
}
