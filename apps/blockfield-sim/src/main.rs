//! Blockfield headless simulator
//!
//! Generates the world and drives the session through a scripted sequence of
//! frames: capture the cursor, walk, look down, place and dig blocks, jump.
//! Input goes through the same bindings a windowed front end uses.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p blockfield-sim -- [OPTIONS]
//! ```
//!
//! ## Options
//!
//! - `--size <N>`: World side length in blocks (default: 40)
//! - `--frames <N>`: Number of frames to simulate (default: 600)
//! - `--dt <SECONDS>`: Frame time (default: 0.016667)
//! - `--max-dt <SECONDS>`: Cap on the integrated frame time (default: none)
//! - `-h, --help`: Print help message
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level (e.g., info, debug, trace)

mod script;

use anyhow::{bail, Context};
use blockfield_core::constants::WORLD_SIZE;
use blockfield_input::InputManager;
use blockfield_physics::PlayerConfig;
use blockfield_session::{controls, EditEvent, SessionConfig, WorldSession};
use glam::Vec3;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::script::Script;

/// Simulation parameters.
#[derive(Debug, Clone, PartialEq)]
struct SimParams {
    size: i32,
    frames: u32,
    dt: f32,
    max_dt: Option<f32>,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            size: WORLD_SIZE,
            frames: 600,
            dt: 1.0 / 60.0,
            max_dt: None,
        }
    }
}

impl SimParams {
    /// Parse simulation parameters from command line arguments.
    fn from_args<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut params = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let mut value = || {
                args.next()
                    .with_context(|| format!("missing value for {arg}"))
            };
            match arg.as_str() {
                "--size" => params.size = value()?.parse().context("--size")?,
                "--frames" => params.frames = value()?.parse().context("--frames")?,
                "--dt" => params.dt = value()?.parse().context("--dt")?,
                "--max-dt" => params.max_dt = Some(value()?.parse().context("--max-dt")?),
                other => bail!("unknown argument: {other}"),
            }
        }

        Ok(params)
    }

    fn session_config(&self) -> SessionConfig {
        let mut player = PlayerConfig::default();
        if let Some(max_dt) = self.max_dt {
            player = player.with_max_dt(max_dt);
        }
        SessionConfig::default()
            .with_world_size(self.size)
            .with_player(player)
    }

    /// Start a session with the player dropped above the middle of the world.
    #[allow(clippy::cast_precision_loss)]
    fn start_session(&self) -> anyhow::Result<WorldSession> {
        let mut session = WorldSession::new(self.session_config())?;
        let middle = self.size as f32 * 0.5;
        let spawn = &mut session.player_mut().state_mut().position;
        *spawn = Vec3::new(middle, spawn.y, middle);
        Ok(session)
    }
}

fn main() -> anyhow::Result<()> {
    // Check for help flag before doing any work
    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print_help();
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let params = SimParams::from_args(std::env::args().skip(1))?;
    info!(?params, "Starting simulation");

    let mut session = params.start_session()?;
    let edits = session.subscribe();
    let mut input = InputManager::with_actions(controls::default_actions());
    let script = Script::new(params.frames);

    let mut added = 0usize;
    let mut removed = 0usize;
    for frame in 0..params.frames {
        script.apply(frame, &mut input);
        controls::drive_frame(&mut session, &mut input, params.dt);

        for edit in edits.try_iter() {
            match edit {
                EditEvent::Added(coord, block) => {
                    info!(frame, ?coord, %block, "Block added");
                    added += 1;
                }
                EditEvent::Removed(coord) => {
                    info!(frame, ?coord, "Block removed");
                    removed += 1;
                }
            }
        }
    }

    let state = session.player().state();
    info!(
        frames = params.frames,
        blocks = session.store().len(),
        added,
        removed,
        position = ?state.position,
        grounded = session.player().is_grounded(),
        selected = %session.selected_block_type(),
        "Simulation finished"
    );

    Ok(())
}

fn print_help() {
    eprintln!(
        "Blockfield headless simulator

USAGE:
    cargo run -p blockfield-sim -- [OPTIONS]

OPTIONS:
    --size <N>              World side length in blocks (default: 40)
    --frames <N>            Number of frames to simulate (default: 600)
    --dt <SECONDS>          Frame time (default: 0.016667)
    --max-dt <SECONDS>      Cap on the integrated frame time (default: none)
    -h, --help              Print this help message

EXAMPLES:
    # Default world, ten seconds at 60 fps
    cargo run -p blockfield-sim

    # Small world with edit logging
    RUST_LOG=debug cargo run -p blockfield-sim -- --size 8 --frames 240

ENVIRONMENT VARIABLES:
    RUST_LOG                Set log level (e.g., info, debug, trace)"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn defaults_without_args() {
        assert_eq!(SimParams::from_args(args(&[])).unwrap(), SimParams::default());
    }

    #[test]
    fn parses_every_flag() {
        let params = SimParams::from_args(args(&[
            "--size", "8", "--frames", "30", "--dt", "0.05", "--max-dt", "0.1",
        ]))
        .unwrap();
        assert_eq!(
            params,
            SimParams {
                size: 8,
                frames: 30,
                dt: 0.05,
                max_dt: Some(0.1),
            }
        );
        assert_eq!(params.session_config().player.max_dt, Some(0.1));
        assert_eq!(params.session_config().terrain.world_size, 8);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(SimParams::from_args(args(&["--size"])).is_err());
        assert!(SimParams::from_args(args(&["--size", "big"])).is_err());
        assert!(SimParams::from_args(args(&["--fast"])).is_err());
    }

    #[test]
    fn scripted_run_edits_the_world() {
        let params = SimParams {
            size: 8,
            frames: 240,
            ..SimParams::default()
        };
        let mut session = params.start_session().unwrap();
        let edits = session.subscribe();
        let mut input = InputManager::with_actions(controls::default_actions());
        let script = Script::new(params.frames);

        for frame in 0..params.frames {
            script.apply(frame, &mut input);
            controls::drive_frame(&mut session, &mut input, params.dt);
        }

        assert!(edits.try_iter().count() > 0);
        assert!(session.player().is_grounded());
    }
}
