#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that plays Frontline from the terminal.

mod config;
mod terminal;

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use frontline_core::{ActionOutcome, TurnOutcome};
use frontline_rendering::{
    Presentation, RenderingBackend, Scene, TileGridPresentation, BACKGROUND_COLOR,
    GRID_LINE_COLOR,
};
use frontline_session::Session;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::terminal::TerminalBackend;

/// Command-line arguments accepted by the `frontline` binary.
#[derive(Debug, Parser)]
#[command(name = "frontline", about = "Turn-based grid wargame played from the terminal", version)]
struct Cli {
    /// TOML scenario describing the grid and the starting units.
    #[arg(long, value_name = "PATH")]
    scenario: Option<PathBuf>,

    /// File of input lines to replay; standard input when omitted.
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[arg(long, value_name = "FILTER", default_value = "frontline=info")]
    log: String,
}

/// Entry point for the Frontline command-line interface.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log);

    let scenario = config::load_scenario(cli.scenario.as_deref())?;
    let mut session = Session::new(scenario).context("scenario places units illegally")?;
    info!(units = session.units().len(), "session started");

    let tile_grid = TileGridPresentation::new(session.grid(), GRID_LINE_COLOR)?;
    let scene = Scene::capture(
        tile_grid,
        &session.units(),
        session.fog(),
        &session.turn_status(),
    );
    let presentation = Presentation::new(session.banner(), BACKGROUND_COLOR, scene);

    let input: Box<dyn BufRead> = match &cli.script {
        Some(path) => Box::new(BufReader::new(File::open(path).with_context(|| {
            format!("failed to open script {}", path.display())
        })?)),
        None => Box::new(io::stdin().lock()),
    };

    TerminalBackend::new(input, io::stdout().lock()).run(presentation, move |frame, scene| {
        let message = if frame.end_turn {
            Some(describe_turn(&session.end_turn()))
        } else if let Some(pointer) = frame.pointer {
            Some(describe_action(&session.select_pixel(pointer.x, pointer.y)))
        } else {
            frame
                .cell
                .map(|(x, y)| describe_action(&session.select_cell(x, y)))
        };

        let mut next = Scene::capture(
            scene.tile_grid,
            &session.units(),
            session.fog(),
            &session.turn_status(),
        );
        next.message = message;
        *scene = next;
    })
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn describe_action(outcome: &ActionOutcome) -> String {
    match outcome {
        ActionOutcome::Selected { unit } => format!("selected {unit}"),
        ActionOutcome::Moved {
            unit,
            from,
            to,
            combat,
            turn,
        } => {
            let mut message = format!("{unit} moved {from} -> {to}");
            if let Some(report) = combat {
                message.push_str(&format!(
                    "; {} hit {} for {} ({} left)",
                    report.attacker, report.defender, report.damage, report.remaining_health
                ));
                if report.defender_destroyed {
                    message.push_str(&format!("; {} destroyed", report.defender));
                }
            }
            message.push_str("; ");
            message.push_str(&describe_turn(turn));
            message
        }
        ActionOutcome::Ignored(rejection) => format!("ignored: {rejection}"),
    }
}

fn describe_turn(turn: &TurnOutcome) -> String {
    if turn.weather_changed {
        format!(
            "turn passes to {}, round {} begins in {}",
            turn.active_team, turn.round, turn.weather
        )
    } else {
        format!("turn passes to {}", turn.active_team)
    }
}
