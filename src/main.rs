//! Pellet Arena entry point
//!
//! Headless runner: loads a scenario, drives the session with the autopilot
//! at a fixed frame rate and logs a summary. Window, GL context and keyboard
//! polling belong to a front end and are not part of this binary.

use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use pellet_arena::autopilot::Autopilot;
use pellet_arena::render::scene_vertices;
use pellet_arena::{FrameInput, Scenario, Session};

// --- Command Line Arguments ---
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario JSON file (built-in maze when omitted)
    #[arg(long)]
    scenario: Option<String>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 3600)]
    frames: u32,

    /// Frame delta in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    frame_dt: f32,

    /// Autopilot seed
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print the scenario as JSON and exit
    #[arg(long)]
    dump_scenario: bool,
}

fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Native logger; `RUST_LOG` overrides the CLI level when set
#[cfg(not(target_arch = "wasm32"))]
fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();

    #[cfg(not(target_arch = "wasm32"))]
    init_logging(parse_level(&args.log_level));

    log::info!("Pellet Arena (headless) starting...");

    let scenario = match &args.scenario {
        Some(path) => match Scenario::load(path) {
            Ok(s) => s,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Scenario::default(),
    };

    if args.dump_scenario {
        return match scenario.to_json_pretty() {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("{}", e);
                ExitCode::FAILURE
            }
        };
    }

    let mut session = match Session::new(&scenario) {
        Ok(s) => s,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let initial = session.state().pellet_count();
    let mut pilot = Autopilot::new(args.seed);

    for _ in 0..args.frames {
        let input = FrameInput {
            intent: pilot.next_intent(&session.view()),
            quit: false,
        };
        let report = session.update(args.frame_dt, &input);
        if report.quit || report.cleared {
            break;
        }
    }

    let player = session.state().player;
    let vertices = scene_vertices(&session.view());
    log::info!(
        "Finished after {} frames: score {}, ate {}/{} pellets, player at ({:.3}, {:.3}), {} vertices in last frame",
        session.frames(),
        session.score(),
        session.pellets_eaten(),
        initial,
        player.pos.x,
        player.pos.y,
        vertices.len()
    );

    ExitCode::SUCCESS
}
