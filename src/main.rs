//! Tower Catch headless runner
//!
//! Flies sessions with a demo pilot on a fixed-timestep loop, runs the
//! freeze-frame timer after each outcome, and prints the session summaries.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use tower_catch::autopilot::{Autopilot, Freefall, Pilot};
use tower_catch::consts::*;
use tower_catch::error::ConfigError;
use tower_catch::session::{Campaign, DelayedFinalization, SessionSummary};
use tower_catch::settings::{DisplayMode, Settings};

#[derive(Parser)]
#[command(name = "tower-catch", about = "Headless Tower Catch runner")]
struct Cli {
    /// Landing site to start at (earth, mars)
    #[arg(long, default_value = "earth")]
    profile: String,

    /// Use the compact (0.7x) tower layout
    #[arg(long)]
    compact: bool,

    /// Settings JSON file
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Let the vehicle fall without touching the controls
    #[arg(long)]
    manual: bool,

    /// Continue to the next site after a successful catch
    #[arg(long)]
    chain: bool,

    /// Abandon a flight after this many simulated seconds
    #[arg(long, default_value_t = 60.0)]
    max_seconds: f32,

    /// Host frame time in milliseconds
    #[arg(long, default_value_t = 16.0, value_parser = parse_frame_ms)]
    frame_ms: f32,
}

/// Frame times must be positive and finite or the runner never advances
fn parse_frame_ms(value: &str) -> Result<f32, String> {
    let ms: f32 = value.parse().map_err(|err| format!("{err}"))?;
    if !ms.is_finite() || ms <= 0.0 {
        return Err(format!("expected a positive frame time, got {value}"));
    }
    Ok(ms)
}

/// Host frame length in seconds, kept within what the loop can absorb
fn frame_dt(frame_ms: f32) -> f32 {
    if frame_ms.is_finite() {
        (frame_ms / 1000.0).clamp(0.001, 0.1)
    } else {
        SIM_DT
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), ConfigError> {
    let mut settings = match &cli.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if cli.compact {
        settings.display = DisplayMode::Compact;
    }

    let mut campaign = Campaign::new(settings)?;
    campaign.start_session(&cli.profile)?;

    let mut pilot: Box<dyn Pilot> = if cli.manual {
        Box::new(Freefall)
    } else {
        Box::new(Autopilot::default())
    };
    log::info!(
        "Tower Catch (headless) flying with {} on the {} layout",
        pilot.name(),
        campaign.settings().display.as_str()
    );

    loop {
        let Some(summary) = fly_session(&mut campaign, pilot.as_mut(), cli) else {
            println!("Flight abandoned after {:.0}s", cli.max_seconds);
            return Ok(());
        };
        print_summary(&summary);

        match summary.next_profile {
            Some(next) if cli.chain => {
                campaign.start_profile(next);
            }
            _ => return Ok(()),
        }
    }
}

/// Run the active session until it is finalized or times out
fn fly_session(
    campaign: &mut Campaign,
    pilot: &mut dyn Pilot,
    cli: &Cli,
) -> Option<SessionSummary> {
    let frame_dt = frame_dt(cli.frame_ms);
    let max_ticks = (cli.max_seconds / SIM_DT) as u64;
    let mut accumulator = 0.0;
    let mut timer: Option<DelayedFinalization> = None;

    loop {
        if let Some(pending) = timer.as_mut() {
            // Core is frozen; only the freeze-frame timer runs
            if let Some(ticket) = pending.advance(frame_dt) {
                return campaign.finalize(ticket);
            }
            continue;
        }

        accumulator += frame_dt;
        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let flight = campaign.session()?.flight();
            if flight.time_ticks >= max_ticks {
                return None;
            }
            let input = pilot.act(flight);
            let step = campaign.tick(&input, SIM_DT)?;
            accumulator -= SIM_DT;
            substeps += 1;

            if let Some(pending) = step.finalization {
                timer = Some(pending);
                break;
            }
        }
    }
}

fn print_summary(summary: &SessionSummary) {
    let profile = summary.profile.profile();
    println!("Session {} at {}", summary.session, profile.name);
    println!("  {}", summary.outcome.message());
    println!(
        "  Landing speed: {:.0} m/s (limit {:.0})",
        summary.landing_speed, profile.max_landing_speed
    );
    if let Some(next) = summary.next_profile {
        println!("  Next site unlocked: {}", next.profile().name);
    }
}
