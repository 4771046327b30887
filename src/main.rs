//! Volley Fist entry point
//!
//! Native runner: plays a match headless (the autopilot or a quiet script
//! drives the fist), logs the final score and optionally writes a JSON
//! report.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use volley_fist::assets::{AssetLoader, Assets, BuiltinAssets, DirectoryAssets};
use volley_fist::consts::TICK_RATE;
use volley_fist::platform::{FrameClock, HeadlessText, RecordingDisplay, ScriptedInput};
use volley_fist::{MatchLoop, Settings, VariantKind};

#[derive(Debug, Parser)]
#[command(name = "volley-fist", about = "Punch the ball, keep it in the air")]
struct Cli {
    /// Game variant: volley, rally, juggle or walk
    #[arg(long)]
    variant: Option<String>,

    /// Settings file (JSON)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Sprite directory holding images/fist.bmp and images/ball.gif
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Stop after this many ticks
    #[arg(long, default_value_t = 60 * 60)]
    max_ticks: u64,

    /// Autopilot seed
    #[arg(long)]
    seed: Option<u64>,

    /// Let the ball fly on its own instead of running the autopilot
    #[arg(long)]
    no_pilot: bool,

    /// Run as fast as possible instead of at the fixed tick rate
    #[arg(long)]
    unthrottled: bool,

    /// Write the match report here as JSON
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::info!("Volley Fist (native) starting...");

    let mut settings = match &cli.settings {
        Some(path) => Settings::read(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings {
            idle_mode: true,
            ..Default::default()
        },
    };
    if let Some(name) = &cli.variant {
        let Some(variant) = VariantKind::from_str(name) else {
            bail!("unknown variant '{name}'");
        };
        settings.variant = variant;
    }
    if let Some(seed) = cli.seed {
        settings.seed = seed;
    }
    if cli.no_pilot {
        settings.idle_mode = false;
    }

    let loader: Box<dyn AssetLoader> = match &cli.assets {
        Some(dir) => Box::new(DirectoryAssets::new(dir)),
        None => Box::new(BuiltinAssets),
    };
    let assets = Assets::load(loader.as_ref()).context("loading sprites")?;

    let clock = if cli.unthrottled {
        FrameClock::unthrottled()
    } else {
        FrameClock::fixed(TICK_RATE)
    };
    let mut game = MatchLoop::from_settings(&settings, &assets)
        .with_clock(clock)
        .with_max_ticks(Some(cli.max_ticks));

    let mut input = ScriptedInput::new();
    let mut display = RecordingDisplay::new();
    let report = game.run(&mut input, &mut display, &mut HeadlessText);

    println!(
        "{} variant: score {} after {} ticks ({:?})",
        report.variant.as_str(),
        report.score,
        report.ticks,
        report.end
    );

    if let Some(path) = &cli.report {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json)
            .with_context(|| format!("writing report to {}", path.display()))?;
        log::info!("Report written to {}", path.display());
    }

    Ok(())
}
