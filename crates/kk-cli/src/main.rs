mod config;
mod server;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kk_core::{ClockState, HarmonicClock, level_threshold, to_iso8601};

use crate::config::AppConfig;
use crate::server::KaiReport;

#[derive(Parser)]
#[command(name = "kk", about = "Kai-Klok harmonic clock CLI and HTTP server")]
struct Cli {
    /// TOML config file (falls back to $KK_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the harmonic state of an instant
    Now {
        /// ISO-8601 instant instead of the current time
        #[arg(long)]
        at: Option<String>,

        /// Print the full state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the φ-spiral epoch table
    Epochs {
        #[arg(long)]
        at: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Show the pulse subdivision table
    Subdivisions {
        #[arg(long)]
        at: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Serve the clock over HTTP
    Serve {
        /// Listen address, overrides [server].bind
        #[arg(long)]
        bind: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let path = config::config_path(cli.config.as_deref());
    if let Some(p) = &path {
        tracing::debug!("loading config from {}", p.display());
    }
    config::load(path.as_deref())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = load_config(&cli)?;
    let clock = HarmonicClock::new(cfg.clock.clone());

    match &cli.command {
        Commands::Now { at, json } => cmd_now(&clock, at.as_deref(), *json),
        Commands::Epochs { at, json } => cmd_epochs(&clock, at.as_deref(), *json),
        Commands::Subdivisions { at, json } => cmd_subdivisions(&clock, at.as_deref(), *json),
        Commands::Serve { bind } => {
            let bind = bind.as_deref().unwrap_or(&cfg.server.bind);
            server::run(clock, bind).await
        }
    }
}

fn compute(clock: &HarmonicClock, at: Option<&str>) -> Result<ClockState> {
    let state = clock.compute_at(at).context("invalid --at value")?;
    tracing::debug!(
        "computed state for {}: {} pulses",
        to_iso8601(&state.instant),
        state.elapsed_pulses
    );
    Ok(state)
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{out}");
    Ok(())
}

fn cmd_now(clock: &HarmonicClock, at: Option<&str>, json: bool) -> Result<()> {
    let report = KaiReport::new(compute(clock, at)?);
    if json {
        return print_json(&report);
    }

    let s = &report.state;
    let cal = &s.calendar;
    println!("instant:  {}", to_iso8601(&s.instant));
    println!("pulse:    {}", s.elapsed_pulses);
    println!(
        "kairos:   {} (beat {}/36, step {}/44, {}% into beat)",
        s.eternal.step_string(),
        s.eternal.beat_index,
        s.eternal.step_index,
        s.eternal.percent_into_beat
    );
    println!(
        "date:     {} {} · {} · week {} {} · {} arc",
        report.seals.day_month,
        cal.day_name,
        cal.month_name,
        cal.week_index,
        cal.week_name,
        cal.arc_name
    );
    println!("year:     Y{} {} ({})", cal.year_index, s.year_name, s.kai_turah_phrase);
    println!("spiral:   PS{}", s.spiral_level);
    println!("seal:     {}", report.seals.eternal);
    Ok(())
}

fn cmd_epochs(clock: &HarmonicClock, at: Option<&str>, json: bool) -> Result<()> {
    let state = compute(clock, at)?;
    if json {
        return print_json(&state.epochs);
    }

    let next = state.spiral_level + 1;
    println!(
        "pulse: {} (PS{}, PS{next} at {} pulses)",
        state.elapsed_pulses,
        state.spiral_level,
        level_threshold(next)
    );
    for e in &state.epochs {
        println!(
            "{:<24} φ^{:<3} {:>16} pulses  {:>18} days  {:>12}%  {} to go",
            e.name, e.phi_power, e.threshold_pulses, e.chronos_days, e.percent_elapsed, e.pulses_until
        );
    }
    Ok(())
}

fn cmd_subdivisions(clock: &HarmonicClock, at: Option<&str>, json: bool) -> Result<()> {
    let state = compute(clock, at)?;
    if json {
        return print_json(&state.subdivisions);
    }

    for s in &state.subdivisions {
        println!(
            "{:<15} P/{:<5} {:>16}s {:>18} Hz  {:>16} elapsed  {}",
            s.key, s.divisor, s.duration_seconds, s.frequency_hz, s.count, s.resonant_name
        );
    }
    Ok(())
}
