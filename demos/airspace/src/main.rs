//! airspace — runway contention demo for the rust_atc simulator.
//!
//! Generates (or loads) a small world of airports and shuttling planes, runs
//! it for a fixed number of one-minute ticks, and writes per-tick CSVs plus a
//! JSON report.  Every airport runs the learned admission gate unless
//! `--first-available` is given.
//!
//! ```text
//! cargo run -p airspace -- --ticks 1000 --seed 7 --snapshot-every 10
//! RUST_LOG=debug cargo run -p airspace -- --scenario data/shuttle
//! ```

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use atc_airport::AirportRegistry;
use atc_core::{AdmissionKind, PlaneId, SimConfig, Tick, WorldConfig};
use atc_output::{CsvWriter, OutputWriter, RunReport, SimOutputObserver};
use atc_plane::{Plane, PlaneState};
use atc_scenario::load_scenario_dir;
use atc_sim::{SimBuilder, SimObserver, TickStats};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(about = "Simulate runway contention between airports and shuttling planes")]
struct Args {
    /// JSON file with `sim` and `world` sections; missing fields use defaults
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding airports.csv and fleet.csv instead of a generated world
    #[arg(long, value_name = "DIR")]
    scenario: Option<PathBuf>,

    /// Override the number of ticks (minutes) to simulate
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Override the master seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write a plane snapshot every N ticks (0 disables snapshots)
    #[arg(long, value_name = "N")]
    snapshot_every: Option<u64>,

    /// Grant the first eligible runway instead of consulting the learned gate
    #[arg(long)]
    first_available: bool,

    /// Output directory for CSVs and report.json
    #[arg(short, long, value_name = "DIR", default_value = "output/airspace")]
    output: PathBuf,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    sim:   SimConfig,
    world: WorldConfig,
}

impl Args {
    fn resolve(&self) -> Result<(SimConfig, WorldConfig)> {
        let FileConfig { mut sim, mut world } = match &self.config {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("opening config {}", path.display()))?;
                serde_json::from_reader(file)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => FileConfig::default(),
        };
        if let Some(t) = self.ticks {
            sim.total_ticks = t;
        }
        if let Some(s) = self.seed {
            sim.seed = s;
        }
        if let Some(n) = self.snapshot_every {
            sim.output_interval_ticks = n;
        }
        if self.first_available {
            world.admission = AdmissionKind::FirstAvailable;
        }
        Ok((sim, world))
    }
}

// ── Observer wrapper tracking peak runway use ─────────────────────────────────

struct PeakObserver<W: OutputWriter> {
    inner:       SimOutputObserver<W>,
    transitions: usize,
    peak_in_use: usize,
    peak_tick:   Tick,
}

impl<W: OutputWriter> PeakObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, transitions: 0, peak_in_use: 0, peak_tick: Tick::ZERO }
    }
}

impl<W: OutputWriter> SimObserver for PeakObserver<W> {
    fn on_transition(&mut self, tick: Tick, plane: PlaneId, from: PlaneState, to: PlaneState) {
        self.transitions += 1;
        self.inner.on_transition(tick, plane, from, to);
    }

    fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
        if stats.runways_in_use > self.peak_in_use {
            self.peak_in_use = stats.runways_in_use;
            self.peak_tick = tick;
        }
        self.inner.on_tick_end(tick, stats);
    }

    fn on_snapshot(&mut self, tick: Tick, planes: &[Plane], airports: &AirportRegistry) {
        self.inner.on_snapshot(tick, planes, airports);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let (config, world) = args.resolve()?;

    // 1. Build the world.
    let mut builder = SimBuilder::new(config.clone(), world);
    if let Some(dir) = &args.scenario {
        let scenario = load_scenario_dir(dir)
            .with_context(|| format!("loading scenario from {}", dir.display()))?;
        info!(dir = %dir.display(), planes = scenario.planes.len(), "scenario loaded");
        builder = builder.scenario(scenario);
    }
    let mut sim = builder.build()?;

    // 2. Set up output.
    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let writer = CsvWriter::new(&args.output)?;
    let mut obs = PeakObserver::new(SimOutputObserver::new(writer));

    // 3. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        warn!(error = %e, "output error");
    }

    // 4. Report.
    let report = RunReport::from_sim(&sim);
    println!("{report}");
    println!(
        "{} transitions in {:.3} s; peak {} runways busy at {}",
        obs.transitions,
        elapsed.as_secs_f64(),
        obs.peak_in_use,
        obs.peak_tick
    );

    let path = args.output.join("report.json");
    let file = BufWriter::new(File::create(&path)?);
    serde_json::to_writer_pretty(file, &report)?;
    info!(path = %path.display(), "report written");

    Ok(())
}
