//! Text-mode runner for the creature simulation.

mod render;
mod telemetry;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use critter_core::SimulationConfig;
use critter_world::Simulation;
use tracing::info;

use crate::render::format_creature_position;

#[derive(Parser, Debug)]
#[command(
    name = "critter",
    version,
    about = "Run a tiny deterministic creature sim in text mode"
)]
struct Cli {
    /// JSON simulation config to start from; the flags below override it.
    #[arg(long, env = "CRITTER_CONFIG")]
    config: Option<PathBuf>,

    /// World width (continuous units)
    #[arg(long)]
    width: Option<f64>,

    /// World height (continuous units)
    #[arg(long)]
    height: Option<f64>,

    /// Random seed for reproducible start
    #[arg(long)]
    seed: Option<u64>,

    /// Movement speed in world units per tick
    #[arg(long)]
    speed: Option<f64>,

    /// Number of creatures
    #[arg(long)]
    creatures: Option<usize>,

    /// Number of food pellets
    #[arg(long)]
    food: Option<usize>,

    /// How many steps to run
    #[arg(long, default_value_t = 100)]
    ticks: u64,

    /// Top food back up to its target every N ticks (0 disables)
    #[arg(long, default_value_t = 0)]
    respawn_every: u64,

    /// Print the first creature's x, y coordinates each tick (default)
    #[arg(long, overrides_with = "no_show_coords")]
    show_coords: bool,

    /// Do not print coordinates each tick
    #[arg(long, overrides_with = "show_coords")]
    no_show_coords: bool,

    /// Print the final population statistics as JSON
    #[arg(long)]
    summary_json: bool,
}

impl Cli {
    /// Defaults when no config file is given
    fn default_config() -> SimulationConfig {
        SimulationConfig {
            width: 40.0,
            height: 30.0,
            speed: 0.08,
            ..Default::default()
        }
    }

    fn simulation_config(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::from_path(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => Self::default_config(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(speed) = self.speed {
            config.speed = speed;
        }
        if let Some(creatures) = self.creatures {
            config.creatures = creatures;
        }
        if let Some(food) = self.food {
            config.food = food;
        }

        Ok(config)
    }

    fn show_coords(&self) -> bool {
        self.show_coords || !self.no_show_coords
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    telemetry::init_telemetry()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let config = cli.simulation_config()?;
    let mut sim = Simulation::new(config.clone()).context("invalid simulation config")?;

    writeln!(
        out,
        "Start: tick={}, {}, world={}, seed={}, speed={}, creatures={}",
        sim.tick(),
        format_creature_position(&sim.creatures()[0]),
        sim.world(),
        config.seed,
        config.speed,
        sim.creatures().len()
    )?;

    for _ in 0..cli.ticks {
        sim.step();
        if cli.respawn_every > 0 && sim.tick() % cli.respawn_every == 0 {
            sim.respawn_food();
        }
        if cli.show_coords() {
            writeln!(
                out,
                "Tick {:>2}: {}",
                sim.tick(),
                format_creature_position(&sim.creatures()[0])
            )?;
        }
    }

    let stats = sim.stats();
    if cli.summary_json {
        writeln!(out, "{}", serde_json::to_string(&stats)?)?;
    } else {
        writeln!(
            out,
            "Done: tick={}, creatures={}, food={}, largest food eaten={}, mean mass={:.2}",
            stats.tick,
            stats.creatures,
            stats.food,
            stats.largest_food_eaten,
            stats.mean_mass()
        )?;
    }

    info!(
        ticks = stats.tick,
        creatures = stats.creatures,
        food = stats.food,
        "Run complete"
    );
    Ok(())
}
