use crate::generator::GridSpec;
use crate::simulation::EngineConfig;
use crate::utils::DEFAULT_MAX_ROUNDS;
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// CLI arguments for the alien invasion simulation
#[derive(Parser, Debug)]
#[command(
    name = "alien_invasion",
    about = "👽 Alien invasion simulator",
    arg_required_else_help = true,
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the map file
    #[arg(value_name = "MAPFILE", required = true)]
    pub map: Option<PathBuf>,

    /// Number of aliens to unleash
    #[arg(
        value_name = "NUMALIENS",
        required = true,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub aliens: Option<u32>,

    /// Maximum movement rounds
    #[arg(long, default_value_t = DEFAULT_MAX_ROUNDS)]
    pub max_rounds: u32,

    /// Random seed
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Suppress destruction logs (for benchmarks)
    #[arg(long, default_value_t = false)]
    pub suppress_events: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a random grid map (also accepted as `-gen`)
    Gen(GenArgs),
}

#[derive(clap::Args, Debug)]
pub struct GenArgs {
    /// Output map file
    #[arg(value_name = "MAPFILE")]
    pub map: PathBuf,

    /// Grid width
    #[arg(value_name = "MAXX", value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Grid height
    #[arg(value_name = "MAXY", value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Probability in [0, 1] that a cell holds a city
    #[arg(value_name = "CITY_DENSITY", value_parser = parse_density)]
    pub city_density: f64,

    /// Probability in [0, 1] that two adjacent cities get a road
    #[arg(value_name = "ROAD_DENSITY", value_parser = parse_density)]
    pub road_density: f64,
}

impl Args {
    /// Parse the process arguments, accepting the `-gen` spelling
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            max_rounds: self.max_rounds,
            suppress_events: self.suppress_events,
        }
    }
}

impl GenArgs {
    pub fn grid_spec(&self) -> GridSpec {
        GridSpec {
            width: self.width as usize,
            height: self.height as usize,
            city_density: self.city_density,
            road_density: self.road_density,
        }
    }
}

/// Rewrite a leading `-gen` argument into the `gen` subcommand
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().collect();
    if let Some(flag) = args.get_mut(1).filter(|a| **a == "-gen") {
        *flag = OsString::from("gen");
    }
    args
}

fn parse_density(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{} is not in the [0, 1] range", value))
    }
}
