use alien_invasion::cli::{Command, GenArgs};
use alien_invasion::generator::generate_map;
use alien_invasion::utils::result_path;
use alien_invasion::world::parse_world;
use alien_invasion::{Args, Error, Outcome, SimulationEngine};
use clap::error::ErrorKind;
use clap::CommandFactory;
use colored::Colorize;
use env_logger::{Builder, Env};
use log::info;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;
use std::process::ExitCode;

/// Exit status for internal consistency faults (EX_SOFTWARE)
const EXIT_INTERNAL_FAULT: u8 = 70;

fn main() -> ExitCode {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse_args();
    let mut rng = if let Some(seed) = args.seed {
        fastrand::Rng::with_seed(seed)
    } else {
        fastrand::Rng::new()
    };

    let result = match &args.command {
        Some(Command::Gen(gen)) => generate(gen, &mut rng),
        None => simulate(&args, &mut rng),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            match err {
                Error::Simulation(_) => ExitCode::from(EXIT_INTERNAL_FAULT),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn generate(gen: &GenArgs, rng: &mut fastrand::Rng) -> Result<(), Error> {
    let spec = gen.grid_spec();
    println!(
        "{} '{}' with dimensions {} x {}, city density {} and road density {}",
        "🗺️  Generating".green().bold(),
        gen.map.display(),
        spec.width,
        spec.height,
        spec.city_density,
        spec.road_density
    );

    let map = generate_map(&spec, rng);
    write_file(&gen.map, |out| map.write_map(out))?;
    info!("wrote {}", gen.map.display());

    println!(
        "{} {} {}",
        "Done.".green().bold(),
        format!("cities={}", map.city_count()).cyan(),
        format!("roads={}", map.road_count()).cyan()
    );
    Ok(())
}

fn simulate(args: &Args, rng: &mut fastrand::Rng) -> Result<(), Error> {
    let (Some(map), Some(alien_count)) = (args.map.as_deref(), args.aliens) else {
        Args::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "simulation mode needs <MAPFILE> <NUMALIENS>",
            )
            .exit();
    };
    println!(
        "{} '{}' with {} aliens",
        "👽 Invading".green().bold(),
        map.display(),
        alien_count
    );

    let mut world = parse_world(map).map_err(|source| Error::Map {
        path: map.to_path_buf(),
        source,
    })?;
    info!("loaded {} cities from {}", world.cities.len(), map.display());

    let mut engine = SimulationEngine::new(args.engine_config());
    match engine.run(&mut world, alien_count, rng)? {
        Outcome::WorldExhausted { first_unplaced } => {
            println!(
                "{} no intact city left to land alien {}, no result file written",
                "🌍 World exhausted:".yellow().bold(),
                first_unplaced
            );
        }
        Outcome::Finished { report, .. } => {
            let out = result_path(map);
            write_file(&out, |w| world.write_map(w))?;
            info!("wrote {}", out.display());
            engine.print_summary(&world, &report, &out);
        }
    }
    Ok(())
}

fn write_file<F>(path: &Path, write: F) -> Result<(), Error>
where
    F: FnOnce(BufWriter<File>) -> io::Result<()>,
{
    File::create(path)
        .map(BufWriter::new)
        .and_then(write)
        .map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
}
