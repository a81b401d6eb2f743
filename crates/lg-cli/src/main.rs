//! Level layout generator
//!
//! Generates one layout and prints it as an ASCII map or a JSON dump.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{Level, Log, Metadata, Record};

use lg_core::collab::{SpawnRegistry, TileMap};
use lg_core::{LayoutParams, LayoutResult, LevelGenerator};

/// Seeded BSP level layout generator
#[derive(Parser, Debug)]
#[command(name = "levelgen")]
#[command(author, version, about = "Generate a room-and-corridor level layout", long_about = None)]
struct Args {
    /// RNG seed (random when omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Side length of the square map
    #[arg(short = 'm', long = "map-size")]
    map_size: Option<u32>,

    /// Partition depth; produces 2^N rooms
    #[arg(short = 'n', long = "split-count")]
    split_count: Option<u32>,

    /// Split asymmetry bound in (0, 0.5]
    #[arg(short = 'r', long = "split-ratio")]
    split_ratio: Option<f64>,

    /// Minimum room side length
    #[arg(long = "min-room-size")]
    min_room_size: Option<u32>,

    /// JSON parameter file; flags override its values
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Print the layout as JSON instead of a map
    #[arg(long = "json")]
    json: bool,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Args {
    /// Defaults, then the config file, then flags
    fn params(&self) -> LayoutResult<LayoutParams> {
        let mut params = match &self.config {
            Some(path) => LayoutParams::load(path)?,
            None => LayoutParams::default(),
        };
        if let Some(seed) = self.seed {
            params.seed = Some(seed);
        }
        if let Some(map_size) = self.map_size {
            params.map_size = map_size;
        }
        if let Some(split_count) = self.split_count {
            params.split_count = split_count;
        }
        if let Some(split_ratio) = self.split_ratio {
            params.split_ratio = split_ratio;
        }
        if let Some(min_room_size) = self.min_room_size {
            params.min_room_size = min_room_size;
        }
        Ok(params)
    }
}

/// Writes log records to stderr
struct StderrLogger {
    level: Level,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::Debug } else { Level::Warn };
    let logger = Box::new(StderrLogger { level });
    if log::set_boxed_logger(logger).is_ok() {
        log::set_max_level(level.to_level_filter());
    }
}

fn run(args: &Args) -> LayoutResult<String> {
    let params = args.params()?;
    let mut generator = LevelGenerator::new(params)?;
    let mut map = TileMap::new(params.map_size as usize);
    let mut spawns = SpawnRegistry::new();

    generator.generate_into(&mut map, &mut spawns)?;
    let start = generator.select_start_point()?;
    log::info!("start point ({:.1}, {:.1})", start.0, start.1);

    if args.json {
        let dump = serde_json::json!({
            "seed": generator.seed(),
            "params": generator.params(),
            "start": [start.0, start.1],
            "spawns": spawns.spawns(),
            "layout": generator.layout(),
        });
        Ok(serde_json::to_string_pretty(&dump)?)
    } else {
        Ok(map.render())
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(output) => {
            print!("{output}");
            if args.json {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("levelgen: {err}");
            ExitCode::FAILURE
        }
    }
}
