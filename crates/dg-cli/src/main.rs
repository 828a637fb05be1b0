//! Dungeon generator command line
//!
//! Generates one dungeon and prints it as ASCII art, JSON or a summary.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use dg_core::{GenerationConfig, SeedMode, generate};

mod display;

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Ascii,
    Json,
    Summary,
}

/// Seeded dungeon layout generator
#[derive(Parser, Debug)]
#[command(name = "dungeongen")]
#[command(author, version, about = "Generate a seeded dungeon layout", long_about = None)]
struct Args {
    /// JSON configuration file; flags below override its values
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Fixed seed
    #[arg(short = 's', long = "seed", conflicts_with = "random")]
    seed: Option<u64>,

    /// Draw a fresh seed for every attempt
    #[arg(long = "random")]
    random: bool,

    /// Maximum number of rooms
    #[arg(short = 'n', long = "rooms")]
    rooms: Option<usize>,

    /// Minimum branches per room
    #[arg(long = "min-branches")]
    min_branches: Option<u32>,

    /// Maximum branches per room
    #[arg(long = "max-branches")]
    max_branches: Option<u32>,

    /// Minimum boss depth
    #[arg(short = 'd', long = "boss-depth")]
    boss_depth: Option<u32>,

    /// Attempts before giving up
    #[arg(short = 'a', long = "attempts")]
    attempts: Option<u32>,

    /// Loop edge probability
    #[arg(long = "loop-chance")]
    loop_chance: Option<f64>,

    /// Dead-end lock probability
    #[arg(long = "lock-chance")]
    lock_chance: Option<f64>,

    /// Secret room slots
    #[arg(long = "secrets")]
    secrets: Option<usize>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "ascii")]
    format: Format,

    /// Verbose (debug) logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Args {
    /// Base configuration with command-line overrides applied
    fn to_config(&self) -> Result<GenerationConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => GenerationConfig::load_from_file(path)?,
            None => GenerationConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = SeedMode::Fixed(seed);
        } else if self.random {
            config.seed = SeedMode::Random;
        }
        if let Some(rooms) = self.rooms {
            config.max_rooms = rooms;
        }
        if let Some(min) = self.min_branches {
            config.min_branches = min;
        }
        if let Some(max) = self.max_branches {
            config.max_branches = max;
        }
        if let Some(depth) = self.boss_depth {
            config.minimum_boss_depth = depth;
        }
        if let Some(attempts) = self.attempts {
            config.max_generation_attempts = attempts;
        }
        if let Some(chance) = self.loop_chance {
            config.loop_chance = chance;
        }
        if let Some(chance) = self.lock_chance {
            config.lock_chance = chance;
        }
        if let Some(secrets) = self.secrets {
            config.secret_room_count = secrets;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let config = args.to_config()?;
    log::debug!("configuration: {config:?}");

    let dungeon = generate(&config)?;

    match args.format {
        Format::Ascii => print!("{}", display::render_ascii(&dungeon)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&dungeon)?),
        Format::Summary => print!("{}", display::render_summary(&dungeon)?),
    }

    Ok(())
}
