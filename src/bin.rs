use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fmt::{Debug, Formatter};
use std::time::Instant;

use wordsnake_core::error::GameError;
use wordsnake_core::generator::{
    GameGenerator, PoolWordSource, WordPoolConfig, DEFAULT_COLUMNS, DEFAULT_ROWS,
};
use wordsnake_core::types::Language;

const SAMPLE_WORDS_RAW: &str = include_str!("../resources/sample_words.txt");

/// wordsnake_core: Command-line word-snake puzzle generation tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Puzzle id, conventionally an ISO date like 2024-11-30
    id: String,

    /// Path to a word-per-line candidate pool [default: (embedded sample pool)]
    #[arg(long)]
    words: Option<String>,

    /// Grid row count
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Grid column count
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: usize,

    /// Puzzle language, finnish or english
    #[arg(long, default_value = "finnish")]
    language: String,

    /// Seed for deterministic generation [default: OS entropy]
    #[arg(long)]
    seed: Option<u64>,

    /// Print timing information along with the grid
    #[arg(short, long, default_value_t = false)]
    time: bool,
}

// Custom Error struct for more context
struct AppError(String);

impl Debug for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error: {}", self.0)
    }
}

impl From<GameError> for AppError {
    fn from(err: GameError) -> Self {
        AppError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError(err.to_string())
    }
}

fn main() -> Result<(), AppError> {
    env_logger::init();
    let args = Args::parse();

    let language: Language = args.language.parse().map_err(AppError)?;

    let source = match &args.words {
        Some(path) => PoolWordSource::new(WordPoolConfig::File { path: path.into() }),
        None => PoolWordSource::new(WordPoolConfig::Contents {
            contents: SAMPLE_WORDS_RAW.to_string(),
        }),
    };
    let generator = GameGenerator::with_dimensions(source, args.rows, args.columns);

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let start_time = Instant::now();
    let puzzle = generator.generate(&args.id, language, &mut rng)?;
    let generation_time = start_time.elapsed();

    for row in &puzzle.grid {
        println!("{}", row.iter().collect::<String>());
    }
    println!();
    println!("solution words: {}", puzzle.solution_words.join(", "));
    if let Some(dictionary_name) = &puzzle.valid_words_dictionary_name {
        println!("dictionary: {dictionary_name}");
    }

    if args.time {
        eprintln!("{generation_time:?} generating puzzle");
    }

    Ok(())
}
