//! Wordpie - CLI
//!
//! Wordle-style game with TUI and CLI modes, plus a candidate-narrowing solver.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordpie::{
    commands::{add_word, analyze_word, pick_secrets, run_benchmark, run_simple, solve_word},
    config::GameConfig,
    interactive::{App, run_tui},
    lexicon::{FrequencyTable, Lexicon},
    output::{print_add_result, print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{DEFAULT_MAX_GUESSES, SelectorConfig},
    wordlists::{FileSource, MemorySource},
};

#[derive(Parser)]
#[command(
    name = "wordpie",
    about = "Wordle-style word game with a candidate-narrowing solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true, env = "WORDPIE_WORDLIST")]
    wordlist: Option<PathBuf>,

    /// Letter frequency CSV, `LETTER,weight` per line (default: built-in table)
    #[arg(short = 'f', long, global = true, env = "WORDPIE_FREQUENCIES")]
    frequencies: Option<PathBuf>,

    /// Minimum score for an opening guess
    #[arg(short, long, global = true, default_value_t = SelectorConfig::DEFAULT_THRESHOLD)]
    threshold: f64,

    /// Samples drawn when looking for a guess containing every misplaced letter
    #[arg(short, long, global = true, default_value_t = SelectorConfig::DEFAULT_RETRY_LIMIT)]
    retries: usize,

    /// Guesses allowed per game (1-100)
    #[arg(short = 'g', long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Seed for reproducible games
    #[arg(short, long, global = true, env = "WORDPIE_SEED")]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Simple line-based game without the TUI
    Simple,

    /// Let the solver play against a secret word
    Solve {
        /// The secret to solve (default: random word from the list)
        word: Option<String>,

        /// Show candidate counts after each guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Score a word and check whether it could open a game
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Auto-solve many random secrets and report statistics
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },

    /// Append a word to the word list file
    Add {
        /// Word to add
        word: String,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            selector: SelectorConfig {
                opening_threshold: self.threshold,
                retry_limit: self.retries,
                ..SelectorConfig::default()
            },
            max_guesses: self.max_guesses,
            seed: self.seed,
        }
    }
}

/// Build the lexicon from the `-w`/`-f` flags or the built-in data
fn load_lexicon(cli: &Cli) -> Result<Lexicon> {
    let frequencies = match &cli.frequencies {
        Some(path) => FrequencyTable::from_file(path)
            .with_context(|| format!("failed to load letter frequencies from {}", path.display()))?,
        None => FrequencyTable::embedded().context("built-in letter frequencies are invalid")?,
    };

    match &cli.wordlist {
        Some(path) => Lexicon::build(FileSource::new(path), frequencies)
            .with_context(|| format!("failed to load word list from {}", path.display())),
        None => Lexicon::build(MemorySource::embedded(), frequencies)
            .context("built-in word list is invalid"),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = cli.game_config();
    config.validate().context("invalid settings")?;
    let mut lexicon = load_lexicon(&cli)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(lexicon, config),
        Commands::Simple => run_simple(&config, &mut lexicon).context("simple mode failed"),
        Commands::Solve { word, verbose } => {
            run_solve_command(&config, &lexicon, word.as_deref(), verbose)
        }
        Commands::Analyze { word } => run_analyze_command(&config, &lexicon, &word),
        Commands::Benchmark { count } => {
            run_benchmark_command(&config, &lexicon, count);
            Ok(())
        }
        Commands::Add { word } => run_add_command(cli.wordlist.is_some(), &mut lexicon, &word),
    }
}

fn run_solve_command(
    config: &GameConfig,
    lexicon: &Lexicon,
    word: Option<&str>,
    verbose: bool,
) -> Result<()> {
    let mut rng = config.rng();
    let result = solve_word(config, lexicon, word, &mut rng)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(config: &GameConfig, lexicon: &Lexicon, word: &str) -> Result<()> {
    let result = analyze_word(word, lexicon, &config.selector)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(config: &GameConfig, lexicon: &Lexicon, count: usize) {
    println!(
        "Running benchmark on {count} random words from {} ({} words)...",
        lexicon.source_name(),
        lexicon.len()
    );

    let secrets = pick_secrets(config, lexicon, count);
    let result = run_benchmark(config, lexicon, &secrets, true);
    print_benchmark_result(&result);
}

fn run_add_command(has_file: bool, lexicon: &mut Lexicon, word: &str) -> Result<()> {
    if !has_file {
        bail!("the built-in word list is read-only; pass --wordlist <path> to add words");
    }

    let result = add_word(lexicon, word)?;
    print_add_result(&result);
    Ok(())
}

fn run_play_command(lexicon: Lexicon, config: GameConfig) -> Result<()> {
    let app = App::new(lexicon, config)?;
    run_tui(app)
}
