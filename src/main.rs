//! Word Ladder - CLI
//!
//! Shortest and all-shortest word ladders over an embedded or custom word list.

use anyhow::Result;
use clap::{Parser, Subcommand};
use word_ladder::{
    commands::{
        LadderConfig, find_all_ladders, find_ladder, run_benchmark, sample_pairs, word_neighbors,
    },
    core::Word,
    index::MaskIndex,
    output::{print_all_result, print_benchmark_result, print_neighbor_report, print_shortest_result},
    search::{DEFAULT_MAX_RUNGS, LadderSearch, SearchConfig},
    wordlists::{
        WORDS,
        loader::{filter_by_length, load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Word ladder solver: one-letter-at-a-time paths between words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Longest ladder to search for, in rungs; longer ladders count as no path
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_RUNGS)]
    max_rungs: usize,

    /// Search every per-path branch without settled-depth pruning
    #[arg(long, global = true)]
    no_prune: bool,

    /// Debug logging and search statistics
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest ladder between two words
    Ladder {
        start: String,
        target: String,
    },

    /// Find every ladder tied for shortest between two words
    All {
        start: String,
        target: String,
    },

    /// List the one-letter neighbors of a word
    Neighbors {
        word: String,
    },

    /// Run shortest-ladder queries on random word pairs
    Benchmark {
        /// Number of random pairs to query
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Word length to sample pairs from
        #[arg(short, long, default_value = "3")]
        length: usize,

        /// Seed for pair sampling
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

/// Load the word list named by the -w flag
fn load_words(wordlist: &str) -> Result<Vec<Word>> {
    match wordlist {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => load_from_file(path)
            .map_err(|e| anyhow::anyhow!("Failed to load word list from '{path}': {e}")),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let words = load_words(&cli.wordlist)?;
    log::debug!("loaded {} words from '{}'", words.len(), cli.wordlist);

    let search_config = SearchConfig::new()
        .with_max_rungs(cli.max_rungs)
        .with_pruning(!cli.no_prune);

    match cli.command {
        Commands::Ladder { start, target } => {
            run_ladder_command(start, target, search_config, cli.verbose, &words)
        }
        Commands::All { start, target } => {
            run_all_command(start, target, search_config, cli.verbose, &words)
        }
        Commands::Neighbors { word } => run_neighbors_command(&word, &words),
        Commands::Benchmark {
            count,
            length,
            seed,
        } => run_benchmark_command(count, length, seed, search_config, &words),
    }
}

fn run_ladder_command(
    start: String,
    target: String,
    search: SearchConfig,
    verbose: bool,
    words: &[Word],
) -> Result<()> {
    let mut config = LadderConfig::new(start, target);
    config.search = search;

    let result = find_ladder(config, words).map_err(|e| anyhow::anyhow!(e))?;
    print_shortest_result(&result, verbose);
    Ok(())
}

fn run_all_command(
    start: String,
    target: String,
    search: SearchConfig,
    verbose: bool,
    words: &[Word],
) -> Result<()> {
    let mut config = LadderConfig::new(start, target);
    config.search = search;

    let result = find_all_ladders(config, words).map_err(|e| anyhow::anyhow!(e))?;
    print_all_result(&result, verbose);
    Ok(())
}

fn run_neighbors_command(word: &str, words: &[Word]) -> Result<()> {
    let report = word_neighbors(word, words).map_err(|e| anyhow::anyhow!(e))?;
    print_neighbor_report(&report);
    Ok(())
}

fn run_benchmark_command(
    count: usize,
    length: usize,
    seed: u64,
    search: SearchConfig,
    words: &[Word],
) -> Result<()> {
    let corpus = filter_by_length(words, length);
    if corpus.len() < 2 {
        anyhow::bail!("Need at least two {length}-letter words, found {}", corpus.len());
    }

    println!(
        "Running benchmark on {count} random pairs of {length}-letter words ({} in list)...",
        corpus.len()
    );

    let index = MaskIndex::build(&corpus);
    let searcher = LadderSearch::with_config(&index, search);
    let pairs = sample_pairs(&corpus, count, seed);

    let result = run_benchmark(&searcher, &pairs, true);
    print_benchmark_result(&result);
    Ok(())
}
