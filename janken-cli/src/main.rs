mod export;
mod report;
mod store;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{debug, warn};

use janken_game::{Choice, Game, MatchEngine, summarize};

use export::write_csv;
use report::{print_history, print_round, print_summary, print_trend, score_line};
use store::{JsonlHistoryStore, load_or_reset};

#[derive(Debug, Parser)]
#[command(name = "janken", version)]
#[command(about = "Rock-paper-scissors with persistent history and statistics")]
struct Args {
    /// History file location (JSON lines, one round per line)
    #[arg(long, default_value = "data/history.jsonl")]
    data_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play interactively against the computer
    Play {
        /// Fixed RNG seed for reproducible computer hands
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print aggregate statistics derived from the stored history
    Stats,
    /// List recent rounds, newest first
    History {
        /// Maximum number of rounds to show
        #[arg(long, default_value_t = 30)]
        limit: usize,
    },
    /// Export the full history as CSV
    Export {
        /// Destination path
        #[arg(long, default_value = "data/history.csv")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let store = JsonlHistoryStore::new(&args.data_file);

    match args.command {
        Command::Play { seed } => run_play(store, seed),
        Command::Stats => run_stats(store),
        Command::History { limit } => run_history(store, limit),
        Command::Export { output } => run_export(store, &output),
    }
}

fn run_play(store: JsonlHistoryStore, seed: Option<u64>) -> Result<()> {
    announce_banner();
    let engine = seed.map_or_else(MatchEngine::new, MatchEngine::with_seed);
    let mut game = Game::with_engine(engine, store);

    println!("Choose your move: rock (r), paper (p), or scissors (s).");
    println!("Other commands: score, reset, quit.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        let token = input.trim().to_ascii_lowercase();
        match token.as_str() {
            "" => {}
            "q" | "quit" | "exit" => break,
            "score" => println!("{}", score_line(game.score())),
            "reset" => {
                game.reset();
                println!("Session score reset.");
            }
            other => match parse_choice(other) {
                Some(choice) => play_one(&mut game, choice),
                None => println!(
                    "Unrecognized input {other:?}. Try r, p, s, score, reset, or quit."
                ),
            },
        }
    }

    println!("Final session score: {}", score_line(game.score()));
    Ok(())
}

fn play_one(game: &mut Game<JsonlHistoryStore>, choice: Choice) {
    let played = game.play(choice);
    print_round(&played.round, game.score());
    match played.stored {
        Ok(()) => debug!("round appended to {}", game.store().path().display()),
        Err(err) => {
            warn!("failed to persist round: {err}");
            println!("{}", "Failed to save game data".red());
        }
    }
}

fn run_stats(mut store: JsonlHistoryStore) -> Result<()> {
    let history = load_or_reset(&mut store);
    print_summary(&summarize(&history));
    print_trend(&history);
    Ok(())
}

fn run_history(mut store: JsonlHistoryStore, limit: usize) -> Result<()> {
    let history = load_or_reset(&mut store);
    print_history(&history, limit);
    Ok(())
}

fn run_export(mut store: JsonlHistoryStore, output: &Path) -> Result<()> {
    let history = load_or_reset(&mut store);
    write_csv(&history, output)?;
    println!("Exported {} rounds to {}", history.len(), output.display());
    Ok(())
}

fn parse_choice(input: &str) -> Option<Choice> {
    match input {
        "r" => Some(Choice::Rock),
        "p" => Some(Choice::Paper),
        "s" => Some(Choice::Scissors),
        other => other.parse().ok(),
    }
}

fn announce_banner() {
    println!("{}", "Rock Paper Scissors".bright_cyan().bold());
    println!("{}", "===================".cyan());
}
