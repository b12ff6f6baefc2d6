//! Terminal front end for Fibonacci Solitaire.

mod config;
mod menu;
mod render;
mod table;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::CliConfig;
use render::{write_deck, write_json, write_round, write_session, write_tally};
use std::io::{self, Write};
use table::Table;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "fibsol")]
#[command(about = "Deal a deck onto Fibonacci piles until the last pile closes")]
struct Args {
    /// Seed for the shuffle source; defaults to the clock
    #[arg(long, env = "FIBSOL_SEED", global = true)]
    seed: Option<u64>,

    /// Give up `win` after this many rounds
    #[arg(long, env = "FIBSOL_MAX_GAMES", global = true)]
    max_games: Option<u32>,

    /// Print reports as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Interactive menu (default)
    Menu,
    /// Shuffle once and play a single round
    Play,
    /// Reshuffle and play until a round is won
    Win,
    /// Print the deck
    Show {
        #[arg(long)]
        shuffled: bool,
    },
    /// Play many rounds and report the win rate
    Stats {
        #[arg(short, long, default_value = "1000")]
        rounds: u32,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = CliConfig::resolve(args.seed, args.max_games, args.json);
    let mut table = Table::new(&config);
    info!(seed = table.seed(), "table ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.command.unwrap_or(Command::Menu) {
        Command::Menu => {
            let stdin = io::stdin();
            menu::run_menu(&mut stdin.lock(), &mut out, &mut table).context("menu loop")?;
        }
        Command::Play => {
            table.shuffle();
            let (report, events) = table.play();
            let written = if config.json {
                write_json(&mut out, &report)
            } else {
                write_round(&mut out, &report, &events)
            };
            written.context("write round")?;
        }
        Command::Win => {
            let report = table.win()?;
            let written = if config.json {
                write_json(&mut out, &report)
            } else {
                write_session(&mut out, &report)
            };
            written.context("write session")?;
        }
        Command::Show { shuffled } => {
            if shuffled {
                table.shuffle();
            }
            let written = if config.json {
                write_json(&mut out, table.deck.cards().as_slice())
            } else {
                write_deck(&mut out, &table.deck)
            };
            written.context("write deck")?;
        }
        Command::Stats { rounds } => {
            let tally = table.tally(rounds);
            let written = if config.json {
                write_json(&mut out, &tally)
            } else {
                write_tally(&mut out, &tally)
            };
            written.context("write tally")?;
        }
    }
    out.flush().context("flush stdout")?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
