//! Deals a shuffled deck to four players and plays it out on the terminal.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use log::info;

use fourhands::{Game, GameOptions, Termination, render};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Player names; unnamed seats get default names.
    names: Vec<String>,
    /// Seed for the shuffle and the plays. Defaults to the current time.
    #[arg(long, short)]
    seed: Option<u64>,
    /// Player who leads every round. Random when omitted.
    #[arg(long)]
    start: Option<String>,
    /// Keep playing until every hand is empty.
    #[arg(long)]
    until_all_empty: bool,
    /// Disable colored card output.
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if cli.no_color {
        render::set_color(false);
    }

    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    info!("using seed {seed}");

    let mut options = GameOptions::default();
    if cli.until_all_empty {
        options = options.with_termination(Termination::AllHandsEmpty);
    }
    if let Some(start) = cli.start {
        options = options.with_starting_player(start);
    }

    let mut game = Game::new(cli.names, options, seed)?;
    let record = game.play()?;

    print!("{}", render::game(&record));

    Ok(())
}
