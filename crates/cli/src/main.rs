// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Nutcheck CLI.
//!
//! Evaluates a hole with a complete board and prints the opponent holes
//! that beat it.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{error, info};

use nutcheck_eval::{Card, compute_outs, evaluate_hand};

pub mod report;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// The two hole cards (e.g. "TC TS").
    #[clap(long)]
    hole: String,
    /// The five board cards (e.g. "3D TH JC QH KD").
    #[clap(long, short)]
    board: String,
    /// Print the result as JSON.
    #[clap(long)]
    json: bool,
    /// Print at most this number of outs.
    #[clap(long, short)]
    limit: Option<usize>,
    /// Enable debug logs.
    #[clap(long, short)]
    verbose: bool,
}

/// The command configuration.
#[derive(Debug)]
pub struct Config {
    /// The hole cards string.
    pub hole: String,
    /// The board cards string.
    pub board: String,
    /// Print JSON instead of text.
    pub json: bool,
    /// Limit on the number of printed outs.
    pub limit: Option<usize>,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let config = Config {
        hole: cli.hole,
        board: cli.board,
        json: cli.json,
        limit: cli.limit,
    };

    if let Err(e) = run(config) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

/// Evaluates the hand and prints the report.
pub fn run(config: Config) -> Result<()> {
    let hole = parse_cards(&config.hole).context("Invalid hole")?;
    let board = parse_cards(&config.board).context("Invalid board")?;

    let hand = evaluate_hand(&hole, &board)?;
    let outs = compute_outs(&hole, &board)?;
    info!("{hand} is beaten by {} holes", outs.len());

    let report = report::Report::new(&hole, &board, hand, &outs, config.limit)?;
    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }

    Ok(())
}

/// Parses cards separated by spaces or commas.
fn parse_cards(s: &str) -> Result<Vec<Card>> {
    let cards = s
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(|t| t.parse::<Card>().with_context(|| format!("Parsing '{t}'")))
        .collect::<Result<Vec<_>>>()?;

    if cards.is_empty() {
        bail!("No cards in '{s}'");
    }

    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutcheck_eval::{Rank, Suit};

    #[test]
    fn parse_cards_separators() {
        let cards = parse_cards("TC, ts  2h").unwrap();
        assert_eq!(
            cards,
            vec![
                Card::new(Rank::Ten, Suit::Clubs),
                Card::new(Rank::Ten, Suit::Spades),
                Card::new(Rank::Deuce, Suit::Hearts),
            ]
        );
    }

    #[test]
    fn parse_cards_errors() {
        assert!(parse_cards("").is_err());
        assert!(parse_cards(" , ").is_err());

        let err = parse_cards("TC XX").unwrap_err();
        assert!(format!("{err:#}").contains("Parsing 'XX'"));
    }

    #[test]
    fn run_rejects_bad_deals() {
        let config = Config {
            hole: "TC TC".to_string(),
            board: "3D TH JC QH KD".to_string(),
            json: false,
            limit: None,
        };
        let err = run(config).unwrap_err();
        assert_eq!(err.to_string(), "duplicate card TC");

        let config = Config {
            hole: "TC TS".to_string(),
            board: "3D TH JC".to_string(),
            json: true,
            limit: None,
        };
        let err = run(config).unwrap_err();
        assert_eq!(err.to_string(), "expected 5 board cards, got 3");
    }
}
