// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example outs_stats -- 8H QH KH TD TC
// ...
// Total holes      1081
// ...
// Category          Holes  Avg outs
// ...
// ```

use clap::Parser;
use std::time::Instant;

use nutcheck_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The five board cards.
    #[clap(num_args = 5, default_values = ["8H", "QH", "KH", "TD", "TC"])]
    board: Vec<Card>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let board = cli.board;

    let mut deck = Deck::default();
    for c in &board {
        deck.remove(*c);
    }

    // Computes the outs of every hole on this board.
    let now = Instant::now();
    let mut holes = [0usize; 10];
    let mut outs = [0usize; 10];

    let mut failed = None;
    deck.for_each(2, |hole| {
        match evaluate_hand(hole, &board).and_then(|h| Ok((h, compute_outs(hole, &board)?))) {
            Ok((hand, hole_outs)) => {
                let idx = hand.category() as usize - 1;
                holes[idx] += 1;
                outs[idx] += hole_outs.len();
            }
            Err(e) => failed = Some(e),
        }
    });

    if let Some(e) = failed {
        return Err(e.into());
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = holes.iter().sum::<usize>();
    println!("Total holes      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Holes/sec:       {:.0}\n", total as f64 / elapsed);

    println!("{:<16}  {:>5}  {:>8}", "Category", "Holes", "Avg outs");
    for category in HandCategory::ALL.iter().rev() {
        let idx = *category as usize - 1;
        if holes[idx] > 0 {
            let avg = outs[idx] as f64 / holes[idx] as f64;
            println!("{:<16}  {:>5}  {:>8.1}", category.to_string(), holes[idx], avg);
        }
    }

    Ok(())
}
