// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Text and JSON report.
use serde::Serialize;
use std::fmt;

use nutcheck_eval::{
    Card, CardPair, HandCategory, InvalidInput, Outs, RankedHand, evaluate_hand,
};

/// The outs report for a hand.
#[derive(Debug, Serialize)]
pub struct Report {
    /// The hole cards.
    pub hole: Vec<Card>,
    /// The board cards.
    pub board: Vec<Card>,
    /// The evaluated hand.
    pub hand: RankedHand,
    /// Total number of holes that beat the hand.
    pub outs_count: usize,
    /// Number of holes for each category they make, strongest first.
    pub by_category: Vec<(HandCategory, usize)>,
    /// The holes, possibly truncated.
    pub outs: Vec<CardPair>,
}

impl Report {
    /// Creates a report, only the first `limit` outs are listed.
    pub fn new(
        hole: &[Card],
        board: &[Card],
        hand: RankedHand,
        outs: &Outs,
        limit: Option<usize>,
    ) -> Result<Self, InvalidInput> {
        let mut counts = [0usize; HandCategory::ALL.len()];
        for pair in outs {
            let other = evaluate_hand(&pair.cards(), board)?;
            counts[other.category() as usize - 1] += 1;
        }

        let by_category = HandCategory::ALL
            .iter()
            .rev()
            .zip(counts.iter().rev())
            .filter(|(_, count)| **count > 0)
            .map(|(category, count)| (*category, *count))
            .collect();

        Ok(Self {
            hole: hole.to_vec(),
            board: board.to_vec(),
            hand,
            outs_count: outs.len(),
            by_category,
            outs: outs
                .iter()
                .copied()
                .take(limit.unwrap_or(usize::MAX))
                .collect(),
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hole:  {}", join(&self.hole))?;
        writeln!(f, "Board: {}", join(&self.board))?;
        writeln!(f, "Hand:  {}", self.hand)?;
        writeln!(f, "Outs:  {}", self.outs_count)?;

        for (category, count) in &self.by_category {
            writeln!(f, "  {category:<16} {count}")?;
        }

        if !self.outs.is_empty() {
            writeln!(f)?;
        }

        for line in self.outs.chunks(10) {
            writeln!(f, "{}", join(line))?;
        }

        if self.outs.len() < self.outs_count {
            writeln!(f, "... {} more", self.outs_count - self.outs.len())?;
        }

        Ok(())
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
