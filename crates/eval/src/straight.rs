// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Straight detection and straight completion search.
//!
//! Straights work on rank values where an ace is both 1 and 14, use
//! [straight_values] to get the values a rank takes in a straight.
use crate::Rank;

/// The values a rank can take in a straight, an ace is both 14 and 1.
pub fn straight_values(rank: Rank) -> impl Iterator<Item = u8> {
    let (high, low) = (rank.value(), rank.low_value());
    std::iter::once(high).chain((low != high).then_some(low))
}

/// Finds the highest five consecutive values, returned in descending order.
///
/// Values must be in the range 1..=14, repeated values are ignored. A five
/// high straight needs the ace passed as 1.
pub fn is_straight(values: impl IntoIterator<Item = u8>) -> Option<[u8; 5]> {
    let mut seen = [false; 15];
    for v in values {
        if let Some(s) = seen.get_mut(v as usize) {
            *s = true;
        }
    }

    let distinct = (1..=14u8)
        .rev()
        .filter(|&v| seen[v as usize])
        .collect::<Vec<_>>();

    // Sorted and distinct so four gaps of one are a span of four.
    distinct
        .windows(5)
        .find(|w| w[0] - w[4] == 4)
        .map(|w| [w[0], w[1], w[2], w[3], w[4]])
}

/// The ranks missing to complete a straight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    /// The straight is already made.
    None,
    /// One rank is missing.
    One(Rank),
    /// Two ranks are missing.
    Two(Rank, Rank),
}

/// A straight that can be completed by adding at most two ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightDraw {
    /// The straight top rank, a five for the wheel.
    pub top: Rank,
    /// The ranks needed to complete it.
    pub missing: Missing,
}

/// Finds all straights that the given ranks complete with at most two more
/// ranks, highest straight first.
///
/// This is used on the board ranks (or on the ranks of one suit for straight
/// flushes) to find the hole ranks that make a straight.
pub fn straight_draws(ranks: impl IntoIterator<Item = Rank>) -> Vec<StraightDraw> {
    let mut seen = [false; 15];
    for rank in ranks {
        for v in straight_values(rank) {
            seen[v as usize] = true;
        }
    }

    let mut draws = Vec::new();
    for top in (5..=14u8).rev() {
        let missing = (top - 4..=top)
            .filter(|&v| !seen[v as usize])
            .filter_map(Rank::from_value)
            .collect::<Vec<_>>();

        let missing = match missing.as_slice() {
            [] => Missing::None,
            [r] => Missing::One(*r),
            [r1, r2] => Missing::Two(*r1, *r2),
            _ => continue,
        };

        if let Some(top) = Rank::from_value(top) {
            draws.push(StraightDraw { top, missing });
        }
    }

    draws
}
