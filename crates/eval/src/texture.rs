// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank and suit scanners over a set of cards.
use crate::{Card, Rank, Suit};

/// Number of cards of each rank, an ace counts once as a high card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankCounts {
    counts: [u8; 13],
}

impl RankCounts {
    /// Counts the ranks of the given cards.
    pub fn new(cards: &[Card]) -> Self {
        let mut counts = [0; 13];
        for card in cards {
            counts[card.rank() as usize] += 1;
        }

        Self { counts }
    }

    /// The number of cards with the given rank.
    pub fn count(&self, rank: Rank) -> u8 {
        self.counts[rank as usize]
    }

    /// Ranks that appear exactly `n` times, highest first.
    pub fn ranks_with(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        Rank::ranks().rev().filter(move |&r| self.count(r) == n)
    }

    /// Ranks that appear at least once, highest first.
    pub fn ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        Rank::ranks().rev().filter(move |&r| self.count(r) > 0)
    }
}

/// Cards of a suit with at least three cards on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlushDraw {
    /// The concentrated suit.
    pub suit: Suit,
    /// The board cards of that suit.
    pub cards: Vec<Card>,
}

/// Checks if a board has three or more cards of the same suit.
///
/// On a five cards board at most one suit can have three cards.
pub fn flush_potential(board: &[Card]) -> Option<FlushDraw> {
    Suit::suits().find_map(|suit| {
        let cards = board
            .iter()
            .copied()
            .filter(|c| c.suit() == suit)
            .collect::<Vec<_>>();
        (cards.len() >= 3).then_some(FlushDraw { suit, cards })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn rank_counts() {
        let counts = RankCounts::new(&cards("AH AD 9C 9S 9H 2D KC"));
        assert_eq!(counts.count(Rank::Ace), 2);
        assert_eq!(counts.count(Rank::Nine), 3);
        assert_eq!(counts.count(Rank::Five), 0);

        assert_eq!(counts.ranks_with(3).collect::<Vec<_>>(), vec![Rank::Nine]);
        assert_eq!(counts.ranks_with(2).collect::<Vec<_>>(), vec![Rank::Ace]);
        assert_eq!(
            counts.ranks_with(1).collect::<Vec<_>>(),
            vec![Rank::King, Rank::Deuce]
        );
        assert_eq!(
            counts.ranks().collect::<Vec<_>>(),
            vec![Rank::Ace, Rank::King, Rank::Nine, Rank::Deuce]
        );
    }

    #[test]
    fn flush_draw() {
        let board = cards("8H QH KH TD TC");
        let draw = flush_potential(&board).unwrap();
        assert_eq!(draw.suit, Suit::Hearts);
        assert_eq!(draw.cards, cards("8H QH KH"));

        let draw = flush_potential(&cards("2S 5S 9S JS 3D")).unwrap();
        assert_eq!(draw.suit, Suit::Spades);
        assert_eq!(draw.cards.len(), 4);

        assert!(flush_potential(&cards("2S 5S 9H JH 3D")).is_none());
    }
}
