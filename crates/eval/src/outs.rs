// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Opponent outs on a complete board.
//!
//! Given a hole and a five cards board [compute_outs] finds every two cards
//! hole an opponent could hold that makes a hand in a stronger category,
//! or a higher straight flush when the hand is a straight flush.
//!
//! The search doesn't evaluate all the 990 holes, it goes through each
//! category above the hand category and generates the holes that complete
//! that category on this board. Every generated hole goes through a single
//! insert that rejects cards in the hole or on the board.
use ahash::AHashSet;
use log::{debug, trace};
use serde::Serialize;
use std::{collections::BTreeSet, fmt};

use crate::{
    Card, Deck, Rank, Suit,
    error::{InvalidInput, check_deal},
    eval::{HandCategory, RankedHand, rank_cards},
    straight::{Missing, straight_draws},
    texture::{RankCounts, flush_potential},
};

/// Two cards an opponent may hold, the card with the lower id first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CardPair(Card, Card);

impl CardPair {
    /// Creates a pair of two different cards in any order.
    pub fn new(c1: Card, c2: Card) -> Option<CardPair> {
        if c1 < c2 {
            Some(Self(c1, c2))
        } else if c2 < c1 {
            Some(Self(c2, c1))
        } else {
            None
        }
    }

    /// The pair cards, lower first.
    pub fn cards(&self) -> [Card; 2] {
        [self.0, self.1]
    }

    /// Checks if this pair holds the given card.
    pub fn holds(&self, card: Card) -> bool {
        self.0 == card || self.1 == card
    }
}

impl fmt::Display for CardPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.1, self.0)
    }
}

/// The set of opponent holes that beat a hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Outs {
    pairs: BTreeSet<CardPair>,
}

impl Outs {
    /// Number of holes.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Checks if no hole beats the hand.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Checks if the two cards, in any order, are in the set.
    pub fn contains(&self, c1: Card, c2: Card) -> bool {
        CardPair::new(c1, c2).is_some_and(|p| self.pairs.contains(&p))
    }

    /// Iterates the holes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &CardPair> {
        self.pairs.iter()
    }
}

impl IntoIterator for Outs {
    type Item = CardPair;
    type IntoIter = std::collections::btree_set::IntoIter<CardPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<'a> IntoIterator for &'a Outs {
    type Item = &'a CardPair;
    type IntoIter = std::collections::btree_set::Iter<'a, CardPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// Computes the holes that beat the given hole on a complete board.
///
/// When the board has four of a kind the result is empty, all players share
/// the board quads and kickers are not compared.
pub fn compute_outs(hole: &[Card], board: &[Card]) -> Result<Outs, InvalidInput> {
    check_deal(hole, board)?;
    Ok(better_hands(hole, board))
}

/// The cards not in the hole or on the board.
#[derive(Debug)]
struct UnseenPool {
    used: AHashSet<Card>,
    cards: Vec<Card>,
}

impl UnseenPool {
    fn new(hole: &[Card], board: &[Card]) -> Self {
        let used = hole.iter().chain(board).copied().collect::<AHashSet<_>>();
        let cards = Deck::default()
            .iter()
            .filter(|c| !used.contains(c))
            .collect();
        Self { used, cards }
    }

    fn is_unseen(&self, card: Card) -> bool {
        !self.used.contains(&card)
    }

    fn of_rank(&self, rank: Rank) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied().filter(move |c| c.rank() == rank)
    }

    fn of_suit(&self, suit: Suit) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied().filter(move |c| c.suit() == suit)
    }
}

/// Outs search state for one hand.
struct Search<'a> {
    board: &'a [Card],
    counts: RankCounts,
    pool: UnseenPool,
    outs: Outs,
}

impl Search<'_> {
    /// Adds a hole if both cards are unseen and different.
    fn insert(&mut self, c1: Card, c2: Card) -> bool {
        if !self.pool.is_unseen(c1) || !self.pool.is_unseen(c2) {
            return false;
        }

        match CardPair::new(c1, c2) {
            Some(pair) => self.outs.pairs.insert(pair),
            None => false,
        }
    }

    /// Adds the card with any other unseen card.
    fn with_any(&mut self, card: Card) {
        let cards = self.pool.cards.clone();
        for other in cards {
            self.insert(card, other);
        }
    }

    /// Adds each card of a rank with any other unseen card.
    fn rank_with_any(&mut self, rank: Rank) {
        let cards = self.pool.of_rank(rank).collect::<Vec<_>>();
        for card in cards {
            self.with_any(card);
        }
    }

    /// Adds a card of each rank.
    fn ranks_pair(&mut self, r1: Rank, r2: Rank) {
        let cards1 = self.pool.of_rank(r1).collect::<Vec<_>>();
        let cards2 = self.pool.of_rank(r2).collect::<Vec<_>>();
        for &c1 in &cards1 {
            for &c2 in &cards2 {
                self.insert(c1, c2);
            }
        }
    }

    /// Adds every pocket pair of a rank.
    fn pocket_pairs(&mut self, rank: Rank) {
        self.ranks_pair(rank, rank);
    }

    /// Runs a category search and logs the number of holes it added.
    fn run(&mut self, category: HandCategory, f: impl FnOnce(&mut Self)) {
        let before = self.outs.len();
        f(self);
        trace!("{category}: {} new holes", self.outs.len() - before);
    }

    /// Straight flushes above a threshold, or all of them with no threshold.
    fn straight_flushes(&mut self, above: Option<Rank>) {
        let Some(flush) = flush_potential(self.board) else {
            return;
        };

        let suit = flush.suit;
        for draw in straight_draws(flush.cards.iter().map(|c| c.rank())) {
            if above.is_some_and(|top| draw.top <= top) {
                continue;
            }

            match draw.missing {
                // The board straight flush is shared.
                Missing::None => {}
                Missing::One(r) => self.with_any(Card::new(r, suit)),
                Missing::Two(r1, r2) => {
                    self.insert(Card::new(r1, suit), Card::new(r2, suit));
                }
            }
        }
    }

    fn quads(&mut self) {
        let trips = self.counts.ranks_with(3).collect::<Vec<_>>();
        for rank in trips {
            self.rank_with_any(rank);
        }

        let pairs = self.counts.ranks_with(2).collect::<Vec<_>>();
        for rank in pairs {
            self.pocket_pairs(rank);
        }
    }

    fn full_houses(&mut self) {
        let trips = self.counts.ranks_with(3).collect::<Vec<_>>();
        let pairs = self.counts.ranks_with(2).collect::<Vec<_>>();
        let singles = self.counts.ranks_with(1).collect::<Vec<_>>();

        if !trips.is_empty() {
            if !pairs.is_empty() {
                // The board full house is shared.
                return;
            }

            // Pair a board single, or hold any pocket pair.
            for &rank in &singles {
                self.rank_with_any(rank);
            }

            for rank in Rank::ranks() {
                self.pocket_pairs(rank);
            }
        } else if pairs.len() >= 2 {
            // Trips on either board pair, or a pocket pair on the single.
            for &rank in &pairs {
                self.rank_with_any(rank);
            }

            for &rank in &singles {
                self.pocket_pairs(rank);
            }
        } else if let Some(&pair) = pairs.first() {
            // Trips on the board pair with a pair on a single, or a pocket
            // pair on a single for trips over the board pair.
            for &rank in &singles {
                self.ranks_pair(pair, rank);
                self.pocket_pairs(rank);
            }
        }
    }

    fn flushes(&mut self) {
        let Some(flush) = flush_potential(self.board) else {
            return;
        };

        let suited = self.pool.of_suit(flush.suit).collect::<Vec<_>>();
        match flush.cards.len() {
            3 => {
                for (idx, &c1) in suited.iter().enumerate() {
                    for &c2 in &suited[idx + 1..] {
                        self.insert(c1, c2);
                    }
                }
            }
            4 => {
                for card in suited {
                    self.with_any(card);
                }
            }
            // The board flush is shared.
            _ => {}
        }
    }

    fn straights(&mut self) {
        let ranks = self.counts.ranks().collect::<Vec<_>>();
        for draw in straight_draws(ranks) {
            match draw.missing {
                Missing::None => {}
                Missing::One(r) => self.rank_with_any(r),
                Missing::Two(r1, r2) => self.ranks_pair(r1, r2),
            }
        }
    }

    fn trips(&mut self) {
        let pairs = self.counts.ranks_with(2).collect::<Vec<_>>();
        for rank in pairs {
            self.rank_with_any(rank);
        }

        let singles = self.counts.ranks_with(1).collect::<Vec<_>>();
        for rank in singles {
            self.pocket_pairs(rank);
        }
    }

    fn two_pairs(&mut self) {
        let ranks = self.counts.ranks().collect::<Vec<_>>();

        if self.counts.ranks_with(2).next().is_some() {
            // On a paired board pairing any board card or holding any
            // pocket pair makes a second pair.
            for &rank in &ranks {
                self.rank_with_any(rank);
            }

            for rank in Rank::ranks() {
                self.pocket_pairs(rank);
            }
        } else {
            // On five singles pair two board cards, or hold a pocket pair
            // on a board card.
            for (idx, &r1) in ranks.iter().enumerate() {
                for &r2 in &ranks[idx + 1..] {
                    self.ranks_pair(r1, r2);
                }
                self.pocket_pairs(r1);
            }
        }
    }

    fn pairs(&mut self) {
        let ranks = self.counts.ranks().collect::<Vec<_>>();
        for rank in ranks {
            self.rank_with_any(rank);
        }

        for rank in Rank::ranks() {
            self.pocket_pairs(rank);
        }
    }
}

/// Finds the outs for a validated hole and complete board.
pub(crate) fn better_hands(hole: &[Card], board: &[Card]) -> Outs {
    let own = rank_cards(&[hole, board].concat());
    let counts = RankCounts::new(board);

    if counts.ranks_with(4).next().is_some() {
        debug!("{own}: quads on the board, no outs");
        return Outs::default();
    }

    let mut search = Search {
        board,
        counts,
        pool: UnseenPool::new(hole, board),
        outs: Outs::default(),
    };

    search_categories(&mut search, &own);

    debug!("{own}: {} outs", search.outs.len());
    search.outs
}

fn search_categories(search: &mut Search<'_>, own: &RankedHand) {
    use HandCategory::*;

    let category = own.category();

    if category < RoyalFlush {
        let above = (category == StraightFlush).then_some(own.tie_break());
        search.run(StraightFlush, |s| s.straight_flushes(above));
    }

    if category < Quads {
        search.run(Quads, Search::quads);
    }

    if category < FullHouse {
        search.run(FullHouse, Search::full_houses);
    }

    if category < Flush {
        search.run(Flush, Search::flushes);
    }

    if category < Straight {
        search.run(Straight, Search::straights);
    }

    if category < Trips {
        search.run(Trips, Search::trips);
    }

    if category < TwoPair {
        search.run(TwoPair, Search::two_pairs);
    }

    if category < Pair {
        search.run(Pair, Search::pairs);
    }
}
