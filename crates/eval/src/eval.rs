// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Seven cards hand evaluator.
//!
//! The evaluator classifies a two cards hole plus a five cards board into a
//! [HandCategory] and extracts the five cards that make the hand, together
//! with the rank that decides the hand strength within its category.
//!
//! Categories are checked from the strongest down, the first match wins:
//!
//! 1. flush family (royal flush, straight flush, flush)
//! 2. four of a kind
//! 3. full house
//! 4. straight
//! 5. three of a kind, two pair, pair and high card
//!
//! Flushes are checked first as with seven cards a hand with a flush can't
//! also have a full house or a four of a kind.
use serde::Serialize;
use std::fmt;

use crate::{
    Card, Rank, Suit,
    error::{InvalidInput, check_deal, check_distinct},
    straight::{is_straight, straight_values},
    texture::RankCounts,
};

/// Hand categories, strictly increasing in strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HandCategory {
    /// No pair.
    HighCard = 1,
    /// One pair.
    Pair,
    /// Two pairs.
    TwoPair,
    /// Three cards of the same rank.
    Trips,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    Quads,
    /// Five consecutive ranks of the same suit.
    StraightFlush,
    /// An ace high straight flush.
    RoyalFlush,
}

impl HandCategory {
    /// All categories from the weakest to the strongest.
    pub const ALL: [HandCategory; 10] = [
        HandCategory::HighCard,
        HandCategory::Pair,
        HandCategory::TwoPair,
        HandCategory::Trips,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::Quads,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "high card",
            HandCategory::Pair => "pair",
            HandCategory::TwoPair => "two pair",
            HandCategory::Trips => "three of a kind",
            HandCategory::Straight => "straight",
            HandCategory::Flush => "flush",
            HandCategory::FullHouse => "full house",
            HandCategory::Quads => "four of a kind",
            HandCategory::StraightFlush => "straight flush",
            HandCategory::RoyalFlush => "royal flush",
        };

        write!(f, "{name}")
    }
}

/// The best five cards hand out of seven cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedHand {
    category: HandCategory,
    best_five: [Card; 5],
    tie_break: Rank,
}

impl RankedHand {
    fn new(category: HandCategory, mut cards: Vec<Card>, tie_break: Rank) -> Self {
        debug_assert_eq!(cards.len(), 5, "{category} with {cards:?}");

        // In the wheel the ace plays as the lowest card.
        let wheel = matches!(
            category,
            HandCategory::Straight | HandCategory::StraightFlush
        ) && tie_break == Rank::Five;

        cards.sort_by_key(|c| {
            let value = if wheel {
                c.rank().low_value()
            } else {
                c.rank().value()
            };
            (value, c.suit())
        });

        let mut best_five = [Card::new(Rank::Deuce, Suit::Clubs); 5];
        for (slot, card) in best_five.iter_mut().zip(cards) {
            *slot = card;
        }

        Self {
            category,
            best_five,
            tie_break,
        }
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The five cards that make the hand in ascending rank order.
    pub fn best_five(&self) -> &[Card; 5] {
        &self.best_five
    }

    /// The rank that first breaks a tie between two hands of the same category.
    ///
    /// This is the quads rank, the trips rank in a full house or three of a
    /// kind, the top card of a straight, the highest pair, or the highest card.
    /// Comparing kickers when the tie break is the same is left to the caller.
    pub fn tie_break(&self) -> Rank {
        self.tie_break
    }
}

impl fmt::Display for RankedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.category)?;
        for (i, card) in self.best_five.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}

/// Evaluates a seven cards hand.
pub fn evaluate7(cards: &[Card]) -> Result<RankedHand, InvalidInput> {
    if cards.len() != 7 {
        return Err(InvalidInput::CardCount(cards.len()));
    }

    check_distinct(cards)?;
    Ok(rank_cards(cards))
}

/// Evaluates a two cards hole with a five cards board.
pub fn evaluate_hand(hole: &[Card], board: &[Card]) -> Result<RankedHand, InvalidInput> {
    check_deal(hole, board)?;
    Ok(rank_cards(&[hole, board].concat()))
}

/// Returns the `n` highest cards, highest first.
///
/// Cards with the same rank are interchangeable, ties are broken by suit.
pub fn choose_highest(cards: impl IntoIterator<Item = Card>, n: usize) -> Vec<Card> {
    let mut cards = cards.into_iter().collect::<Vec<_>>();
    cards.sort_unstable_by(|a, b| b.cmp(a));
    cards.truncate(n);
    cards
}

/// Ranks at least five distinct cards, callers must validate the cards.
pub(crate) fn rank_cards(cards: &[Card]) -> RankedHand {
    if let Some(hand) = flush_family(cards) {
        return hand;
    }

    let counts = RankCounts::new(cards);

    if let Some(quads) = counts.ranks_with(4).next() {
        let mut best = with_rank(cards, quads).collect::<Vec<_>>();
        best.extend(choose_highest(without_ranks(cards, &[quads]), 1));
        return RankedHand::new(HandCategory::Quads, best, quads);
    }

    let trips = counts.ranks_with(3).collect::<Vec<_>>();
    let pairs = counts.ranks_with(2).collect::<Vec<_>>();

    if let Some(&trip) = trips.first() {
        // With two trips the lower one plays as the pair.
        let pair = pairs.first().into_iter().chain(trips.get(1)).max();
        if let Some(&pair) = pair {
            let mut best = with_rank(cards, trip).collect::<Vec<_>>();
            best.extend(with_rank(cards, pair).take(2));
            return RankedHand::new(HandCategory::FullHouse, best, trip);
        }
    }

    if let Some((top, best)) = straight_cards(cards) {
        return RankedHand::new(HandCategory::Straight, best, top);
    }

    if let Some(&trip) = trips.first() {
        let mut best = with_rank(cards, trip).collect::<Vec<_>>();
        best.extend(choose_highest(without_ranks(cards, &[trip]), 2));
        return RankedHand::new(HandCategory::Trips, best, trip);
    }

    if let &[high, low, ..] = pairs.as_slice() {
        let mut best = with_rank(cards, high)
            .chain(with_rank(cards, low))
            .collect::<Vec<_>>();
        best.extend(choose_highest(without_ranks(cards, &[high, low]), 1));
        return RankedHand::new(HandCategory::TwoPair, best, high);
    }

    if let Some(&pair) = pairs.first() {
        let mut best = with_rank(cards, pair).collect::<Vec<_>>();
        best.extend(choose_highest(without_ranks(cards, &[pair]), 3));
        return RankedHand::new(HandCategory::Pair, best, pair);
    }

    let best = choose_highest(cards.iter().copied(), 5);
    let high = best.first().map(|c| c.rank()).unwrap_or(Rank::Deuce);
    RankedHand::new(HandCategory::HighCard, best, high)
}

/// Checks for a royal flush, straight flush, or flush.
fn flush_family(cards: &[Card]) -> Option<RankedHand> {
    let suited = Suit::suits()
        .map(|suit| {
            cards
                .iter()
                .copied()
                .filter(|c| c.suit() == suit)
                .collect::<Vec<_>>()
        })
        .find(|suited| suited.len() >= 5)?;

    if let Some((top, best)) = straight_cards(&suited) {
        let category = if top == Rank::Ace {
            HandCategory::RoyalFlush
        } else {
            HandCategory::StraightFlush
        };
        return Some(RankedHand::new(category, best, top));
    }

    let best = choose_highest(suited, 5);
    let high = best.first()?.rank();
    Some(RankedHand::new(HandCategory::Flush, best, high))
}

/// Finds the highest straight and one card for each of its ranks.
fn straight_cards(cards: &[Card]) -> Option<(Rank, Vec<Card>)> {
    let values = is_straight(cards.iter().flat_map(|c| straight_values(c.rank())))?;
    let top = Rank::from_value(values[0])?;
    let best = values
        .iter()
        .map(|&v| {
            let rank = Rank::from_value(v)?;
            cards.iter().copied().find(|c| c.rank() == rank)
        })
        .collect::<Option<Vec<_>>>()?;
    Some((top, best))
}

fn with_rank(cards: &[Card], rank: Rank) -> impl Iterator<Item = Card> + '_ {
    cards.iter().copied().filter(move |c| c.rank() == rank)
}

fn without_ranks<'a>(cards: &'a [Card], ranks: &'a [Rank]) -> impl Iterator<Item = Card> + 'a {
    cards.iter().copied().filter(move |c| !ranks.contains(&c.rank()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Deck;
    use ahash::HashSet;
    use rand::prelude::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn eval(hole: &str, board: &str) -> RankedHand {
        evaluate_hand(&cards(hole), &cards(board)).unwrap()
    }

    fn ranks(hand: &RankedHand) -> Vec<Rank> {
        hand.best_five().iter().map(|c| c.rank()).collect()
    }

    #[test]
    fn trips_with_kickers() {
        let hand = eval("TC TS", "3D TH JC QH KD");
        assert_eq!(hand.category(), HandCategory::Trips);
        assert_eq!(hand.tie_break(), Rank::Ten);
        assert_eq!(
            hand.best_five(),
            &[
                Card::new(Rank::Ten, Suit::Clubs),
                Card::new(Rank::Ten, Suit::Hearts),
                Card::new(Rank::Ten, Suit::Spades),
                Card::new(Rank::Queen, Suit::Hearts),
                Card::new(Rank::King, Suit::Diamonds),
            ]
        );
    }

    #[test]
    fn broadway_straight_over_pair() {
        // The board pair of tens doesn't matter, nine to king is a straight.
        let hand = eval("JC 9H", "TD 8H TC QH KH");
        assert_eq!(hand.category(), HandCategory::Straight);
        assert_eq!(hand.tie_break(), Rank::King);
        assert_eq!(
            ranks(&hand),
            vec![Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King]
        );
    }

    #[test]
    fn pair_with_kickers() {
        let hand = eval("JC 2H", "TD 8H TC QH KH");
        assert_eq!(hand.category(), HandCategory::Pair);
        assert_eq!(hand.tie_break(), Rank::Ten);
        assert_eq!(
            ranks(&hand),
            vec![Rank::Ten, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King]
        );
    }

    #[test]
    fn high_card() {
        let hand = eval("2C 7D", "9S JH 4C KD AS");
        assert_eq!(hand.category(), HandCategory::HighCard);
        assert_eq!(hand.tie_break(), Rank::Ace);
        assert_eq!(
            ranks(&hand),
            vec![Rank::Seven, Rank::Nine, Rank::Jack, Rank::King, Rank::Ace]
        );
    }

    #[test]
    fn two_pair_from_three_pairs() {
        let hand = eval("4C 4D", "9S 9H KC KD 2S");
        assert_eq!(hand.category(), HandCategory::TwoPair);
        assert_eq!(hand.tie_break(), Rank::King);
        assert_eq!(
            ranks(&hand),
            vec![Rank::Four, Rank::Nine, Rank::Nine, Rank::King, Rank::King]
        );
    }

    #[test]
    fn wheel_straight() {
        let hand = eval("AC 2D", "3S 4H 5C KD KS");
        assert_eq!(hand.category(), HandCategory::Straight);
        assert_eq!(hand.tie_break(), Rank::Five);
        assert_eq!(
            ranks(&hand),
            vec![Rank::Ace, Rank::Deuce, Rank::Trey, Rank::Four, Rank::Five]
        );
    }

    #[test]
    fn six_high_over_wheel() {
        let hand = eval("AC 2D", "3S 4H 5C 6D KS");
        assert_eq!(hand.category(), HandCategory::Straight);
        assert_eq!(hand.tie_break(), Rank::Six);
    }

    #[test]
    fn flush_with_ace() {
        let hand = eval("AH 2H", "9H JH 4H KD 3S");
        assert_eq!(hand.category(), HandCategory::Flush);
        assert_eq!(hand.tie_break(), Rank::Ace);
        assert_eq!(
            ranks(&hand),
            vec![Rank::Deuce, Rank::Four, Rank::Nine, Rank::Jack, Rank::Ace]
        );
    }

    #[test]
    fn flush_picks_five_highest() {
        let hand = eval("2S 3S", "9S JS 4S KS 3D");
        assert_eq!(hand.category(), HandCategory::Flush);
        assert_eq!(
            ranks(&hand),
            vec![Rank::Trey, Rank::Four, Rank::Nine, Rank::Jack, Rank::King]
        );
    }

    #[test]
    fn flush_beats_straight() {
        let hand = eval("6D 7D", "8D 9C TD 2D JS");
        assert_eq!(hand.category(), HandCategory::Flush);
    }

    #[test]
    fn straight_flushes() {
        let hand = eval("AS KS", "QS JS TS 9S 2D");
        assert_eq!(hand.category(), HandCategory::RoyalFlush);
        assert_eq!(hand.tie_break(), Rank::Ace);

        let hand = eval("9S KS", "QS JS TS 8S 2D");
        assert_eq!(hand.category(), HandCategory::StraightFlush);
        assert_eq!(hand.tie_break(), Rank::King);

        let hand = eval("AD 2D", "3D 4D 5D 6C 7C");
        assert_eq!(hand.category(), HandCategory::StraightFlush);
        assert_eq!(hand.tie_break(), Rank::Five);
        assert_eq!(hand.best_five()[0], Card::new(Rank::Ace, Suit::Diamonds));
    }

    #[test]
    fn straight_flush_needs_same_suit() {
        // Straight in mixed suits and a flush without the straight.
        let hand = eval("5H 6C", "7H 8H 9H 2H KS");
        assert_eq!(hand.category(), HandCategory::Flush);
        assert_eq!(hand.tie_break(), Rank::Nine);
    }

    #[test]
    fn quads_with_kicker() {
        let hand = eval("9C 9D", "9H 9S AC KD KS");
        assert_eq!(hand.category(), HandCategory::Quads);
        assert_eq!(hand.tie_break(), Rank::Nine);
        assert_eq!(
            hand.best_five(),
            &[
                Card::new(Rank::Nine, Suit::Clubs),
                Card::new(Rank::Nine, Suit::Diamonds),
                Card::new(Rank::Nine, Suit::Hearts),
                Card::new(Rank::Nine, Suit::Spades),
                Card::new(Rank::Ace, Suit::Clubs),
            ]
        );
    }

    #[test]
    fn full_houses() {
        let hand = eval("7C 7D", "7H KS KD 2C 2S");
        assert_eq!(hand.category(), HandCategory::FullHouse);
        assert_eq!(hand.tie_break(), Rank::Seven);
        assert_eq!(
            ranks(&hand),
            vec![Rank::Seven, Rank::Seven, Rank::Seven, Rank::King, Rank::King]
        );

        // Two trips, the lower trips plays as the pair.
        let hand = eval("7C 7D", "7H AS AD AC 2S");
        assert_eq!(hand.category(), HandCategory::FullHouse);
        assert_eq!(hand.tie_break(), Rank::Ace);
        assert_eq!(
            ranks(&hand),
            vec![Rank::Seven, Rank::Seven, Rank::Ace, Rank::Ace, Rank::Ace]
        );
    }

    #[test]
    fn invalid_input() {
        assert_eq!(
            evaluate7(&cards("AS KS QS")),
            Err(InvalidInput::CardCount(3))
        );
        assert_eq!(
            evaluate7(&cards("AS KS QS JS TS 9S AS")),
            Err(InvalidInput::DuplicateCard(Card::new(Rank::Ace, Suit::Spades)))
        );
        assert_eq!(
            evaluate_hand(&cards("AS"), &cards("KS QS JS TS 9S")),
            Err(InvalidInput::HoleCards(1))
        );
        assert_eq!(
            evaluate_hand(&cards("AS KD"), &cards("KS QS JS TS")),
            Err(InvalidInput::BoardCards(4))
        );
    }

    #[test]
    fn evaluate7_matches_evaluate_hand() {
        let hole = cards("AC 2D");
        let board = cards("3S 4H 5C KD KS");
        let all = [hole.as_slice(), board.as_slice()].concat();
        assert_eq!(evaluate7(&all), evaluate_hand(&hole, &board));
    }

    #[test]
    fn category_order() {
        for w in HandCategory::ALL.windows(2) {
            assert!(w[0] < w[1]);
        }
        assert!(HandCategory::Quads > HandCategory::FullHouse);
        assert!(HandCategory::RoyalFlush > HandCategory::Quads);
        assert!(HandCategory::StraightFlush > HandCategory::Quads);
        assert_eq!(HandCategory::RoyalFlush as u8, 10);
        assert_eq!(HandCategory::HighCard as u8, 1);
    }

    #[test]
    fn display() {
        let hand = eval("TC TS", "3D TH JC QH KD");
        assert_eq!(hand.to_string(), "three of a kind [TC TH TS QH KD]");
    }

    #[test]
    fn choose_highest_cards() {
        let best = choose_highest(cards("2C AH 9D KS 9S"), 3);
        assert_eq!(best, cards("AH KS 9S"));
        assert!(choose_highest(Vec::new(), 2).is_empty());
    }

    #[test]
    fn random_hands_invariants() {
        let mut rng = StdRng::seed_from_u64(101);
        let mut deck = Deck::default().into_iter().collect::<Vec<_>>();
        let mut seen = HashSet::default();

        for _ in 0..20_000 {
            deck.shuffle(&mut rng);
            let hand = evaluate7(&deck[..7]).unwrap();

            // Five distinct cards taken from the hand.
            let best = hand.best_five();
            let unique = best.iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), 5, "{hand}");
            assert!(best.iter().all(|c| deck[..7].contains(c)), "{hand}");

            // Idempotent.
            assert_eq!(evaluate7(&deck[..7]).unwrap(), hand);

            // The category is the same on the best five alone.
            let five = rank_cards(best);
            assert_eq!(five.category(), hand.category(), "{hand}");
            assert_eq!(five.tie_break(), hand.tie_break(), "{hand}");

            seen.insert(hand.category());
        }

        // Flushes are rare but common enough for this sample size.
        assert!(seen.contains(&HandCategory::Flush));
        assert!(seen.contains(&HandCategory::FullHouse));
        assert!(seen.contains(&HandCategory::Straight));
    }
}
