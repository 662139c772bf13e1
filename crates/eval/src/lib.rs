// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Nutcheck Poker hand evaluator.
//!
//! Evaluates a two cards hole with a complete five cards board, and once the
//! board is complete finds all the holes an opponent could hold to beat it.
//!
//! To evaluate a hand use [evaluate_hand] to get a [RankedHand] with its
//! category, its best five cards, and the rank that breaks ties:
//!
//! ```
//! # use nutcheck_eval::*;
//! let hole = [Card::new(Rank::Ten, Suit::Clubs), Card::new(Rank::Ten, Suit::Spades)];
//! let board = ["3D", "TH", "JC", "QH", "KD"].map(|c| c.parse::<Card>().unwrap());
//!
//! let hand = evaluate_hand(&hole, &board).unwrap();
//! assert_eq!(hand.category(), HandCategory::Trips);
//! assert_eq!(hand.tie_break(), Rank::Ten);
//! ```
//!
//! and [compute_outs] to get the [Outs] for the same hand:
//!
//! ```
//! # use nutcheck_eval::*;
//! # let hole = [Card::new(Rank::Ten, Suit::Clubs), Card::new(Rank::Ten, Suit::Spades)];
//! # let board = ["3D", "TH", "JC", "QH", "KD"].map(|c| c.parse::<Card>().unwrap());
//! let outs = compute_outs(&hole, &board).unwrap();
//!
//! // An ace makes a broadway straight.
//! let ace = Card::new(Rank::Ace, Suit::Spades);
//! let deuce = Card::new(Rank::Deuce, Suit::Clubs);
//! assert!(outs.contains(ace, deuce));
//! ```
//!
//! Both operations are pure functions that validate their input and return an
//! [InvalidInput] error for a wrong number of cards or a repeated card.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod error;
pub mod eval;
pub mod outs;
pub mod straight;
pub mod texture;

pub use error::InvalidInput;
pub use eval::{HandCategory, RankedHand, choose_highest, evaluate_hand, evaluate7};
pub use outs::{CardPair, Outs, compute_outs};

// Reexport cards types.
pub use nutcheck_cards::{Card, Deck, Rank, Suit};
