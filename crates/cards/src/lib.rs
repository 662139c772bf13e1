// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Nutcheck cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use nutcheck_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert!(ah > kd);
//! ```
//!
//! an ace is the highest rank but it also plays as the lowest card in a
//! five-high straight, use [Rank::value] and [Rank::low_value] to get both
//! values:
//!
//! ```
//! # use nutcheck_cards::Rank;
//! assert_eq!(Rank::Ace.value(), 14);
//! assert_eq!(Rank::Ace.low_value(), 1);
//! ```
//!
//! and a [Deck] type with the 52 cards universe for filtering and iterating
//! cards in the deck.
//!
//! For example to iterate through all 2 cards hands that don't use a card
//! already dealt:
//!
//! ```
//! # use nutcheck_cards::{Card, Deck, Rank, Suit};
//! let mut deck = Deck::default();
//! deck.remove(Card::new(Rank::Ace, Suit::Spades));
//!
//! let mut counter = 0;
//! deck.for_each(2, |hand| {
//!     assert_eq!(hand.len(), 2);
//!     counter += 1;
//! });
//! assert_eq!(counter, 1_275);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};
