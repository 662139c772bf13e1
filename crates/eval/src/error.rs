// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Input validation errors.
use ahash::AHashSet;
use thiserror::Error;

use crate::Card;

/// Error returned when the cards passed to an evaluation are malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// The hole doesn't have exactly two cards.
    #[error("expected 2 hole cards, got {0}")]
    HoleCards(usize),
    /// The board doesn't have exactly five cards.
    #[error("expected 5 board cards, got {0}")]
    BoardCards(usize),
    /// The hand doesn't have exactly seven cards.
    #[error("expected 7 cards, got {0}")]
    CardCount(usize),
    /// The same card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

/// Checks that all cards are different.
pub(crate) fn check_distinct<'a>(
    cards: impl IntoIterator<Item = &'a Card>,
) -> Result<(), InvalidInput> {
    let mut seen = AHashSet::with_capacity(7);
    for card in cards {
        if !seen.insert(*card) {
            return Err(InvalidInput::DuplicateCard(*card));
        }
    }

    Ok(())
}

/// Checks a two cards hole and a five cards board.
pub(crate) fn check_deal(hole: &[Card], board: &[Card]) -> Result<(), InvalidInput> {
    if hole.len() != 2 {
        return Err(InvalidInput::HoleCards(hole.len()));
    }

    if board.len() != 5 {
        return Err(InvalidInput::BoardCards(board.len()));
    }

    check_distinct(hole.iter().chain(board))
}
