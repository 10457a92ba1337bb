// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A five cards poker hand.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{Card, Error};

/// Five distinct cards.
///
/// The cards keep the order they were dealt or parsed in, the hand is never
/// mutated after construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand([Card; Hand::SIZE]);

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from exactly five distinct cards.
    pub fn new(cards: &[Card]) -> Result<Hand, Error> {
        let cards: [Card; Hand::SIZE] = cards.try_into().map_err(|_| {
            Error::InvalidHand(format!(
                "a hand needs {} cards, got {}",
                Hand::SIZE,
                cards.len()
            ))
        })?;

        for (idx, card) in cards.iter().enumerate() {
            if cards[idx + 1..].contains(card) {
                return Err(Error::InvalidHand(format!("duplicate card {card}")));
            }
        }

        Ok(Hand(cards))
    }

    /// The hand cards.
    pub fn cards(&self) -> &[Card; Hand::SIZE] {
        &self.0
    }

    /// Returns the hand after a redraw, the kept cards come first followed by
    /// the drawn ones.
    pub fn redraw(kept: &[Card], drawn: &[Card]) -> Result<Hand, Error> {
        let cards = kept.iter().chain(drawn).copied().collect::<Vec<_>>();
        Hand::new(&cards)
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = Error;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Hand::new(cards)
    }
}

impl FromStr for Hand {
    type Err = Error;

    /// Parses cards separated by spaces or commas, e.g. `"AS KS QS JS TS"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(str::parse::<Card>)
            .collect::<Result<Vec<_>, _>>()?;
        Hand::new(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cards(f, &self.0)
    }
}

impl fmt::Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hand(")?;
        write_cards(f, &self.0)?;
        write!(f, ")")
    }
}

/// Writes space separated cards.
pub fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    for (idx, card) in cards.iter().enumerate() {
        if idx > 0 {
            write!(f, " ")?;
        }
        write!(f, "{card}")?;
    }

    Ok(())
}
