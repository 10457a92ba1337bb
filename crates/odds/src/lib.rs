// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Redraw five cards draw improvement odds.
//!
//! For a five cards hand this crate computes the exact probability that
//! discarding some cards and drawing replacements makes a stronger hand, for
//! each of the 31 sets of cards that can be retained, and picks the set with
//! the best odds:
//!
//! ```
//! # use redraw_odds::*;
//! let hand = "7S 7H 2D 4C 3H".parse::<Hand>().unwrap();
//! assert_eq!(classify(&hand), Category::OnePair);
//!
//! let selection = best_retained(&hand);
//! let best = selection.best.unwrap();
//! assert!(selection.odds.better > 0);
//! assert!(best.len() <= 4);
//! ```
//!
//! The counts are computed with binomial closed forms over the cards that are
//! not retained, the discarded cards are shuffled back into the deck before
//! the redraw, see [total_ways] and [better_ways].
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use thiserror::Error;

mod category;
pub use category::{Category, classify};

mod odds;
pub use odds::{
    Evaluation, Odds, Selection, best_retained, evaluate_all, improvement_odds, is_improvement,
    probability_of_improvement, total_draws,
};

mod retained;
pub use retained::{Retained, retained_subsets};

mod signature;
pub use signature::Signature;

mod ways;
pub use ways::{better_ways, total_ways};

// Reexport cards types.
pub use redraw_cards::{Card, Deck, Hand, Rank, Suit};

/// Odds computation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid cards or hands.
    #[error(transparent)]
    Cards(#[from] redraw_cards::Error),
    /// The retained cards rank multiplicities have no counting formula.
    #[error(
        "no {category} count for rank multiplicities {multiplicities:?} {}",
        describe_retained(.retained, .hand)
    )]
    UnhandledSignature {
        /// The category being counted.
        category: Category,
        /// The sorted rank multiplicities of the retained cards.
        multiplicities: Vec<u8>,
        /// The retained cards.
        retained: Vec<Card>,
        /// The hand the cards were retained from, if known.
        hand: Option<Hand>,
    },
}

impl Error {
    /// Attaches the hand to an unhandled signature error.
    pub(crate) fn in_hand(self, hand: &Hand) -> Self {
        match self {
            Error::UnhandledSignature {
                category,
                multiplicities,
                retained,
                ..
            } => Error::UnhandledSignature {
                category,
                multiplicities,
                retained,
                hand: Some(*hand),
            },
            err => err,
        }
    }
}

fn describe_retained(retained: &[Card], hand: &Option<Hand>) -> String {
    let cards = retained
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");

    match hand {
        Some(hand) => format!("keeping [{cards}] of {hand}"),
        None => format!("keeping [{cards}]"),
    }
}
