// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Redraw cards types.
//!
//! This crate define types to create cards and hands:
//!
//! ```
//! # use redraw_cards::{Card, Hand, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = "KD".parse::<Card>().unwrap();
//! let hand = "AH KD QC JS TH".parse::<Hand>().unwrap();
//! assert_eq!(hand.cards()[..2], [ah, kd]);
//! ```
//!
//! and a [Deck] type for shuffling, dealing, redrawing and iterating cards in
//! the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use redraw_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! The **`parallel`** feature enables parallel sampling and iteration with
//! a given number of tasks, the closure `task_id` can be used to store per
//! task data to reduce contention:
//!
//! ```
//! # #[cfg(feature = "parallel")]
//! # fn par_for_each() {
//! # use std::sync::atomic;
//! # use redraw_cards::Deck;
//! let counter = atomic::AtomicU64::new(0);
//! Deck::default().par_for_each(4, 5, |task_id, hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter.fetch_add(1, atomic::Ordering::Relaxed);
//! });
//! assert_eq!(counter.load(atomic::Ordering::Relaxed), 2_598_960);
//! # }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use thiserror::Error;

mod card;
pub use card::{Card, Rank, Suit, is_same_suit};

mod deck;
pub use deck::Deck;

mod hand;
pub use hand::{Hand, write_cards};

mod nck;
pub use nck::nck;

/// Cards and hands construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The suit or the rank of a card is out of range.
    #[error("invalid card: {0}")]
    InvalidCard(String),
    /// A hand is not made of exactly five distinct cards.
    #[error("invalid hand: {0}")]
    InvalidHand(String),
}
