// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand categories and the five cards classifier.
//!
//! A five cards hand belongs to exactly one of ten categories, each described
//! by a predicate over the hand cards. The predicates live in a table indexed
//! by [Category] together with the counting functions for that category, and
//! [classify] scans the table for the first predicate that holds.
//!
//! Aces are always high, a 5-4-3-2-A hand is not a straight.
use serde::{Deserialize, Serialize};
use std::fmt;

use redraw_cards::{Card, Hand, is_same_suit};

use crate::{signature::RankCounts, ways::RULES};

/// A poker hand category, ordered from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Five distinct ranks, no straight and no flush.
    HighCard = 0,
    /// Two cards of one rank.
    OnePair,
    /// Two cards of one rank and two of another.
    TwoPair,
    /// Three cards of one rank and two kickers.
    ThreeOfAKind,
    /// Five consecutive ranks not all of the same suit.
    Straight,
    /// Five cards of the same suit that are not a straight.
    Flush,
    /// Three cards of one rank and a pair of another.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// A straight of the same suit below the royal flush.
    StraightFlush,
    /// Ten to ace of the same suit.
    RoyalFlush,
}

impl Category {
    /// All categories from the weakest to the strongest.
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    /// This category followed by all the stronger ones.
    pub fn and_above(self) -> &'static [Category] {
        &Self::ALL[self as usize..]
    }

    /// The categories stronger than this one.
    pub fn above(self) -> &'static [Category] {
        &Self::ALL[self as usize + 1..]
    }

    /// Checks if the given cards are a five cards hand of this category.
    pub fn matches(self, cards: &[Card]) -> bool {
        (RULES[self as usize].matches)(cards)
    }

    /// The category name.
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the category of a hand.
pub fn classify(hand: &Hand) -> Category {
    let cards = hand.cards();
    let rule = RULES.iter().find(|rule| (rule.matches)(cards));
    debug_assert!(rule.is_some(), "no category for {hand}");

    rule.map_or(Category::HighCard, |rule| rule.category)
}

/// Bit mask of the ranks `start..start + 5`.
#[inline]
pub(crate) const fn window(start: u8) -> u16 {
    0b11111 << start
}

/// Straight windows start from a six high straight up to the ace high one.
pub(crate) const WINDOW_STARTS: std::ops::RangeInclusive<u8> = 2..=10;

/// The start of the royal window.
pub(crate) const ROYAL_START: u8 = 10;

/// Returns the start of the window made by the ranks in `mask` if any.
fn window_start(mask: u16) -> Option<u8> {
    WINDOW_STARTS.into_iter().find(|&s| mask == window(s))
}

/// Five cards with five distinct ranks, returns their rank mask.
fn distinct_ranks(cards: &[Card]) -> Option<u16> {
    if cards.len() != Hand::SIZE {
        return None;
    }

    let mask = RankCounts::of(cards).mask();
    (mask.count_ones() as usize == Hand::SIZE).then_some(mask)
}

/// Checks the sorted rank multiplicities of a five cards hand.
fn has_multiplicities(cards: &[Card], expected: &[u8]) -> bool {
    cards.len() == Hand::SIZE && RankCounts::of(cards).multiplicities() == expected
}

pub(crate) fn is_royal_flush(cards: &[Card]) -> bool {
    distinct_ranks(cards).is_some_and(|mask| mask == window(ROYAL_START)) && is_same_suit(cards)
}

pub(crate) fn is_straight_flush(cards: &[Card]) -> bool {
    distinct_ranks(cards)
        .and_then(window_start)
        .is_some_and(|s| s < ROYAL_START)
        && is_same_suit(cards)
}

pub(crate) fn is_four_of_a_kind(cards: &[Card]) -> bool {
    has_multiplicities(cards, &[1, 4])
}

pub(crate) fn is_full_house(cards: &[Card]) -> bool {
    has_multiplicities(cards, &[2, 3])
}

pub(crate) fn is_flush(cards: &[Card]) -> bool {
    distinct_ranks(cards).is_some_and(|mask| window_start(mask).is_none()) && is_same_suit(cards)
}

pub(crate) fn is_straight(cards: &[Card]) -> bool {
    distinct_ranks(cards).is_some_and(|mask| window_start(mask).is_some()) && !is_same_suit(cards)
}

pub(crate) fn is_three_of_a_kind(cards: &[Card]) -> bool {
    has_multiplicities(cards, &[1, 1, 3])
}

pub(crate) fn is_two_pair(cards: &[Card]) -> bool {
    has_multiplicities(cards, &[1, 2, 2])
}

pub(crate) fn is_one_pair(cards: &[Card]) -> bool {
    has_multiplicities(cards, &[1, 1, 1, 2])
}

pub(crate) fn is_high_card(cards: &[Card]) -> bool {
    distinct_ranks(cards).is_some_and(|mask| window_start(mask).is_none()) && !is_same_suit(cards)
}
