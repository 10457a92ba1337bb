// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Counting the completions of retained cards.
//!
//! The cards that are not retained go back to the deck before the redraw, so
//! the `k` missing cards of a hand are drawn from the `47 + k` cards that were
//! not kept, with `4 - n` cards left for a rank that was kept `n` times.
//!
//! [total_ways] counts the completions that land in a category using closed
//! forms keyed by the [Signature] of the retained cards. [better_ways] counts
//! the completions that stay in the hand category and beat the hand, using
//! straight windows or the rank profiles of the category.
use redraw_cards::{Card, Hand, nck};

use crate::{
    Error,
    category::{self, Category, classify, window},
    signature::{RankCounts, Signature},
};

mod better;
pub(crate) mod profile;
mod total;

/// The counting functions of a category.
pub(crate) struct Rule {
    /// The category this rule is for.
    pub category: Category,
    /// Checks if five cards are in the category.
    pub matches: fn(&[Card]) -> bool,
    /// Completions of the retained cards into the category.
    pub total: fn(&Kept<'_>) -> Result<u64, Error>,
    /// Completions of the retained cards that beat a hand of the category.
    pub better: fn(&Kept<'_>, &[Card]) -> u64,
}

/// Rules indexed by category.
pub(crate) static RULES: [Rule; 10] = [
    Rule {
        category: Category::HighCard,
        matches: category::is_high_card,
        total: total::high_card,
        better: better::high_card,
    },
    Rule {
        category: Category::OnePair,
        matches: category::is_one_pair,
        total: total::one_pair,
        better: better::one_pair,
    },
    Rule {
        category: Category::TwoPair,
        matches: category::is_two_pair,
        total: total::two_pair,
        better: better::two_pair,
    },
    Rule {
        category: Category::ThreeOfAKind,
        matches: category::is_three_of_a_kind,
        total: total::three_of_a_kind,
        better: better::three_of_a_kind,
    },
    Rule {
        category: Category::Straight,
        matches: category::is_straight,
        total: total::straight,
        better: better::straight,
    },
    Rule {
        category: Category::Flush,
        matches: category::is_flush,
        total: total::flush,
        better: better::flush,
    },
    Rule {
        category: Category::FullHouse,
        matches: category::is_full_house,
        total: total::full_house,
        better: better::full_house,
    },
    Rule {
        category: Category::FourOfAKind,
        matches: category::is_four_of_a_kind,
        total: total::four_of_a_kind,
        better: better::four_of_a_kind,
    },
    Rule {
        category: Category::StraightFlush,
        matches: category::is_straight_flush,
        total: total::straight_flush,
        better: better::straight_flush,
    },
    Rule {
        category: Category::RoyalFlush,
        matches: category::is_royal_flush,
        total: total::royal_flush,
        better: better::royal_flush,
    },
];

/// Counts the ways to complete the retained cards into a five cards hand of
/// the given category.
///
/// Returns an error if the retained cards are not distinct or if there are
/// more than four of them.
///
/// ```
/// # use redraw_odds::{Category, total_ways};
/// let ways = total_ways(Category::FullHouse, &[]).unwrap();
/// assert_eq!(ways, 3744);
/// ```
pub fn total_ways(category: Category, retained: &[Card]) -> Result<u64, Error> {
    let kept = Kept::new(retained)?;
    total(category, &kept)
}

/// Counts the ways to complete the retained cards into a hand of the given
/// category that beats `hand`.
///
/// Returns 0 if `hand` is not of the given category, a stronger category is
/// counted by [total_ways]. Returns 0 if the retained cards are not distinct
/// cards of `hand`.
pub fn better_ways(category: Category, hand: &Hand, retained: &[Card]) -> u64 {
    if classify(hand) != category || retained.iter().any(|c| !hand.cards().contains(c)) {
        return 0;
    }

    match Kept::new(retained) {
        Ok(kept) => better(category, &kept, hand.cards()),
        Err(_) => 0,
    }
}

pub(crate) fn total(category: Category, kept: &Kept<'_>) -> Result<u64, Error> {
    let rule = &RULES[category as usize];
    (rule.total)(kept)
}

pub(crate) fn better(category: Category, kept: &Kept<'_>, hand: &[Card]) -> u64 {
    let rule = &RULES[category as usize];
    (rule.better)(kept, hand)
}

/// The suits a flush completion can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Suits {
    /// No cards retained, any suit.
    Open,
    /// All retained cards have the same suit.
    Suited,
    /// Retained cards of different suits, no flush.
    Mixed,
}

/// The retained cards with their rank counts and suits.
#[derive(Debug, Clone)]
pub(crate) struct Kept<'a> {
    cards: &'a [Card],
    counts: RankCounts,
    mask: u16,
    suits: Suits,
}

impl<'a> Kept<'a> {
    /// Creates a kept set checking that cards are distinct.
    pub fn new(cards: &'a [Card]) -> Result<Self, Error> {
        let mut seen = 0u64;
        for card in cards {
            let bit = 1u64 << card.index();
            if seen & bit != 0 {
                let msg = format!("duplicate retained card {card}");
                return Err(redraw_cards::Error::InvalidHand(msg).into());
            }

            seen |= bit;
        }

        Ok(Self::of(cards))
    }

    /// Creates a kept set from cards known to be distinct.
    pub fn of(cards: &'a [Card]) -> Self {
        let counts = RankCounts::of(cards);
        let suits = if cards.is_empty() {
            Suits::Open
        } else if redraw_cards::is_same_suit(cards) {
            Suits::Suited
        } else {
            Suits::Mixed
        };

        Self {
            cards,
            counts,
            mask: counts.mask(),
            suits,
        }
    }

    /// Number of cards to draw.
    pub fn draws(&self) -> usize {
        Hand::SIZE.saturating_sub(self.cards.len())
    }

    /// Number of distinct retained ranks.
    pub fn distinct(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Checks the retained ranks are all different.
    fn is_distinct(&self) -> bool {
        self.distinct() == self.cards.len()
    }

    /// The retained cards signature for counting the given category.
    pub fn signature(&self, category: Category) -> Result<Signature, Error> {
        let multiplicities = self.counts.multiplicities();
        Signature::from_multiplicities(&multiplicities).ok_or_else(|| {
            Error::UnhandledSignature {
                category,
                multiplicities,
                retained: self.cards.to_vec(),
                hand: None,
            }
        })
    }

    /// The number of suits the drawn cards can take to make a flush.
    pub fn flush_suits(&self) -> u64 {
        match self.suits {
            Suits::Open => 4,
            Suits::Suited => 1,
            Suits::Mixed => 0,
        }
    }

    /// Number of straight windows with the given starts that contain all the
    /// retained ranks, 0 if a rank is retained twice.
    pub fn windows(&self, starts: impl IntoIterator<Item = u8>) -> u64 {
        if !self.is_distinct() {
            return 0;
        }

        starts
            .into_iter()
            .filter(|&s| window(s) & self.mask == self.mask)
            .count() as u64
    }

    /// Ways to draw the missing cards of a hand whose rank groups have the
    /// given sizes and ranks.
    pub fn profile_ways(&self, groups: &[u8], ranks: &[u8]) -> u64 {
        let profile_mask = ranks.iter().fold(0u16, |mask, &r| mask | (1 << r));
        if self.mask & !profile_mask != 0 {
            return 0;
        }

        groups
            .iter()
            .zip(ranks)
            .map(|(&size, &rank)| self.fill(rank, size))
            .product()
    }

    /// Ways to draw the cards that bring `rank` to `size` cards.
    fn fill(&self, rank: u8, size: u8) -> u64 {
        let have = self.counts.count(rank);
        if have > size {
            0
        } else {
            nck(4 - have as usize, (size - have) as usize)
        }
    }
}
