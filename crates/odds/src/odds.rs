// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Improvement probabilities and the best cards to retain.
use log::{debug, error};
use serde::Serialize;

use redraw_cards::{Card, Deck, Hand, nck};

use crate::{
    Error,
    category::{Category, classify},
    retained::{Retained, retained_subsets},
    ways::{self, Kept, profile},
};

/// Number of ways to draw `k` cards after discarding `k` cards.
///
/// The discarded cards go back to the deck so the draw is from `47 + k` cards.
///
/// Panics if k > 5.
pub fn total_draws(k: usize) -> u64 {
    assert!(k <= Hand::SIZE, "k={k} must be 0 <= k <= 5");
    nck(Deck::SIZE - Hand::SIZE + k, k)
}

/// The exact odds of improving a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Odds {
    /// Draws that make a stronger hand.
    pub better: u64,
    /// All the possible draws.
    pub draws: u64,
}

impl Default for Odds {
    fn default() -> Self {
        Self {
            better: 0,
            draws: 1,
        }
    }
}

impl Odds {
    /// The probability of improving.
    pub fn probability(&self) -> f64 {
        self.better as f64 / self.draws as f64
    }

    /// Checks if these odds are strictly better than `other` odds.
    pub fn beats(&self, other: &Odds) -> bool {
        let lhs = self.better as u128 * other.draws as u128;
        let rhs = other.better as u128 * self.draws as u128;
        lhs > rhs
    }
}

/// Computes the odds that redrawing the cards not in `retained` makes a hand
/// stronger than `hand`.
pub fn improvement_odds(hand: &Hand, retained: &[Card]) -> Result<Odds, Error> {
    if let Some(card) = retained.iter().find(|c| !hand.cards().contains(c)) {
        let msg = format!("retained card {card} is not in {hand}");
        return Err(redraw_cards::Error::InvalidHand(msg).into());
    }

    let current = classify(hand);
    let kept = Kept::new(retained)?;

    // Keeping the whole hand has no signature.
    kept.signature(current).map_err(|e| e.in_hand(hand))?;

    let mut better = ways::better(current, &kept, hand.cards());
    for &category in current.above() {
        better += ways::total(category, &kept).map_err(|e| e.in_hand(hand))?;
    }

    let odds = Odds {
        better,
        draws: total_draws(kept.draws()),
    };

    debug!(
        "{hand} ({current}) keeping {} cards: {}/{}",
        retained.len(),
        odds.better,
        odds.draws
    );

    Ok(odds)
}

/// Returns the probability that redrawing the cards not in `retained` makes a
/// hand stronger than `hand`.
///
/// ```
/// # use redraw_odds::{Hand, probability_of_improvement};
/// let hand = "2S 2H 2D 2C 3S".parse::<Hand>().unwrap();
/// let deuces = &hand.cards()[..4];
/// let p = probability_of_improvement(&hand, deuces).unwrap();
/// assert_eq!(p, 44.0 / 48.0);
/// ```
pub fn probability_of_improvement(hand: &Hand, retained: &[Card]) -> Result<f64, Error> {
    improvement_odds(hand, retained).map(|odds| odds.probability())
}

/// Checks if `after` is a stronger hand than `before`.
pub fn is_improvement(before: &Hand, after: &Hand) -> bool {
    let (b, a) = (classify(before), classify(after));
    a > b || (a == b && profile::key(after.cards()) > profile::key(before.cards()))
}

/// The odds of one retained set.
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// The retained cards.
    pub retained: Retained,
    /// The odds of improving keeping these cards.
    pub odds: Result<Odds, Error>,
}

/// Evaluates all the retained sets of a hand in [retained_subsets] order.
pub fn evaluate_all(hand: &Hand) -> Vec<Evaluation> {
    retained_subsets(hand)
        .map(|retained| {
            let odds = improvement_odds(hand, retained.cards());
            Evaluation { retained, odds }
        })
        .collect()
}

/// The retained set with the best odds of improving a hand.
#[derive(Debug, Clone)]
pub struct Selection {
    /// The hand.
    pub hand: Hand,
    /// The hand category.
    pub category: Category,
    /// The best retained set, none if no set can improve the hand.
    pub best: Option<Retained>,
    /// The odds of the best set.
    pub odds: Odds,
    /// Errors for the sets that could not be evaluated.
    pub failures: Vec<Error>,
}

impl Selection {
    /// Picks the best evaluation, the first one wins ties.
    pub fn new(hand: &Hand, evaluations: &[Evaluation]) -> Self {
        let mut selection = Self {
            hand: *hand,
            category: classify(hand),
            best: None,
            odds: Odds::default(),
            failures: Vec::new(),
        };

        for evaluation in evaluations {
            match &evaluation.odds {
                Ok(odds) => {
                    if odds.beats(&selection.odds) {
                        selection.best = Some(evaluation.retained.clone());
                        selection.odds = *odds;
                    }
                }
                Err(err) => {
                    error!("Evaluation failed for {hand} {}: {err}", evaluation.retained);
                    selection.failures.push(err.clone());
                }
            }
        }

        selection
    }

    /// The probability of improving with the best set.
    pub fn probability(&self) -> f64 {
        self.odds.probability()
    }

    /// Checks if all the retained sets were evaluated.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Returns the retained set with the best odds of improving the hand.
pub fn best_retained(hand: &Hand) -> Selection {
    Selection::new(hand, &evaluate_all(hand))
}
