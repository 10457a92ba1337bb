// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A cards deck.
use rand::prelude::*;

use crate::{Card, Error, Hand, Rank, Suit};

#[cfg(feature = "parallel")]
mod parallel;

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the cards left in the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals a card from the deck, `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals a five cards hand.
    pub fn deal_hand(&mut self) -> Result<Hand, Error> {
        let cards = (0..Hand::SIZE)
            .map_while(|_| self.deal())
            .collect::<Vec<_>>();
        Hand::new(&cards)
    }

    /// Returns the discarded cards to the deck, shuffles it and deals the same
    /// number of replacement cards.
    ///
    /// A replacement can be one of the cards just discarded.
    pub fn mulligan<R: Rng>(&mut self, discarded: &[Card], rng: &mut R) -> Vec<Card> {
        self.cards.extend_from_slice(discarded);
        self.shuffle(rng);
        (0..discarded.len()).map_while(|_| self.deal()).collect()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=7).contains(&k), "1 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        let n = self.cards.len();
        let mut h = [Card::new(Rank::Ace, Suit::Hearts); 7];
        let mut pos = [0usize; 7];

        // Positions are kept strictly increasing, pos[i] <= n - k + i.
        for (i, p) in pos.iter_mut().enumerate().take(k) {
            *p = i;
        }

        loop {
            for (slot, &p) in h.iter_mut().zip(&pos[..k]) {
                *slot = self.cards[p];
            }

            f(&h[0..k]);

            // Find the rightmost position that can still move right.
            let Some(i) = (0..k).rev().find(|&i| pos[i] < n - k + i) else {
                break;
            };

            pos[i] += 1;
            for j in (i + 1)..k {
                pos[j] = pos[j - 1] + 1;
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn deck_cards() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while let Some(card) = deck.deal() {
            cards.insert(card);
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);
        assert!(deck.is_empty());
        assert!(deck.deal().is_none());
    }

    #[test]
    fn deck_deal_hand() {
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        for _ in 0..10 {
            assert!(deck.deal_hand().is_ok());
        }

        assert_eq!(deck.count(), 2);
        assert!(matches!(deck.deal_hand(), Err(Error::InvalidHand(_))));
    }

    #[test]
    fn deck_mulligan() {
        let mut rng = rand::rng();
        let mut deck = Deck::new_and_shuffled(&mut rng);
        let hand = deck.deal_hand().unwrap();
        assert_eq!(deck.count(), 47);

        let discarded = &hand.cards()[2..];
        let drawn = deck.mulligan(discarded, &mut rng);
        assert_eq!(drawn.len(), 3);
        assert_eq!(deck.count(), 47);

        // The new hand must still be five distinct cards.
        let new_hand = Hand::redraw(&hand.cards()[..2], &drawn).unwrap();
        assert_eq!(new_hand.cards()[..2], hand.cards()[..2]);

        assert!(deck.mulligan(&[], &mut rng).is_empty());
        assert_eq!(deck.count(), 47);
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 2_598_960);

        hands.clear();
        deck.for_each(1, |cards| {
            assert_eq!(cards.len(), 1);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 52);

        hands.clear();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));
        assert_eq!(deck.count(), 50);

        let mut count = 0;
        deck.for_each(4, |cards| {
            assert_eq!(cards.len(), 4);
            count += 1;
        });
        assert_eq!(count, 230_300);

        let mut deck = Deck::default();
        for card in Deck::default().into_iter().take(50) {
            deck.remove(card);
        }

        let mut count = 0;
        deck.for_each(3, |_| count += 1);
        assert_eq!(count, 0);
    }
}
