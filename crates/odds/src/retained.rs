// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! The cards kept before a redraw.
use serde::{Deserialize, Serialize};
use std::fmt;

use redraw_cards::{Card, Hand, write_cards};

use crate::Error;

/// Cards retained from a hand, with the mask of their positions in the hand.
///
/// A retained set has at most four cards, keeping all the five cards is not a
/// redraw.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Retained {
    mask: u8,
    cards: Vec<Card>,
}

impl Retained {
    /// Creates the retained set with the cards at the positions in `mask`.
    ///
    /// Bits past the hand size are ignored, the mask must leave a card out.
    pub(crate) fn from_mask(hand: &Hand, mask: u8) -> Self {
        let mask = mask & 0b11111;
        debug_assert!(mask.count_ones() < Hand::SIZE as u32, "mask={mask:#b}");
        let cards = hand
            .cards()
            .iter()
            .enumerate()
            .filter(|(pos, _)| mask & (1 << pos) != 0)
            .map(|(_, c)| *c)
            .collect();

        Self { mask, cards }
    }

    /// Creates the retained set for the given hand cards.
    pub fn new(hand: &Hand, cards: &[Card]) -> Result<Self, Error> {
        let mut mask = 0u8;
        for card in cards {
            let Some(pos) = hand.cards().iter().position(|c| c == card) else {
                let msg = format!("{card} is not in {hand}");
                return Err(redraw_cards::Error::InvalidHand(msg).into());
            };

            if mask & (1 << pos) != 0 {
                let msg = format!("{card} retained twice");
                return Err(redraw_cards::Error::InvalidHand(msg).into());
            }

            mask |= 1 << pos;
        }

        if cards.len() == Hand::SIZE {
            let msg = "retaining all cards is not a redraw".to_string();
            return Err(redraw_cards::Error::InvalidHand(msg).into());
        }

        Ok(Self::from_mask(hand, mask))
    }

    /// The retained cards in hand order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The positions of the retained cards in the hand.
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// Number of retained cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if no cards are retained.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards to draw.
    pub fn draws(&self) -> usize {
        Hand::SIZE - self.cards.len()
    }

    /// The hand cards that are not retained.
    pub fn discarded(&self, hand: &Hand) -> Vec<Card> {
        hand.cards()
            .iter()
            .enumerate()
            .filter(|(pos, _)| self.mask & (1 << pos) == 0)
            .map(|(_, c)| *c)
            .collect()
    }
}

impl fmt::Display for Retained {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        write_cards(f, &self.cards)?;
        write!(f, "]")
    }
}

impl fmt::Debug for Retained {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Retained({self})")
    }
}

/// Returns the 31 retained sets of a hand, from keeping nothing to keeping
/// four cards.
///
/// Sets of the same size are in lexicographic order of their hand positions,
/// this is the order used to break ties when picking the best set.
pub fn retained_subsets(hand: &Hand) -> impl Iterator<Item = Retained> + '_ {
    let mut masks = Vec::with_capacity(31);
    for size in 0..Hand::SIZE {
        push_masks(0, size, 0, &mut masks);
    }

    masks.into_iter().map(|mask| Retained::from_mask(hand, mask))
}

fn push_masks(start: usize, left: usize, mask: u8, masks: &mut Vec<u8>) {
    if left == 0 {
        masks.push(mask);
        return;
    }

    for pos in start..Hand::SIZE {
        push_masks(pos + 1, left - 1, mask | (1 << pos), masks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashSet;

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    #[test]
    fn subsets_order() {
        let h = hand("2S 3S 4S 5S 6S");
        let subsets = retained_subsets(&h).collect::<Vec<_>>();
        assert_eq!(subsets.len(), 31);

        let sizes = subsets.iter().map(Retained::len).collect::<Vec<_>>();
        assert!(sizes.is_sorted());
        assert_eq!(sizes.iter().filter(|&&s| s == 2).count(), 10);

        assert!(subsets[0].is_empty());
        assert_eq!(subsets[1].to_string(), "[2S]");
        assert_eq!(subsets[5].to_string(), "[6S]");
        assert_eq!(subsets[6].to_string(), "[2S 3S]");
        assert_eq!(subsets[7].to_string(), "[2S 4S]");
        assert_eq!(subsets[10].to_string(), "[3S 4S]");
        assert_eq!(subsets[30].to_string(), "[3S 4S 5S 6S]");

        let masks = subsets.iter().map(Retained::mask).collect::<AHashSet<_>>();
        assert_eq!(masks.len(), 31);
        assert!(!masks.contains(&0b11111));
    }

    #[test]
    fn retained_cards() {
        let h = hand("KS KH 4D AS KC");
        let r = Retained::from_mask(&h, 0b10011);
        assert_eq!(r.to_string(), "[KS KH KC]");
        assert_eq!(r.draws(), 2);

        let discarded = r.discarded(&h);
        assert_eq!(discarded.len(), 2);
        assert_eq!(Hand::redraw(r.cards(), &discarded).unwrap().cards().len(), 5);

        let same = Retained::new(&h, r.cards()).unwrap();
        assert_eq!(r, same);
    }

    #[test]
    fn invalid_retained() {
        let h = hand("KS KH 4D AS KC");
        let qs = "QS".parse::<Card>().unwrap();
        assert!(Retained::new(&h, &[qs]).is_err());

        let ks = h.cards()[0];
        assert!(Retained::new(&h, &[ks, ks]).is_err());
        assert!(Retained::new(&h, h.cards()).is_err());
    }

    #[test]
    fn at_most_four_cards() {
        let h = hand("KS KH 4D AS KC");
        for r in retained_subsets(&h) {
            assert!(r.len() < Hand::SIZE, "{r}");
            assert_eq!(r.len() + r.discarded(&h).len(), Hand::SIZE);
        }

        let r = Retained::new(&h, &h.cards()[1..]).unwrap();
        assert_eq!(r.mask(), 0b11110);
        assert_eq!(r.draws(), 1);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn five_cards_mask() {
        Retained::from_mask(&hand("KS KH 4D AS KC"), 0b11111);
    }
}
