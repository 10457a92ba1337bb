// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Closed forms for the completions of retained cards into a category.
//!
//! Each category matches on the retained cards signature, the terms are
//! written as choices of ranks and suits, e.g. `12 * nck(4, 2)` is a pair of
//! any of 12 ranks. The wheel is not a straight, so there are nine windows.
use redraw_cards::nck;

use super::Kept;
use crate::{
    Error,
    category::{Category, ROYAL_START, WINDOW_STARTS},
    signature::Signature::*,
};

/// Ways to draw `k` cards of `k` new distinct ranks picked out of `n`.
fn kickers(n: usize, k: usize) -> u64 {
    nck(n, k) * suits(k)
}

/// Ways to pick a suit for each of `k` cards.
fn suits(k: usize) -> u64 {
    4u64.pow(k as u32)
}

pub(super) fn royal_flush(kept: &Kept<'_>) -> Result<u64, Error> {
    let ways = match kept.signature(Category::RoyalFlush)? {
        Empty | Single | TwoSingles | ThreeSingles | FourSingles => {
            kept.flush_suits() * kept.windows(ROYAL_START..=ROYAL_START)
        }
        Pair | Trips | Quads | PairSingle | TripsSingle | TwoPair | PairTwoSingles => 0,
    };

    Ok(ways)
}

pub(super) fn straight_flush(kept: &Kept<'_>) -> Result<u64, Error> {
    let ways = match kept.signature(Category::StraightFlush)? {
        Empty | Single | TwoSingles | ThreeSingles | FourSingles => {
            kept.flush_suits() * kept.windows(*WINDOW_STARTS.start()..ROYAL_START)
        }
        Pair | Trips | Quads | PairSingle | TripsSingle | TwoPair | PairTwoSingles => 0,
    };

    Ok(ways)
}

pub(super) fn four_of_a_kind(kept: &Kept<'_>) -> Result<u64, Error> {
    let ways = match kept.signature(Category::FourOfAKind)? {
        Empty => 13 * 48,
        // Complete the quad, any other card is the kicker.
        Quads | Trips | Pair => 48,
        // The single is in the quad or it is the kicker.
        Single => 48 + 12,
        // The kicker is set, complete the quad.
        TripsSingle | PairSingle => 1,
        TwoSingles => 2,
        TwoPair | ThreeSingles | PairTwoSingles | FourSingles => 0,
    };

    Ok(ways)
}

pub(super) fn full_house(kept: &Kept<'_>) -> Result<u64, Error> {
    let ways = match kept.signature(Category::FullHouse)? {
        Empty => 13 * nck(4, 3) * 12 * nck(4, 2),
        Trips => 12 * nck(4, 2),
        // The pair becomes the triple or stays the pair.
        Pair => nck(2, 1) * 12 * nck(4, 2) + 12 * nck(4, 3),
        Single => nck(3, 2) * 12 * nck(4, 2) + nck(3, 1) * 12 * nck(4, 3),
        TripsSingle => nck(3, 1),
        TwoPair => 2 * nck(2, 1),
        PairSingle => nck(2, 1) * nck(3, 1) + nck(3, 2),
        TwoSingles => 2 * nck(3, 2) * nck(3, 1),
        Quads | ThreeSingles | PairTwoSingles | FourSingles => 0,
    };

    Ok(ways)
}

pub(super) fn flush(kept: &Kept<'_>) -> Result<u64, Error> {
    let ways = match kept.signature(Category::Flush)? {
        Empty => 4 * (nck(13, 5) - 9),
        Single | TwoSingles | ThreeSingles | FourSingles => {
            // Rank sets that complete the suit minus the straight ones.
            let free = 13 - kept.distinct();
            let ranks = nck(free, kept.draws()) - kept.windows(WINDOW_STARTS);
            kept.flush_suits() * ranks
        }
        Pair | Trips | Quads | PairSingle | TripsSingle | TwoPair | PairTwoSingles => 0,
    };

    Ok(ways)
}

pub(super) fn straight(kept: &Kept<'_>) -> Result<u64, Error> {
    let ways = match kept.signature(Category::Straight)? {
        Empty | Single | TwoSingles | ThreeSingles | FourSingles => {
            let k = kept.draws();
            kept.windows(WINDOW_STARTS) * (suits(k) - kept.flush_suits())
        }
        Pair | Trips | Quads | PairSingle | TripsSingle | TwoPair | PairTwoSingles => 0,
    };

    Ok(ways)
}

pub(super) fn three_of_a_kind(kept: &Kept<'_>) -> Result<u64, Error> {
    let ways = match kept.signature(Category::ThreeOfAKind)? {
        Empty => 13 * nck(4, 3) * kickers(12, 2),
        Trips => kickers(12, 2),
        TripsSingle => kickers(11, 1),
        PairTwoSingles => nck(2, 1),
        PairSingle => nck(2, 1) * kickers(11, 1),
        ThreeSingles => 3 * nck(3, 2),
        Pair => nck(2, 1) * kickers(12, 2),
        // One of the singles makes the triple or both are kickers.
        TwoSingles => 2 * nck(3, 2) * kickers(11, 1) + 11 * nck(4, 3),
        Single => nck(3, 2) * kickers(12, 2) + 12 * nck(4, 3) * kickers(11, 1),
        Quads | TwoPair | FourSingles => 0,
    };

    Ok(ways)
}

pub(super) fn two_pair(kept: &Kept<'_>) -> Result<u64, Error> {
    let ways = match kept.signature(Category::TwoPair)? {
        Empty => nck(13, 2) * nck(4, 2) * nck(4, 2) * kickers(11, 1),
        TwoPair => kickers(11, 1),
        PairTwoSingles => 2 * nck(3, 1),
        ThreeSingles => 3 * nck(3, 1) * nck(3, 1),
        PairSingle => nck(3, 1) * kickers(11, 1) + 11 * nck(4, 2),
        Pair => 12 * nck(4, 2) * kickers(11, 1),
        TwoSingles => nck(3, 1) * nck(3, 1) * kickers(11, 1) + 2 * nck(3, 1) * 11 * nck(4, 2),
        // The single is paired or it is the kicker of two new pairs.
        Single => nck(3, 1) * 12 * nck(4, 2) * kickers(11, 1) + nck(12, 2) * nck(4, 2) * nck(4, 2),
        Quads | Trips | TripsSingle | FourSingles => 0,
    };

    Ok(ways)
}

pub(super) fn one_pair(kept: &Kept<'_>) -> Result<u64, Error> {
    let ways = match kept.signature(Category::OnePair)? {
        Empty => 13 * nck(4, 2) * kickers(12, 3),
        PairTwoSingles => kickers(10, 1),
        FourSingles => 4 * nck(3, 1),
        PairSingle => kickers(11, 2),
        ThreeSingles => 10 * nck(4, 2) + 3 * nck(3, 1) * kickers(10, 1),
        Pair => kickers(12, 3),
        TwoSingles => 2 * nck(3, 1) * kickers(11, 2) + 11 * nck(4, 2) * kickers(10, 1),
        Single => nck(3, 1) * kickers(12, 3) + 12 * nck(4, 2) * kickers(11, 2),
        Quads | Trips | TripsSingle | TwoPair => 0,
    };

    Ok(ways)
}

pub(super) fn high_card(kept: &Kept<'_>) -> Result<u64, Error> {
    let ways = match kept.signature(Category::HighCard)? {
        Empty | Single | TwoSingles | ThreeSingles | FourSingles => {
            let k = kept.draws();
            let free = 13 - kept.distinct();
            let ranks = nck(free, k) - kept.windows(WINDOW_STARTS);
            ranks * (suits(k) - kept.flush_suits())
        }
        Pair | Trips | Quads | PairSingle | TripsSingle | TwoPair | PairTwoSingles => 0,
    };

    Ok(ways)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::Signature;
    use redraw_cards::{Card, Deck, Hand};

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn totals(s: &str) -> [u64; 10] {
        let c = cards(s);
        let kept = Kept::new(&c).unwrap();
        [
            high_card(&kept).unwrap(),
            one_pair(&kept).unwrap(),
            two_pair(&kept).unwrap(),
            three_of_a_kind(&kept).unwrap(),
            straight(&kept).unwrap(),
            flush(&kept).unwrap(),
            full_house(&kept).unwrap(),
            four_of_a_kind(&kept).unwrap(),
            straight_flush(&kept).unwrap(),
            royal_flush(&kept).unwrap(),
        ]
    }

    #[test]
    fn pair_totals() {
        // Keeping a pair of kings.
        let t = totals("KS KH");
        assert_eq!(t[Category::OnePair as usize], 14_080);
        assert_eq!(t[Category::TwoPair as usize], 3_168);
        assert_eq!(t[Category::ThreeOfAKind as usize], 2_112);
        assert_eq!(t[Category::FullHouse as usize], 192);
        assert_eq!(t[Category::FourOfAKind as usize], 48);
        assert_eq!(t[Category::Flush as usize], 0);
        assert_eq!(t[Category::Straight as usize], 0);
        assert_eq!(t.iter().sum::<u64>(), nck(50, 3));
    }

    #[test]
    fn single_totals() {
        let t = totals("AS");
        assert_eq!(t[Category::OnePair as usize], 105_600);
        assert_eq!(t[Category::TwoPair as usize], 11_880);
        assert_eq!(t[Category::ThreeOfAKind as usize], 5_280);
        assert_eq!(t[Category::FullHouse as usize], 360);
        assert_eq!(t[Category::FourOfAKind as usize], 60);
        assert_eq!(t[Category::RoyalFlush as usize], 1);
        assert_eq!(t.iter().sum::<u64>(), nck(51, 4));
    }

    #[test]
    fn suited_totals() {
        // Four to a flush, open ended.
        let t = totals("5H 6H 7H 8H");
        assert_eq!(t[Category::StraightFlush as usize], 2);
        assert_eq!(t[Category::Flush as usize], 9 - 2);
        assert_eq!(t[Category::Straight as usize], 2 * 3);
        assert_eq!(t[Category::OnePair as usize], 12);
        assert_eq!(t.iter().sum::<u64>(), 48);

        // Mixed suits never make a flush.
        let t = totals("5H 6D 7H 8H");
        assert_eq!(t[Category::StraightFlush as usize], 0);
        assert_eq!(t[Category::Flush as usize], 0);
        assert_eq!(t[Category::Straight as usize], 2 * 4);
    }

    #[test]
    fn every_signature_has_a_count() {
        // A hand per signature that shares no suit pattern issues.
        let retained = [
            ("", Signature::Empty),
            ("9C", Signature::Single),
            ("9C 9D", Signature::Pair),
            ("9C 9D 9H", Signature::Trips),
            ("9C 9D 9H 9S", Signature::Quads),
            ("9C 2D", Signature::TwoSingles),
            ("9C 9D 2D", Signature::PairSingle),
            ("9C 9D 9H 2D", Signature::TripsSingle),
            ("9C 9D 2D 2C", Signature::TwoPair),
            ("9C 2D 5H", Signature::ThreeSingles),
            ("9C 9D 2D 5H", Signature::PairTwoSingles),
            ("9C 2D 5H KS", Signature::FourSingles),
        ];

        for (r, signature) in retained {
            let c = cards(r);
            let kept = Kept::new(&c).unwrap();
            assert_eq!(kept.signature(Category::HighCard).unwrap(), signature);

            let draws = Deck::SIZE - Hand::SIZE + kept.draws();
            assert_eq!(totals(r).iter().sum::<u64>(), nck(draws, kept.draws()), "{r}");
        }
    }
}
