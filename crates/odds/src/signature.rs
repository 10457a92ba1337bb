// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank multiplicities of a set of cards.
use redraw_cards::Card;

/// The shape of up to four retained cards, the sorted multiplicities of their
/// ranks.
///
/// Every subset of a hand with fewer than five cards has one of these shapes,
/// for example two kings and a four are a [Signature::PairSingle], `[1, 2]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signature {
    /// `[]`, nothing retained.
    Empty,
    /// `[1]`
    Single,
    /// `[2]`
    Pair,
    /// `[3]`
    Trips,
    /// `[4]`
    Quads,
    /// `[1, 1]`
    TwoSingles,
    /// `[1, 2]`
    PairSingle,
    /// `[1, 3]`
    TripsSingle,
    /// `[2, 2]`
    TwoPair,
    /// `[1, 1, 1]`
    ThreeSingles,
    /// `[1, 1, 2]`
    PairTwoSingles,
    /// `[1, 1, 1, 1]`
    FourSingles,
}

impl Signature {
    /// Returns the signature for sorted multiplicities, `None` for shapes of
    /// five or more cards.
    pub fn from_multiplicities(multiplicities: &[u8]) -> Option<Signature> {
        use Signature::*;

        let signature = match multiplicities {
            [] => Empty,
            [1] => Single,
            [2] => Pair,
            [3] => Trips,
            [4] => Quads,
            [1, 1] => TwoSingles,
            [1, 2] => PairSingle,
            [1, 3] => TripsSingle,
            [2, 2] => TwoPair,
            [1, 1, 1] => ThreeSingles,
            [1, 1, 2] => PairTwoSingles,
            [1, 1, 1, 1] => FourSingles,
            _ => return None,
        };

        Some(signature)
    }

    /// The sorted multiplicities of this signature.
    pub fn multiplicities(&self) -> &'static [u8] {
        match self {
            Signature::Empty => &[],
            Signature::Single => &[1],
            Signature::Pair => &[2],
            Signature::Trips => &[3],
            Signature::Quads => &[4],
            Signature::TwoSingles => &[1, 1],
            Signature::PairSingle => &[1, 2],
            Signature::TripsSingle => &[1, 3],
            Signature::TwoPair => &[2, 2],
            Signature::ThreeSingles => &[1, 1, 1],
            Signature::PairTwoSingles => &[1, 1, 2],
            Signature::FourSingles => &[1, 1, 1, 1],
        }
    }
}

/// Per rank card counts, indexed by rank value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct RankCounts([u8; 15]);

impl RankCounts {
    pub fn of(cards: &[Card]) -> Self {
        let mut counts = [0u8; 15];
        for card in cards {
            counts[card.rank().value() as usize] += 1;
        }

        Self(counts)
    }

    /// Number of cards with the given rank value.
    #[inline]
    pub fn count(&self, rank: u8) -> u8 {
        self.0[rank as usize]
    }

    /// Bit mask with bit `r` set for each rank value `r` present.
    pub fn mask(&self) -> u16 {
        (2..=14u8)
            .filter(|&r| self.count(r) > 0)
            .fold(0, |mask, r| mask | (1 << r))
    }

    /// The non zero counts sorted in ascending order.
    pub fn multiplicities(&self) -> Vec<u8> {
        let mut m = self.0.iter().copied().filter(|&c| c > 0).collect::<Vec<_>>();
        m.sort_unstable();
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redraw_cards::Hand;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn rank_counts() {
        let counts = RankCounts::of(&cards("KS KH 4D AS KC"));
        assert_eq!(counts.count(13), 3);
        assert_eq!(counts.count(4), 1);
        assert_eq!(counts.count(14), 1);
        assert_eq!(counts.count(2), 0);
        assert_eq!(counts.mask(), (1 << 13) | (1 << 4) | (1 << 14));
        assert_eq!(counts.multiplicities(), [1, 1, 3]);

        assert_eq!(RankCounts::of(&[]).mask(), 0);
        assert!(RankCounts::of(&[]).multiplicities().is_empty());
    }

    #[test]
    fn signatures_of_hand_subsets() {
        use Signature::*;

        let hand = "KS KH KD 4C 4S".parse::<Hand>().unwrap();
        let sig = |idx: &[usize]| {
            let kept = idx.iter().map(|&i| hand.cards()[i]).collect::<Vec<_>>();
            Signature::from_multiplicities(&RankCounts::of(&kept).multiplicities())
        };

        assert_eq!(sig(&[]), Some(Empty));
        assert_eq!(sig(&[0]), Some(Single));
        assert_eq!(sig(&[0, 1]), Some(Pair));
        assert_eq!(sig(&[0, 1, 2]), Some(Trips));
        assert_eq!(sig(&[0, 3]), Some(TwoSingles));
        assert_eq!(sig(&[0, 1, 3]), Some(PairSingle));
        assert_eq!(sig(&[0, 1, 2, 3]), Some(TripsSingle));
        assert_eq!(sig(&[0, 1, 3, 4]), Some(TwoPair));

        // The full hand has no signature.
        assert_eq!(sig(&[0, 1, 2, 3, 4]), None);
        assert_eq!(Signature::from_multiplicities(&[1, 1, 1, 1, 1]), None);
        assert_eq!(Signature::from_multiplicities(&[5]), None);
    }

    #[test]
    fn multiplicities_round_trip() {
        use Signature::*;

        for sig in [
            Empty,
            Single,
            Pair,
            Trips,
            Quads,
            TwoSingles,
            PairSingle,
            TripsSingle,
            TwoPair,
            ThreeSingles,
            PairTwoSingles,
            FourSingles,
        ] {
            assert_eq!(Signature::from_multiplicities(sig.multiplicities()), Some(sig));
            assert!(sig.multiplicities().iter().sum::<u8>() <= 4);
        }
    }
}
