// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank profiles of five cards hands.
//!
//! A profile lists the ranks of a hand by group, larger groups first and higher
//! ranks first within groups of the same size, so that for two hands of the
//! same category comparing profiles compares the hands: a full house of kings
//! over fours is `[13, 4]`, and two pair aces and fives with a jack kicker is
//! `[14, 5, 11]`.
use redraw_cards::Card;

use crate::{category::Category, signature::RankCounts};

/// Group sizes of a category in profile order.
pub(crate) fn groups(category: Category) -> &'static [u8] {
    match category {
        Category::FourOfAKind => &[4, 1],
        Category::FullHouse => &[3, 2],
        Category::ThreeOfAKind => &[3, 1, 1],
        Category::TwoPair => &[2, 2, 1],
        Category::OnePair => &[2, 1, 1, 1],
        Category::HighCard
        | Category::Straight
        | Category::Flush
        | Category::StraightFlush
        | Category::RoyalFlush => &[1, 1, 1, 1, 1],
    }
}

/// Returns the profile of the given cards.
pub(crate) fn key(cards: &[Card]) -> Vec<u8> {
    let counts = RankCounts::of(cards);
    let mut ranks = (2..=14u8)
        .rev()
        .filter(|&r| counts.count(r) > 0)
        .map(|r| (counts.count(r), r))
        .collect::<Vec<_>>();

    // Stable sort keeps higher ranks first within a group size.
    ranks.sort_by(|a, b| b.0.cmp(&a.0));
    ranks.into_iter().map(|(_, r)| r).collect()
}

/// Calls `f` with every profile for the given group sizes, one distinct rank
/// per group.
pub(crate) fn for_each<F>(groups: &[u8], mut f: F)
where
    F: FnMut(&[u8]),
{
    let mut ranks = [0u8; 5];
    visit(groups, &mut ranks, 0, 0, &mut f);
}

fn visit<F>(groups: &[u8], ranks: &mut [u8; 5], depth: usize, used: u16, f: &mut F)
where
    F: FnMut(&[u8]),
{
    if depth == groups.len() {
        f(&ranks[..depth]);
        return;
    }

    // Groups of the same size are listed in decreasing rank order.
    let top = if depth > 0 && groups[depth] == groups[depth - 1] {
        ranks[depth - 1] - 1
    } else {
        14
    };

    for rank in (2..=top).rev() {
        if used & (1 << rank) == 0 {
            ranks[depth] = rank;
            visit(groups, ranks, depth + 1, used | (1 << rank), f);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashSet;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn profile_keys() {
        assert_eq!(key(&cards("4S KH 4D KS KC")), [13, 4]);
        assert_eq!(key(&cards("5S AH JD 5D AC")), [14, 5, 11]);
        assert_eq!(key(&cards("2S 9H 2D 7D 8C")), [2, 9, 8, 7]);
        assert_eq!(key(&cards("2S 9H 3D 7D 8C")), [9, 8, 7, 3, 2]);
        assert!(key(&cards("AS AH 2D 3D 4C")) > key(&cards("KS KH AD QD JC")));
    }

    #[test]
    fn profiles_count() {
        let expected = [
            (Category::FourOfAKind, 13 * 12),
            (Category::FullHouse, 13 * 12),
            (Category::ThreeOfAKind, 13 * 66),
            (Category::TwoPair, 78 * 11),
            (Category::OnePair, 13 * 220),
            (Category::HighCard, 1287),
        ];

        for (category, count) in expected {
            let groups = groups(category);
            let mut seen = AHashSet::new();
            for_each(groups, |ranks| {
                assert_eq!(ranks.len(), groups.len());
                assert!(seen.insert(ranks.to_vec()));
            });
            assert_eq!(seen.len(), count, "{category}");
        }
    }

    #[test]
    fn profiles_match_keys() {
        // Every profile is the key of a hand made with those ranks.
        let groups = groups(Category::TwoPair);
        for_each(groups, |ranks| {
            let suits = ['C', 'D', 'H', 'S'];
            let hand = groups
                .iter()
                .zip(ranks)
                .flat_map(|(&size, &rank)| {
                    (0..size as usize).map(move |s| Card::from_parts(suits[s], rank).unwrap())
                })
                .collect::<Vec<_>>();
            assert_eq!(key(&hand), ranks);
        });
    }
}
