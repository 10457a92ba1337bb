// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Completions that stay in the hand category and beat the hand.
use redraw_cards::Card;

use super::{Kept, profile};
use crate::category::{Category, ROYAL_START, WINDOW_STARTS};

/// Group sizes of hands with five distinct ranks.
const DISTINCT: [u8; 5] = [1; 5];

fn lowest_rank(hand: &[Card]) -> u8 {
    hand.iter().map(|c| c.rank().value()).min().unwrap_or(0)
}

/// Checks if distinct ranks in decreasing order are a straight.
fn is_window(ranks: &[u8]) -> bool {
    ranks.len() == 5 && ranks[0] - ranks[4] == 4
}

pub(super) fn royal_flush(_kept: &Kept<'_>, _hand: &[Card]) -> u64 {
    0
}

pub(super) fn straight_flush(kept: &Kept<'_>, hand: &[Card]) -> u64 {
    let low = lowest_rank(hand);
    kept.flush_suits() * kept.windows(low + 1..ROYAL_START)
}

pub(super) fn straight(kept: &Kept<'_>, hand: &[Card]) -> u64 {
    let low = lowest_rank(hand);
    let windows = kept.windows(low + 1..=*WINDOW_STARTS.end());
    windows * (4u64.pow(kept.draws() as u32) - kept.flush_suits())
}

pub(super) fn flush(kept: &Kept<'_>, hand: &[Card]) -> u64 {
    distinct_ranks(kept, hand, true)
}

pub(super) fn high_card(kept: &Kept<'_>, hand: &[Card]) -> u64 {
    distinct_ranks(kept, hand, false)
}

/// Counts the flush or high card completions with a higher profile.
fn distinct_ranks(kept: &Kept<'_>, hand: &[Card], suited: bool) -> u64 {
    let key = profile::key(hand);
    let on_suit = kept.flush_suits();
    let off_suit = 4u64.pow(kept.draws() as u32) - on_suit;
    let per_profile = if suited { on_suit } else { off_suit };

    let mut ways = 0;
    profile::for_each(&DISTINCT, |ranks| {
        if ranks > key.as_slice() && !is_window(ranks) && kept.profile_ways(&DISTINCT, ranks) > 0 {
            ways += per_profile;
        }
    });

    ways
}

pub(super) fn four_of_a_kind(kept: &Kept<'_>, hand: &[Card]) -> u64 {
    grouped_ranks(kept, hand, Category::FourOfAKind)
}

pub(super) fn full_house(kept: &Kept<'_>, hand: &[Card]) -> u64 {
    grouped_ranks(kept, hand, Category::FullHouse)
}

pub(super) fn three_of_a_kind(kept: &Kept<'_>, hand: &[Card]) -> u64 {
    grouped_ranks(kept, hand, Category::ThreeOfAKind)
}

pub(super) fn two_pair(kept: &Kept<'_>, hand: &[Card]) -> u64 {
    grouped_ranks(kept, hand, Category::TwoPair)
}

pub(super) fn one_pair(kept: &Kept<'_>, hand: &[Card]) -> u64 {
    grouped_ranks(kept, hand, Category::OnePair)
}

/// Counts the completions with a higher profile for a category with a paired
/// rank, any profile with the category groups is in the category.
fn grouped_ranks(kept: &Kept<'_>, hand: &[Card], category: Category) -> u64 {
    let key = profile::key(hand);
    let groups = profile::groups(category);

    let mut ways = 0;
    profile::for_each(groups, |ranks| {
        if ranks > key.as_slice() {
            ways += kept.profile_ways(groups, ranks);
        }
    });

    ways
}
