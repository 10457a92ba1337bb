// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hand iteration.
use rand::prelude::*;
use std::thread;

use super::{Card, Deck, Rank, Suit};
use crate::nck;

/// Uses the combinatorial number system to convert n to a
/// k-combination (see Theorem L pg. 260 Knuth 4a).
fn nth_ksubset(mut n: usize, k: usize) -> [usize; 7] {
    assert!(k <= 7);

    let mut out = [0; 7];
    for k in (0..k).rev() {
        let mut c = k;
        while nck(c, k + 1) as usize <= n {
            c += 1;
        }

        c = c.saturating_sub(1);
        out[k] = c;

        n = n.saturating_sub(nck(c, k + 1) as usize);
    }

    out
}

/// Calls the given closure for count k-subsets starting from the nth ksubset.
fn for_each_ksubset<F>(n: usize, k: usize, nth: usize, count: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    // Algorithm L from TAOCP 4a
    let mut c = vec![0usize; k + 3];

    let ks = nth_ksubset(nth, k);
    c[1..=k].copy_from_slice(&ks[..k]);
    c[k + 1] = n;

    let mut counter = 1;
    loop {
        f(&c[1..=k]);

        counter += 1;
        if counter > count {
            break;
        }

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > k {
            break;
        }

        c[j] += 1;
    }
}

impl Deck {
    /// Parallel for each, calls the `f` closure for each k-cards hand.
    ///
    /// The clousure takes an usize that is the task identifier (0..num_task)
    /// and a slice of cards of length k.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn par_for_each<F>(&self, num_tasks: usize, k: usize, f: F)
    where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!((1..=7).contains(&k), "1 <= k <= 7");
        assert!(num_tasks > 0);

        if k > self.cards.len() {
            return;
        }

        let n = self.cards.len();
        let num_hands = nck(n, k) as usize;
        let hands_per_task = num_hands.div_ceil(num_tasks);

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let start = task_id * hands_per_task;
                if start >= num_hands {
                    break;
                }

                let count = hands_per_task.min(num_hands - start);
                let f = &f;
                s.spawn(move || {
                    let mut h = vec![Card::new(Rank::Ace, Suit::Diamonds); k];
                    for_each_ksubset(n, k, start, count, |p| {
                        for (idx, &pos) in p.iter().enumerate() {
                            h[idx] = self.cards[pos];
                        }

                        f(task_id, &h);
                    });
                });
            }
        });
    }

    /// Calls the given closure from `num_tasks` parallel tasks generating
    /// `samples_per_task` samples of size k.
    ///
    /// With a `seed` each task samples from its own generator seeded with
    /// `seed + task_id`, so the samples of a task are reproducible.
    pub fn par_sample<F>(
        &self,
        num_tasks: usize,
        samples_per_task: usize,
        k: usize,
        seed: Option<u64>,
        f: F,
    ) where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!((1..=7).contains(&k), "1 <= k <= 7");
        assert!(num_tasks > 0);
        assert!(samples_per_task > 0);

        if k > self.cards.len() {
            return;
        }

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let f = &f;
                s.spawn(move || {
                    let mut h = vec![Card::new(Rank::Ace, Suit::Diamonds); k];
                    let mut rng = match seed {
                        Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(task_id as u64)),
                        None => SmallRng::from_os_rng(),
                    };

                    for _ in 0..samples_per_task {
                        for (pos, c) in self.cards.choose_multiple(&mut rng, k).enumerate() {
                            h[pos] = *c;
                        }

                        f(task_id, &h);
                    }
                });
            }
        });
    }
}
