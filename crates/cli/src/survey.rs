// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best retained odds survey over random or all hands.
//!
//! ```bash
//! $ cargo r --release --bin redraw -- --survey 10000 --tasks 8 --seed 42
//! $ cargo r --release --bin redraw -- --exhaustive --tasks 16
//! ```
use anyhow::Result;
use log::{error, info};
use serde::Serialize;
use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};

use redraw_cards::{Card, Deck, Hand};
use redraw_odds::{Category, Selection, best_retained};

use crate::Config;

/// Probabilities are summed in billionths.
const SCALE: f64 = 1e9;

/// Per task counters.
#[derive(Default)]
struct Counter {
    hands: [AtomicU64; 10],
    improvable: [AtomicU64; 10],
    probability: [AtomicU64; 10],
    failures: AtomicU64,
}

impl Counter {
    fn add(&self, selection: &Selection) {
        let idx = selection.category as usize;
        self.hands[idx].fetch_add(1, Ordering::Relaxed);

        if selection.best.is_some() {
            self.improvable[idx].fetch_add(1, Ordering::Relaxed);
        }

        let p = (selection.probability() * SCALE).round() as u64;
        self.probability[idx].fetch_add(p, Ordering::Relaxed);

        if !selection.is_complete() {
            self.failures.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn fail(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns hands, improvable hands and probability sum for a category.
    fn load(&self, idx: usize) -> (u64, u64, u64) {
        (
            self.hands[idx].load(Ordering::Relaxed),
            self.improvable[idx].load(Ordering::Relaxed),
            self.probability[idx].load(Ordering::Relaxed),
        )
    }
}

/// Survey statistics for a category.
#[derive(Debug, Serialize)]
struct Row {
    category: Category,
    hands: u64,
    improvable: u64,
    average_probability: f64,
}

/// The hands to survey.
#[derive(Debug, Clone, Copy)]
pub enum Hands {
    /// The given number of random hands per task.
    Sample(usize),
    /// All the five cards hands.
    All,
}

/// Surveys the hands and prints the average best odds of improving per
/// category.
pub fn run(config: &Config, hands: Hands) -> Result<()> {
    let task_counters = (0..config.tasks)
        .map(|_| Counter::default())
        .collect::<Vec<_>>();

    let survey = |task_id: usize, cards: &[Card]| {
        let counter = &task_counters[task_id];
        match Hand::new(cards) {
            Ok(hand) => counter.add(&best_retained(&hand)),
            Err(e) => {
                error!("{e}");
                counter.fail();
            }
        }
    };

    let now = Instant::now();
    let deck = Deck::default();
    match hands {
        Hands::Sample(samples) => {
            deck.par_sample(config.tasks, samples, Hand::SIZE, config.seed, survey)
        }
        Hands::All => deck.par_for_each(config.tasks, Hand::SIZE, survey),
    }

    let total = task_counters
        .iter()
        .flat_map(|c| c.hands.iter())
        .map(|h| h.load(Ordering::Relaxed))
        .sum::<u64>();
    info!("Surveyed {total} hands in {:?}", now.elapsed());

    let rows = Category::ALL
        .iter()
        .map(|&category| {
            let (hands, improvable, probability) = task_counters
                .iter()
                .map(|c| c.load(category as usize))
                .fold((0, 0, 0), |acc, v| (acc.0 + v.0, acc.1 + v.1, acc.2 + v.2));

            let average_probability = if hands > 0 {
                probability as f64 / SCALE / hands as f64
            } else {
                0.0
            };

            Row {
                category,
                hands,
                improvable,
                average_probability,
            }
        })
        .collect::<Vec<_>>();

    let failures = task_counters
        .iter()
        .map(|c| c.failures.load(Ordering::Relaxed))
        .sum::<u64>();
    if failures > 0 {
        error!("{failures} hands had retained sets that could not be evaluated");
    }

    if config.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    separator();
    println!(
        "| {:<16}| {:>10} | {:>10} | {:>9} |",
        "Category", "Hands", "Improvable", "Avg odds"
    );
    separator();

    for row in &rows {
        println!(
            "| {:<16}| {:>10} | {:>10} | {:>8.3}% |",
            row.category.name(),
            row.hands,
            row.improvable,
            row.average_probability * 100.0
        );
    }

    separator();
    Ok(())
}

fn separator() {
    println!("|{:-<17}|{:-<12}|{:-<12}|{:-<11}|", "", "", "", "");
}
