// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Single hand report.
use anyhow::{Result, bail};
use log::info;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;

use redraw_cards::{Card, Deck, Hand};
use redraw_odds::{
    Category, Evaluation, Retained, Selection, classify, evaluate_all, is_improvement,
};

use crate::Config;

/// The odds of a retained set.
#[derive(Debug, Serialize)]
struct Pattern<'a> {
    retained: &'a Retained,
    better: Option<u64>,
    draws: Option<u64>,
    probability: Option<f64>,
    error: Option<String>,
}

impl<'a> From<&'a Evaluation> for Pattern<'a> {
    fn from(evaluation: &'a Evaluation) -> Self {
        match &evaluation.odds {
            Ok(odds) => Self {
                retained: &evaluation.retained,
                better: Some(odds.better),
                draws: Some(odds.draws),
                probability: Some(odds.probability()),
                error: None,
            },
            Err(err) => Self {
                retained: &evaluation.retained,
                better: None,
                draws: None,
                probability: None,
                error: Some(err.to_string()),
            },
        }
    }
}

/// The hand after redrawing the discarded cards.
#[derive(Debug, Serialize)]
struct Redraw {
    discarded: Vec<Card>,
    drawn: Vec<Card>,
    hand: Hand,
    category: Category,
    improved: bool,
}

impl Redraw {
    fn new<R: Rng>(deck: &mut Deck, hand: &Hand, best: &Retained, rng: &mut R) -> Result<Self> {
        let discarded = best.discarded(hand);
        let drawn = deck.mulligan(&discarded, rng);
        let new_hand = Hand::redraw(best.cards(), &drawn)?;

        Ok(Self {
            discarded,
            drawn,
            hand: new_hand,
            category: classify(&new_hand),
            improved: is_improvement(hand, &new_hand),
        })
    }
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    hand: Hand,
    category: Category,
    best: Option<&'a Retained>,
    better: u64,
    draws: u64,
    probability: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    patterns: Vec<Pattern<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    redraw: Option<Redraw>,
}

/// Evaluates the configured hand or a random one and prints the best set of
/// cards to retain.
pub fn run(config: &Config) -> Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut deck = Deck::new_and_shuffled(&mut rng);
    let hand = match config.hand {
        Some(hand) => {
            hand.cards().iter().for_each(|&c| deck.remove(c));
            hand
        }
        None => deck.deal_hand()?,
    };

    let evaluations = evaluate_all(&hand);
    let selection = Selection::new(&hand, &evaluations);

    let redraw = match &selection.best {
        Some(best) if config.redraw => Some(Redraw::new(&mut deck, &hand, best, &mut rng)?),
        _ => None,
    };

    let patterns = if config.all {
        evaluations.iter().map(Pattern::from).collect()
    } else {
        Vec::new()
    };

    let report = Report {
        hand,
        category: selection.category,
        best: selection.best.as_ref(),
        better: selection.odds.better,
        draws: selection.odds.draws,
        probability: selection.probability(),
        patterns,
        redraw,
    };

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if !selection.is_complete() {
        bail!(
            "{} of {} retained sets could not be evaluated",
            selection.failures.len(),
            evaluations.len()
        );
    }

    Ok(())
}

fn print_report(report: &Report<'_>) {
    println!("Hand: {} ({})", report.hand, report.category);

    if !report.patterns.is_empty() {
        println!();
        for pattern in &report.patterns {
            let retained = format!("{}", pattern.retained);
            match (pattern.better, pattern.draws, pattern.probability) {
                (Some(better), Some(draws), Some(p)) => println!(
                    "  keep {retained:<16} {better:>9} / {draws:<9} {:>7.3}%",
                    p * 100.0
                ),
                _ => println!(
                    "  keep {retained:<16} {}",
                    pattern.error.as_deref().unwrap_or("failed")
                ),
            }
        }
        println!();
    }

    match report.best {
        Some(best) => println!(
            "Best: keep {best} and draw {}, improves with probability {:.3}% ({} / {})",
            best.draws(),
            report.probability * 100.0,
            report.better,
            report.draws
        ),
        None => println!("Best: stand pat, no redraw can improve this hand"),
    }

    if let Some(redraw) = &report.redraw {
        info!("Discarded {:?} drew {:?}", redraw.discarded, redraw.drawn);
        println!(
            "Redraw: {} ({}), {}",
            redraw.hand,
            redraw.category,
            if redraw.improved {
                "improved"
            } else {
                "not improved"
            }
        );
    }
}
