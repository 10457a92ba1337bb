// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Redraw CLI, finds the cards to keep in a five cards draw hand.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::{Parser, value_parser};

use redraw_cards::Hand;

mod report;
mod survey;

#[derive(Debug, Parser)]
struct Cli {
    /// The hand to evaluate, e.g. "AS KS QS JS 9D", a random hand if missing.
    #[clap(long)]
    hand: Option<String>,
    /// The seed for dealing and redrawing cards, or for sampling survey hands.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Print the odds of all the retained sets.
    #[clap(long, short)]
    all: bool,
    /// Redraw the cards that are not retained by the best set.
    #[clap(long, short)]
    redraw: bool,
    /// Print the results as JSON.
    #[clap(long)]
    json: bool,
    /// Survey the given number of random hands per task.
    #[clap(long, conflicts_with_all = ["hand", "all", "redraw"],
           value_parser = value_parser!(u64).range(1..=10_000_000))]
    survey: Option<u64>,
    /// Survey all the five cards hands.
    #[clap(long, conflicts_with_all = ["hand", "all", "redraw", "survey", "seed"])]
    exhaustive: bool,
    /// Number of survey tasks.
    #[clap(long, short, default_value_t = 4, value_parser = value_parser!(u8).range(1..=64))]
    tasks: u8,
    /// Enable debug logs.
    #[clap(long, short)]
    verbose: bool,
}

/// The CLI configuration.
#[derive(Debug)]
pub struct Config {
    /// The hand to evaluate.
    pub hand: Option<Hand>,
    /// The dealing seed.
    pub seed: Option<u64>,
    /// Print all the retained sets.
    pub all: bool,
    /// Redraw the discarded cards.
    pub redraw: bool,
    /// JSON output.
    pub json: bool,
    /// Number of survey tasks.
    pub tasks: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let hand = cli
        .hand
        .as_deref()
        .map(str::parse::<Hand>)
        .transpose()
        .context("invalid --hand")?;

    let config = Config {
        hand,
        seed: cli.seed,
        all: cli.all,
        redraw: cli.redraw,
        json: cli.json,
        tasks: cli.tasks as usize,
    };

    if cli.exhaustive {
        survey::run(&config, survey::Hands::All)
    } else if let Some(samples) = cli.survey {
        survey::run(&config, survey::Hands::Sample(samples as usize))
    } else {
        report::run(&config)
    }
}
