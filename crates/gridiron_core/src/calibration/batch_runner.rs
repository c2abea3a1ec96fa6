//! BatchRunner - many independent games between the same two rosters.
//!
//! Game `i` is seeded with `base_seed + i`, so a batch is reproducible and
//! any single game in it can be replayed on its own. Games run in parallel
//! on the rayon pool; each owns its generator.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::engine::game::{simulate_game_with_rng, GameOptions};
use crate::engine::rng::GameRng;
use crate::models::{GameResult, Roster, Winner};

/// Below this many games the batch runs sequentially.
const PARALLEL_THRESHOLD: u32 = 16;

#[derive(Debug, Clone)]
pub struct BatchRunner {
    pub home: Roster,
    pub away: Roster,
    pub games: u32,
    pub base_seed: u64,
    /// Applied to every game; its `seed` is ignored.
    pub options: GameOptions,
}

/// Aggregate outcome of a batch, from the home team's point of view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub games: u32,
    pub home_wins: u32,
    pub away_wins: u32,
    pub ties: u32,
    pub overtime_games: u32,
    pub home_points: u64,
    pub away_points: u64,
}

impl BatchReport {
    pub fn record(&mut self, result: &GameResult) {
        self.games += 1;
        match result.winner {
            Winner::Home => self.home_wins += 1,
            Winner::Away => self.away_wins += 1,
            Winner::Tie => self.ties += 1,
        }
        self.overtime_games += u32::from(result.overtime);
        self.home_points += u64::from(result.home_score);
        self.away_points += u64::from(result.away_score);
    }

    pub fn merge(mut self, other: BatchReport) -> BatchReport {
        self.games += other.games;
        self.home_wins += other.home_wins;
        self.away_wins += other.away_wins;
        self.ties += other.ties;
        self.overtime_games += other.overtime_games;
        self.home_points += other.home_points;
        self.away_points += other.away_points;
        self
    }

    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a GameResult>) -> Self {
        let mut report = BatchReport::default();
        for result in results {
            report.record(result);
        }
        report
    }

    fn ratio(count: u64, games: u32) -> f64 {
        if games == 0 {
            0.0
        } else {
            count as f64 / f64::from(games)
        }
    }

    pub fn home_win_rate(&self) -> f64 {
        Self::ratio(u64::from(self.home_wins), self.games)
    }

    pub fn away_win_rate(&self) -> f64 {
        Self::ratio(u64::from(self.away_wins), self.games)
    }

    pub fn overtime_rate(&self) -> f64 {
        Self::ratio(u64::from(self.overtime_games), self.games)
    }

    pub fn avg_home_score(&self) -> f64 {
        Self::ratio(self.home_points, self.games)
    }

    pub fn avg_away_score(&self) -> f64 {
        Self::ratio(self.away_points, self.games)
    }

    pub fn avg_total_points(&self) -> f64 {
        Self::ratio(self.home_points + self.away_points, self.games)
    }
}

impl BatchRunner {
    pub fn new(home: Roster, away: Roster, games: u32, base_seed: u64) -> Self {
        Self { home, away, games, base_seed, options: GameOptions::default() }
    }

    pub fn with_options(mut self, options: GameOptions) -> Self {
        self.options = options;
        self
    }

    fn play(&self, i: u32) -> GameResult {
        let seed = self.base_seed.wrapping_add(u64::from(i));
        let options = GameOptions { seed: Some(seed), ..self.options.clone() };
        simulate_game_with_rng(&self.home, &self.away, &options, GameRng::seeded(seed))
    }

    /// Run the batch keeping only the aggregate.
    pub fn run(&self) -> BatchReport {
        let report = if self.games < PARALLEL_THRESHOLD {
            (0..self.games).fold(BatchReport::default(), |mut acc, i| {
                acc.record(&self.play(i));
                acc
            })
        } else {
            (0..self.games)
                .into_par_iter()
                .fold(BatchReport::default, |mut acc, i| {
                    acc.record(&self.play(i));
                    acc
                })
                .reduce(BatchReport::default, BatchReport::merge)
        };
        info!(
            home = %self.home.name,
            away = %self.away.name,
            games = report.games,
            home_win_rate = report.home_win_rate(),
            overtime_rate = report.overtime_rate(),
            avg_total = report.avg_total_points(),
            "batch complete"
        );
        report
    }

    /// Run the batch keeping every game, in seed order.
    pub fn results(&self) -> Vec<GameResult> {
        (0..self.games).into_par_iter().map(|i| self.play(i)).collect()
    }
}
