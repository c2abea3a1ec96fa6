//! Calibration batches.
//!
//! Runs many seeded games between two rosters in parallel and aggregates the
//! outcomes, for tuning the probability tables against target win rates and
//! scoring levels.

pub mod batch_runner;

#[cfg(test)]
mod property_tests;

pub use batch_runner::{BatchReport, BatchRunner};
