//! Game clock: elapsed time, possession time and period transitions.

use crate::engine::config::situational::clock;
use crate::models::{DriveResult, Winner};

use super::overtime::{overtime_verdict, OvertimeVerdict};
use super::state::GamePhase;
use super::{GameEngine, NextSnap};

impl GameEngine {
    /// Run `elapsed` seconds off the clock, credited to the team in
    /// possession. The clock stops at zero; the period transition happens
    /// before the next snap.
    pub(crate) fn advance_clock(&mut self, elapsed: u32) {
        let s = &mut self.state;
        let consumed = elapsed.min(s.time_remaining);
        s.time_remaining -= consumed;
        let possession = s.possession;
        s.stats_mut(possession).time_of_possession += consumed;
        if let Some(drive) = s.current_drive.as_mut() {
            drive.time_elapsed += consumed;
        }
    }

    /// Called when the current period's clock has hit zero.
    pub(crate) fn end_period(&mut self) {
        match self.state.phase {
            GamePhase::Final => {}
            GamePhase::Regulation => match self.state.quarter {
                2 => self.halftime(),
                q if q >= clock::REGULATION_QUARTERS => self.end_regulation(),
                _ => {
                    self.state.quarter += 1;
                    self.state.time_remaining = clock::QUARTER_SECONDS;
                    tracing::trace!(quarter = self.state.quarter, "quarter change");
                }
            },
            GamePhase::Overtime(stage) => match overtime_verdict(
                stage,
                self.state.home_score,
                self.state.away_score,
                self.state.ot_possessions,
            ) {
                OvertimeVerdict::Winner(side) => {
                    self.finish(Winner::from(side), DriveResult::EndOfGame)
                }
                OvertimeVerdict::EnterSuddenDeath => {
                    tracing::debug!("overtime period expired tied, new period");
                    self.enter_sudden_death();
                    self.state.time_remaining = clock::OVERTIME_SECONDS;
                }
                // Tied before both have possessed, or the leader's opponent
                // is still owed its possession.
                OvertimeVerdict::Continue => {
                    tracing::debug!("overtime period expired undecided, new period");
                    self.state.time_remaining = clock::OVERTIME_SECONDS;
                }
            },
        }
    }

    fn halftime(&mut self) {
        self.close_drive(DriveResult::EndOfHalf);
        game_event!(
            self.options.verbose,
            home = self.state.home_score,
            away = self.state.away_score,
            "halftime"
        );
        let s = &mut self.state;
        s.quarter = 3;
        s.time_remaining = clock::QUARTER_SECONDS;
        // Second half is received by the team that kicked to open the game.
        s.next_snap = NextSnap::Kickoff { kicking: s.opening_receiver };
    }

    /// End of the fourth quarter, or the regulation play ceiling.
    pub(crate) fn end_regulation(&mut self) {
        self.state.quarter = clock::REGULATION_QUARTERS;
        self.state.time_remaining = 0;
        match self.state.leader() {
            Some(side) => self.finish(Winner::from(side), DriveResult::EndOfGame),
            None if !self.options.allow_overtime => {
                self.finish(Winner::Tie, DriveResult::EndOfGame)
            }
            None => {
                self.close_drive(DriveResult::EndOfRegulation);
                self.begin_overtime();
            }
        }
    }
}
