//! Overtime rules.
//!
//! The coin-toss winner receives. A score by the first team to possess does
//! not end the game until the other team has had the ball; once both have
//! possessed with the score tied, the next score wins. A play ceiling forces
//! a decision if neither team ever scores.

use crate::engine::config::situational::clock;
use crate::models::{DriveResult, Side, Winner};

use super::state::{GamePhase, OtPossessions, OvertimeStage};
use super::{GameEngine, NextSnap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OvertimeVerdict {
    Continue,
    EnterSuddenDeath,
    Winner(Side),
}

/// Checked whenever an overtime drive ends.
pub fn overtime_verdict(
    stage: OvertimeStage,
    home_score: u32,
    away_score: u32,
    possessions: OtPossessions,
) -> OvertimeVerdict {
    let leader = match home_score.cmp(&away_score) {
        std::cmp::Ordering::Greater => Some(Side::Home),
        std::cmp::Ordering::Less => Some(Side::Away),
        std::cmp::Ordering::Equal => None,
    };
    match (stage, leader) {
        (OvertimeStage::SuddenDeath, Some(side)) => OvertimeVerdict::Winner(side),
        (OvertimeStage::SuddenDeath, None) => OvertimeVerdict::Continue,
        (OvertimeStage::GuaranteedPossession, Some(side)) => {
            if possessions.get(side.other()) >= 1 {
                OvertimeVerdict::Winner(side)
            } else {
                OvertimeVerdict::Continue
            }
        }
        (OvertimeStage::GuaranteedPossession, None) => {
            if possessions.both_possessed() {
                OvertimeVerdict::EnterSuddenDeath
            } else {
                OvertimeVerdict::Continue
            }
        }
    }
}

impl GameEngine {
    pub(crate) fn begin_overtime(&mut self) {
        let receiver = if self.rng.coin_flip() { Side::Home } else { Side::Away };
        self.begin_overtime_with_receiver(receiver);
    }

    pub(crate) fn begin_overtime_with_receiver(&mut self, receiver: Side) {
        game_event!(
            self.options.verbose,
            score = %format!("{}-{}", self.state.home_score, self.state.away_score),
            receiver = %receiver,
            "tied after regulation, overtime"
        );
        let s = &mut self.state;
        s.phase = GamePhase::Overtime(OvertimeStage::GuaranteedPossession);
        s.went_to_overtime = true;
        s.quarter = clock::OVERTIME_QUARTER;
        s.time_remaining = clock::OVERTIME_SECONDS;
        s.next_snap = NextSnap::Kickoff { kicking: receiver.other() };
    }

    /// Apply the overtime rules after a drive has closed. Returns `true`
    /// when the game is over.
    pub(crate) fn check_overtime(&mut self) -> bool {
        let GamePhase::Overtime(stage) = self.state.phase else {
            return self.state.is_final();
        };
        match overtime_verdict(
            stage,
            self.state.home_score,
            self.state.away_score,
            self.state.ot_possessions,
        ) {
            OvertimeVerdict::Continue => false,
            OvertimeVerdict::EnterSuddenDeath => {
                self.enter_sudden_death();
                false
            }
            OvertimeVerdict::Winner(side) => {
                self.finish(Winner::from(side), DriveResult::EndOfGame);
                true
            }
        }
    }

    pub(crate) fn enter_sudden_death(&mut self) {
        if self.state.phase == GamePhase::Overtime(OvertimeStage::GuaranteedPossession) {
            game_event!(self.options.verbose, "both teams have possessed, sudden death");
            self.state.phase = GamePhase::Overtime(OvertimeStage::SuddenDeath);
        }
    }

    /// A drive opening with the score level after both teams have had the
    /// ball is already sudden death.
    pub(crate) fn check_sudden_death_on_open(&mut self) {
        let s = &self.state;
        if s.phase == GamePhase::Overtime(OvertimeStage::GuaranteedPossession)
            && s.home_score == s.away_score
            && s.ot_possessions.both_possessed()
        {
            self.enter_sudden_death();
        }
    }

    /// Play ceiling reached: higher score wins, a coin flip if still level.
    pub(crate) fn overtime_fallback(&mut self) {
        let winner = match self.state.leader() {
            Some(side) => side,
            None if self.rng.coin_flip() => Side::Home,
            None => Side::Away,
        };
        tracing::warn!(
            snaps = self.state.overtime_snaps,
            winner = %winner,
            "overtime play ceiling reached"
        );
        self.finish(Winner::from(winner), DriveResult::EndOfGame);
    }
}

#[cfg(test)]
impl GameEngine {
    /// Jump to the end of a regulation tied at `score` and start overtime.
    pub(crate) fn skip_to_overtime(&mut self, score: u32) {
        self.state.home_score = score;
        self.state.away_score = score;
        self.end_regulation();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poss(home: u32, away: u32) -> OtPossessions {
        OtPossessions { home, away }
    }

    #[test]
    fn test_first_possession_score_does_not_end_game() {
        let v = overtime_verdict(OvertimeStage::GuaranteedPossession, 20, 17, poss(1, 0));
        assert_eq!(v, OvertimeVerdict::Continue);
    }

    #[test]
    fn test_answer_or_stop_decides() {
        let v = overtime_verdict(OvertimeStage::GuaranteedPossession, 20, 17, poss(1, 1));
        assert_eq!(v, OvertimeVerdict::Winner(Side::Home));
        let v = overtime_verdict(OvertimeStage::GuaranteedPossession, 20, 20, poss(1, 1));
        assert_eq!(v, OvertimeVerdict::EnterSuddenDeath);
    }

    #[test]
    fn test_safety_on_first_drive_ends_game() {
        // Home received and gave up a safety: home trails having possessed.
        let v = overtime_verdict(OvertimeStage::GuaranteedPossession, 17, 19, poss(1, 0));
        assert_eq!(v, OvertimeVerdict::Winner(Side::Away));
    }

    #[test]
    fn test_sudden_death_any_score_wins() {
        assert_eq!(
            overtime_verdict(OvertimeStage::SuddenDeath, 23, 20, poss(2, 1)),
            OvertimeVerdict::Winner(Side::Home)
        );
        assert_eq!(
            overtime_verdict(OvertimeStage::SuddenDeath, 20, 20, poss(2, 2)),
            OvertimeVerdict::Continue
        );
    }
}
