//! Game phase machine
//!
//! Phases carry no state of their own. Each has `enter`/`exit` actions that
//! spot the ball and a `step` that runs the phase against a [`Game`] and
//! returns the phase to move to. The transition rules are plain functions so
//! they can be checked without running a game.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::engine::clock::AlarmType;
use crate::engine::dice::DieSource;
use crate::engine::game::Game;
use crate::engine::situation::Situation;
use crate::models::{PlayOutcome, PlayResult, Side, Snap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    #[default]
    Kickoff,
    PlayFromScrimmage,
    Touchdown,
    ExtraPoint,
    Halftime,
    Final,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        self == GamePhase::Final
    }

    /// Touchdown and conversion run as one uninterrupted sequence; clock
    /// alarms wait until it hands the ball back to a kickoff.
    pub fn defers_alarms(self) -> bool {
        matches!(
            self,
            GamePhase::Touchdown | GamePhase::ExtraPoint | GamePhase::Final
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            GamePhase::Kickoff => "Kickoff",
            GamePhase::PlayFromScrimmage => "Play from scrimmage",
            GamePhase::Touchdown => "Touchdown",
            GamePhase::ExtraPoint => "Extra point",
            GamePhase::Halftime => "Halftime",
            GamePhase::Final => "Final",
        }
    }
}

/// Phase forced by a clock alarm, if any.
pub fn alarm_phase(alarm: AlarmType) -> Option<GamePhase> {
    match alarm {
        AlarmType::Halftime => Some(GamePhase::Halftime),
        AlarmType::Final => Some(GamePhase::Final),
        AlarmType::TwoMinuteWarning => None,
    }
}

/// Where a scrimmage play sends the game. Points for safeties and field goals
/// have already been awarded by the time this is asked.
pub fn after_scrimmage(outcome: &PlayOutcome) -> GamePhase {
    if outcome.touchdown {
        GamePhase::Touchdown
    } else if outcome.safety || outcome.result == PlayResult::FieldGoalMade {
        GamePhase::Kickoff
    } else {
        GamePhase::PlayFromScrimmage
    }
}

pub fn enter(phase: GamePhase, situation: &mut Situation, config: &GameConfig) {
    match phase {
        GamePhase::Kickoff => situation.spot(Snap::Kickoff, config.kickoff_spot),
        GamePhase::ExtraPoint => situation.spot(Snap::Pat, config.pat_spot),
        GamePhase::PlayFromScrimmage
        | GamePhase::Touchdown
        | GamePhase::Halftime
        | GamePhase::Final => {}
    }
}

pub fn exit(phase: GamePhase, situation: &mut Situation, config: &GameConfig) {
    if phase == GamePhase::Kickoff {
        // returns are not modeled; the receiving team always starts here
        situation.set_field_pos(config.kickoff_return_spot);
        situation.first_down();
    }
}

pub(crate) fn step<S: DieSource>(phase: GamePhase, game: &mut Game<S>) -> GamePhase {
    match phase {
        GamePhase::Kickoff => {
            game.change_possession();
            GamePhase::PlayFromScrimmage
        }
        GamePhase::PlayFromScrimmage => {
            let outcome = game.play_from_scrimmage();
            after_scrimmage(&outcome)
        }
        GamePhase::Touchdown => {
            game.score_touchdown();
            GamePhase::ExtraPoint
        }
        GamePhase::ExtraPoint => {
            game.attempt_conversion();
            GamePhase::Kickoff
        }
        GamePhase::Halftime => {
            game.set_possession(Side::Away);
            GamePhase::Kickoff
        }
        GamePhase::Final => GamePhase::Final,
    }
}
