//! Play callers
//!
//! Ready-made [`PlayCaller`] implementations: a fixed call, a scripted
//! sequence, and a seeded heuristic that plays a reasonable game.

pub mod heuristic;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::PlayCaller;
use crate::error::{GameError, Result};
use crate::models::{PlayCall, Role, SituationSnapshot};

pub use heuristic::HeuristicCaller;

/// Makes the same call on every snap, on both sides of the ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCaller(pub PlayCall);

impl PlayCaller for FixedCaller {
    fn call_play(&mut self, _situation: &SituationSnapshot, _role: Role) -> PlayCall {
        self.0
    }
}

/// Replays a list of calls in order, starting over when it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedCaller {
    calls: Vec<PlayCall>,
    cursor: usize,
}

impl ScriptedCaller {
    pub fn new(calls: Vec<PlayCall>) -> Result<Self> {
        if calls.is_empty() {
            return Err(GameError::InvalidConfig(
                "scripted caller needs at least one call".to_string(),
            ));
        }
        Ok(Self { calls, cursor: 0 })
    }
}

impl PlayCaller for ScriptedCaller {
    fn call_play(&mut self, _situation: &SituationSnapshot, _role: Role) -> PlayCall {
        let call = self.calls[self.cursor % self.calls.len()];
        self.cursor += 1;
        call
    }
}

/// Caller selection for requests and the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CallerKind {
    #[default]
    Heuristic,
    Run,
    ShortPass,
    LongPass,
}

impl CallerKind {
    /// Build the caller. `seed` only matters for the heuristic caller.
    pub fn build(self, seed: u64) -> Box<dyn PlayCaller> {
        match self {
            CallerKind::Heuristic => Box::new(HeuristicCaller::seeded(seed)),
            CallerKind::Run => Box::new(FixedCaller(PlayCall::Run)),
            CallerKind::ShortPass => Box::new(FixedCaller(PlayCall::ShortPass)),
            CallerKind::LongPass => Box::new(FixedCaller(PlayCall::LongPass)),
        }
    }
}

impl FromStr for CallerKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "heuristic" => Ok(CallerKind::Heuristic),
            "run" => Ok(CallerKind::Run),
            "short_pass" => Ok(CallerKind::ShortPass),
            "long_pass" => Ok(CallerKind::LongPass),
            other => Err(GameError::InvalidConfig(format!("unknown caller '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Down, Side, Snap};

    fn snapshot() -> SituationSnapshot {
        SituationSnapshot {
            snap: Snap::Scrimmage(Down::First),
            distance: 10,
            field_pos: 25,
            quarter: 1,
            ticks: 90,
            minutes: 22,
            seconds: 30,
            possession: Side::Home,
        }
    }

    #[test]
    fn test_scripted_caller_cycles() {
        let mut caller =
            ScriptedCaller::new(vec![PlayCall::Run, PlayCall::LongPass]).unwrap();
        let calls: Vec<PlayCall> = (0..3)
            .map(|_| caller.call_play(&snapshot(), Role::Offense))
            .collect();
        assert_eq!(calls, vec![PlayCall::Run, PlayCall::LongPass, PlayCall::Run]);
    }

    #[test]
    fn test_scripted_caller_rejects_empty() {
        assert!(ScriptedCaller::new(Vec::new()).is_err());
    }

    #[test]
    fn test_caller_kind_from_str() {
        assert_eq!("short-pass".parse::<CallerKind>().unwrap(), CallerKind::ShortPass);
        assert_eq!("Heuristic".parse::<CallerKind>().unwrap(), CallerKind::Heuristic);
        assert!("blitz".parse::<CallerKind>().is_err());
    }

    #[test]
    fn test_fixed_kind_builds_fixed_caller() {
        let mut caller = CallerKind::LongPass.build(1);
        assert_eq!(caller.call_play(&snapshot(), Role::Defense), PlayCall::LongPass);
    }
}
