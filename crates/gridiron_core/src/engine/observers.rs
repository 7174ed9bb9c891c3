//! Collaborator seams of the game loop
//!
//! Play calling and observation are plain traits. Closures implement all of
//! them, so a test can pass `|_, _| PlayCall::Run` as a caller.

use crate::models::{PlayCall, PlayOutcome, Role, SituationSnapshot};

/// Chooses a play for one side of the ball.
///
/// Called once per side for every scrimmage snap (and conversion try when
/// conversions are attempted). The snapshot is a copy; callers cannot change
/// the game.
pub trait PlayCaller {
    fn call_play(&mut self, situation: &SituationSnapshot, role: Role) -> PlayCall;
}

impl<F> PlayCaller for F
where
    F: FnMut(&SituationSnapshot, Role) -> PlayCall,
{
    fn call_play(&mut self, situation: &SituationSnapshot, role: Role) -> PlayCall {
        self(situation, role)
    }
}

/// Receives every resolved play after stats are updated.
pub trait PlayByPlayObserver {
    fn on_play(&mut self, outcome: &PlayOutcome);
}

impl<F: FnMut(&PlayOutcome)> PlayByPlayObserver for F {
    fn on_play(&mut self, outcome: &PlayOutcome) {
        self(outcome)
    }
}

/// Sees the situation before each scrimmage snap, ahead of the play calls.
pub trait SituationObserver {
    fn on_situation(&mut self, situation: &SituationSnapshot);
}

impl<F: FnMut(&SituationSnapshot)> SituationObserver for F {
    fn on_situation(&mut self, situation: &SituationSnapshot) {
        self(situation)
    }
}
