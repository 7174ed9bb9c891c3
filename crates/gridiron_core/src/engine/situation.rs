//! Down, distance and field position
//!
//! [`Situation`] is the single place the result of a play is applied to the
//! field: it moves the ball, manages the down series and runs the clock it
//! owns. Field position is always measured from the offense's own goal line.

use tracing::debug;

use crate::config::GameConfig;
use crate::engine::clock::Clock;
use crate::models::{Down, PlayOutcome, Side, SituationSnapshot, Snap};

pub const FIELD_LENGTH: i32 = 100;
pub const FIRST_DOWN_DISTANCE: i32 = 10;

#[derive(Debug)]
pub struct Situation {
    snap: Snap,
    distance: i32,
    field_pos: i32,
    clock: Clock,
}

impl Default for Situation {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl Situation {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            snap: Snap::default(),
            distance: FIRST_DOWN_DISTANCE,
            field_pos: 0,
            clock: Clock::new(config),
        }
    }

    pub fn snap(&self) -> Snap {
        self.snap
    }

    pub fn down(&self) -> Option<Down> {
        self.snap.down()
    }

    pub fn distance(&self) -> i32 {
        self.distance
    }

    pub fn field_pos(&self) -> i32 {
        self.field_pos
    }

    pub fn yards_to_goal(&self) -> i32 {
        FIELD_LENGTH - self.field_pos
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    /// Spot the ball for a special snap (kickoff, conversion try). Distance
    /// is measured to the goal, capped at 10, so a try from the 97 is 3 to go.
    pub fn spot(&mut self, snap: Snap, field_pos: i32) {
        self.snap = snap;
        self.field_pos = field_pos.clamp(0, FIELD_LENGTH);
        self.distance = FIRST_DOWN_DISTANCE.min(self.yards_to_goal());
    }

    pub fn set_field_pos(&mut self, field_pos: i32) {
        self.field_pos = field_pos.clamp(0, FIELD_LENGTH);
    }

    /// Start a fresh series at the current spot: first and 10, or first and
    /// goal inside the 10.
    pub fn first_down(&mut self) {
        self.snap = Snap::Scrimmage(Down::First);
        self.distance = FIRST_DOWN_DISTANCE.min(self.yards_to_goal());
    }

    /// Hand the ball to the other team: the spot is mirrored into the new
    /// offense's frame and a new series begins.
    pub fn change_possession(&mut self) {
        self.field_pos = FIELD_LENGTH - self.field_pos;
        self.first_down();
    }

    /// Apply a resolved play. This is the only place downs advance.
    ///
    /// Running out of downs marks `outcome.change_poss`; flipping the field
    /// is left to the caller so scoring can be credited first.
    pub fn notify(&mut self, outcome: &mut PlayOutcome) {
        self.field_pos = (self.field_pos + outcome.yards_gained).clamp(0, FIELD_LENGTH);
        self.distance -= outcome.yards_gained;

        if !outcome.ends_series() {
            if self.distance <= 0 {
                self.first_down();
            } else if let Snap::Scrimmage(down) = self.snap {
                let (next, turnover_on_downs) = down.next();
                self.snap = Snap::Scrimmage(next);
                if turnover_on_downs {
                    debug!(field_pos = self.field_pos, "turnover on downs");
                    outcome.change_poss = true;
                }
            }
        }

        self.clock.run_clock(outcome);
    }

    pub fn snapshot(&self, possession: Side) -> SituationSnapshot {
        SituationSnapshot {
            snap: self.snap,
            distance: self.distance,
            field_pos: self.field_pos,
            quarter: self.clock.quarter(),
            ticks: self.clock.ticks(),
            minutes: self.clock.minutes(),
            seconds: self.clock.seconds(),
            possession,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlayResult;
    use proptest::prelude::*;

    fn situation_at(snap: Snap, field_pos: i32, distance: i32) -> Situation {
        let mut situation = Situation::default();
        situation.snap = snap;
        situation.field_pos = field_pos;
        situation.distance = distance;
        situation
    }

    #[test]
    fn test_gain_short_of_line_advances_down() {
        let mut situation = situation_at(Snap::Scrimmage(Down::First), 25, 10);
        let mut run = PlayOutcome::new(PlayResult::Handoff, 4);
        situation.notify(&mut run);

        assert_eq!(situation.field_pos(), 29);
        assert_eq!(situation.distance(), 6);
        assert_eq!(situation.down(), Some(Down::Second));
        assert!(!run.change_poss);
        assert_eq!(situation.clock().ticks(), 86);
    }

    #[test]
    fn test_first_down_resets_distance() {
        let mut situation = situation_at(Snap::Scrimmage(Down::Third), 40, 3);
        let mut pass = PlayOutcome::new(PlayResult::CompletedPass, 12);
        situation.notify(&mut pass);

        assert_eq!(situation.down(), Some(Down::First));
        assert_eq!(situation.distance(), 10);
        assert_eq!(situation.field_pos(), 52);
    }

    #[test]
    fn test_first_and_goal() {
        let mut situation = situation_at(Snap::Scrimmage(Down::Second), 88, 2);
        let mut run = PlayOutcome::new(PlayResult::Handoff, 5);
        situation.notify(&mut run);

        assert_eq!(situation.down(), Some(Down::First));
        assert_eq!(situation.distance(), 7);
    }

    #[test]
    fn test_fourth_down_failure_turns_ball_over() {
        let mut situation = situation_at(Snap::Scrimmage(Down::Fourth), 60, 5);
        let mut run = PlayOutcome::new(PlayResult::Handoff, 2);
        situation.notify(&mut run);

        assert!(run.change_poss);
        assert_eq!(situation.field_pos(), 62);

        situation.change_possession();
        assert_eq!(situation.field_pos(), 38);
        assert_eq!(situation.down(), Some(Down::First));
        assert_eq!(situation.distance(), 10);
    }

    #[test]
    fn test_field_goal_on_fourth_keeps_possession() {
        let mut situation = situation_at(Snap::Scrimmage(Down::Fourth), 75, 8);
        let mut kick = PlayOutcome::new(PlayResult::FieldGoalMade, 0);
        situation.notify(&mut kick);

        assert!(!kick.change_poss);
        assert_eq!(situation.down(), Some(Down::Fourth));
        assert_eq!(situation.clock().ticks(), 89);
    }

    #[test]
    fn test_touchdown_ends_at_goal_line() {
        let mut situation = situation_at(Snap::Scrimmage(Down::First), 90, 10);
        let mut td = PlayOutcome {
            yards_gained: 10,
            ..PlayOutcome::offensive_touchdown(PlayResult::CompletedPass)
        };
        situation.notify(&mut td);

        assert_eq!(situation.field_pos(), 100);
        assert_eq!(situation.clock().ticks(), 89);
    }

    #[test]
    fn test_conversion_spot_after_touchdown() {
        let mut situation = situation_at(Snap::Scrimmage(Down::First), 90, 10);
        let mut td = PlayOutcome {
            yards_gained: 10,
            ..PlayOutcome::offensive_touchdown(PlayResult::Handoff)
        };
        situation.notify(&mut td);
        assert_eq!(situation.distance(), 0);

        situation.spot(Snap::Pat, 97);
        let snapshot = situation.snapshot(Side::Home);
        assert_eq!(snapshot.snap, Snap::Pat);
        assert_eq!(snapshot.distance, 3);
    }

    #[test]
    fn test_snapshot_copies_clock() {
        let situation = situation_at(Snap::Scrimmage(Down::Third), 62, 4);
        let snapshot = situation.snapshot(Side::Away);
        assert_eq!(snapshot.field_pos, 62);
        assert_eq!(snapshot.quarter, 1);
        assert_eq!(snapshot.minutes * 60 + snapshot.seconds, 90 * 15);
        assert_eq!(snapshot.possession, Side::Away);
    }

    proptest! {
        #[test]
        fn test_notify_moves_ball_by_gain(start in 0i32..=100, yards in -120i32..=120) {
            let mut situation = situation_at(Snap::Scrimmage(Down::Second), start, 7);
            let mut outcome = PlayOutcome::new(PlayResult::Handoff, yards);
            situation.notify(&mut outcome);

            prop_assert_eq!(situation.field_pos(), (start + yards).clamp(0, 100));
            prop_assert!(situation.down().is_some());
        }
    }
}
