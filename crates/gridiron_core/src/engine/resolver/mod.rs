//! Outcome resolver
//!
//! Pure function of (offensive call, defensive call, field position, dice)
//! to a [`PlayOutcome`]:
//!
//! 1. The defensive call yields a roll modifier (and possibly a forced
//!    breakaway setting) from the 2d6 matchup roll.
//! 2. The offense rolls 3d6 plus the modifier, clamped to `1..=20`.
//! 3. The clamped roll selects a row from the offensive call's table.
//! 4. Goal lines are applied: touchdowns, safeties and touchbacks.

pub mod kicking;
pub mod modifiers;
pub mod tables;

use tracing::debug;

use crate::engine::dice::{Dice, DieSource};
use crate::models::{PlayCall, PlayOutcome};

pub use kicking::kick_threshold;
pub use modifiers::{defensive_modifier, roll_matchup, Breakaway, Matchup, DEFENSIVE_MODS};
pub use tables::{MAX_TABLE_ROLL, MIN_TABLE_ROLL};

/// Resolve one snap from `field_pos` (yards from the offense's own goal).
///
/// `touchback_spot` is where the receiving team takes over when a change of
/// possession carries the ball past the far goal line.
pub fn resolve<S: DieSource>(
    dice: &mut Dice<S>,
    offense: PlayCall,
    defense: PlayCall,
    field_pos: i32,
    touchback_spot: i32,
) -> PlayOutcome {
    let raw = match offense {
        PlayCall::Punt => kicking::punt(dice),
        PlayCall::FieldGoal => kicking::field_goal(dice, field_pos),
        PlayCall::Run | PlayCall::ShortPass | PlayCall::LongPass => {
            let matchup = roll_matchup(dice, offense, defense);
            let roll = table_roll(dice.roll(3, false), matchup.modifier);
            table_outcome(dice, offense, roll, matchup.breakaway)
        }
    };

    let outcome = apply_goal_lines(raw, field_pos, touchback_spot);
    debug!(?offense, ?defense, field_pos, ?outcome, "play resolved");
    outcome
}

/// Clamp a modified roll into the table domain.
pub fn table_roll(base: u32, modifier: i32) -> u32 {
    (base as i32 + modifier).clamp(MIN_TABLE_ROLL as i32, MAX_TABLE_ROLL as i32) as u32
}

/// Raw (pre goal line) outcome for a scrimmage call and table roll.
/// Kicks do not use the tables and fall back to their own resolution.
pub fn table_outcome<S: DieSource>(
    dice: &mut Dice<S>,
    offense: PlayCall,
    roll: u32,
    breakaway: Breakaway,
) -> PlayOutcome {
    match offense {
        PlayCall::Run => tables::run(dice, roll, breakaway),
        PlayCall::ShortPass => tables::short_pass(dice, roll, breakaway),
        PlayCall::LongPass => tables::long_pass(dice, roll, breakaway),
        PlayCall::Punt => kicking::punt(dice),
        // Without a spot the kick is taken from the opponent's 20.
        PlayCall::FieldGoal => kicking::field_goal(dice, 80),
    }
}

/// Settle a raw outcome against both goal lines.
///
/// - A gain reaching the far goal is a touchdown capped at the goal line,
///   unless the ball changed hands, which makes it a touchback.
/// - A loss reaching the offense's own goal stops there: a defensive
///   touchdown after a turnover, otherwise a safety.
/// - Touchdown yardage always ends exactly on the scoring goal line.
pub fn apply_goal_lines(mut outcome: PlayOutcome, field_pos: i32, touchback_spot: i32) -> PlayOutcome {
    let end = field_pos + outcome.yards_gained;

    if !outcome.touchdown {
        if end >= 100 {
            if outcome.change_poss {
                outcome.yards_gained = (100 - touchback_spot) - field_pos;
            } else {
                outcome.touchdown = true;
            }
        } else if end <= 0 {
            outcome.yards_gained = -field_pos;
            if outcome.change_poss {
                outcome.touchdown = true;
            } else {
                outcome.safety = true;
            }
        }
    }

    if outcome.touchdown {
        outcome.yards_gained = if outcome.change_poss {
            -field_pos
        } else {
            100 - field_pos
        };
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::dice::LoadedDice;
    use crate::models::PlayResult;
    use proptest::prelude::*;
    use strum::IntoEnumIterator;

    const TOUCHBACK: i32 = 20;

    #[test]
    fn test_gain_past_goal_is_capped_touchdown() {
        let raw = PlayOutcome::new(PlayResult::CompletedPass, 40);
        let outcome = apply_goal_lines(raw, 90, TOUCHBACK);
        assert!(outcome.touchdown);
        assert_eq!(outcome.yards_gained, 10);
    }

    #[test]
    fn test_automatic_touchdown_normalized() {
        let raw = PlayOutcome::offensive_touchdown(PlayResult::Handoff);
        assert_eq!(apply_goal_lines(raw, 35, TOUCHBACK).yards_gained, 65);

        let raw = PlayOutcome::defensive_touchdown(PlayResult::Interception);
        let outcome = apply_goal_lines(raw, 35, TOUCHBACK);
        assert_eq!(outcome.yards_gained, -35);
        assert!(outcome.change_poss);
    }

    #[test]
    fn test_loss_behind_own_goal_is_safety() {
        let raw = PlayOutcome::new(PlayResult::Sack, -8);
        let outcome = apply_goal_lines(raw, 3, TOUCHBACK);
        assert!(outcome.safety);
        assert!(!outcome.touchdown);
        assert_eq!(outcome.yards_gained, -3);
    }

    #[test]
    fn test_turnover_behind_own_goal_is_defensive_touchdown() {
        let raw = PlayOutcome::turnover(PlayResult::Fumble, -15);
        let outcome = apply_goal_lines(raw, 10, TOUCHBACK);
        assert!(outcome.touchdown && outcome.change_poss);
        assert_eq!(outcome.yards_gained, -10);
    }

    #[test]
    fn test_punt_into_end_zone_is_touchback() {
        let raw = PlayOutcome::turnover(PlayResult::PuntReturn, 50);
        let outcome = apply_goal_lines(raw, 60, TOUCHBACK);
        assert!(!outcome.touchdown);
        // receiving team takes over at its own 20
        assert_eq!(100 - (60 + outcome.yards_gained), TOUCHBACK);
    }

    #[test]
    fn test_resolve_run_with_loaded_dice() {
        // matchup 2d6 = 7 (run vs run: +0), table 3d6 = 4+4+4 = 12 -> 1 + d6
        let mut dice = Dice::new(LoadedDice::new(vec![3, 4, 4, 4, 4, 5]).unwrap());
        let outcome = resolve(&mut dice, PlayCall::Run, PlayCall::Run, 30, TOUCHBACK);
        assert_eq!(outcome, PlayOutcome::new(PlayResult::Handoff, 6));
    }

    #[test]
    fn test_table_roll_clamps() {
        assert_eq!(table_roll(3, -2), 1);
        assert_eq!(table_roll(18, 2), 20);
        assert_eq!(table_roll(10, 1), 11);
        assert_eq!(table_roll(0, -5), MIN_TABLE_ROLL);
    }

    fn allowed_results(call: PlayCall) -> &'static [PlayResult] {
        match call {
            PlayCall::Run => &[PlayResult::Handoff, PlayResult::Fumble, PlayResult::Sack],
            PlayCall::ShortPass | PlayCall::LongPass => &[
                PlayResult::CompletedPass,
                PlayResult::IncompletePass,
                PlayResult::Interception,
                PlayResult::Fumble,
                PlayResult::Sack,
                PlayResult::Handoff,
            ],
            PlayCall::Punt => &[PlayResult::PuntReturn],
            PlayCall::FieldGoal => &[PlayResult::FieldGoalMade, PlayResult::FieldGoalMiss],
        }
    }

    #[test]
    fn test_every_table_row_resolves() {
        for call in PlayCall::iter() {
            for roll in MIN_TABLE_ROLL..=MAX_TABLE_ROLL {
                for seed in 0..20 {
                    let mut dice = Dice::seeded(seed);
                    let outcome = table_outcome(&mut dice, call, roll, Breakaway::Table);
                    assert!(
                        allowed_results(call).contains(&outcome.result),
                        "{call:?} roll {roll} gave {:?}",
                        outcome.result
                    );
                }
            }
        }
    }

    proptest! {
        #[test]
        fn prop_resolution_stays_on_the_field(
            seed in any::<u64>(),
            field_pos in 1i32..100,
            off in 0usize..5,
            def in 0usize..5,
        ) {
            let offense = PlayCall::ALL[off];
            let defense = PlayCall::ALL[def];
            let mut dice = Dice::seeded(seed);
            let outcome = resolve(&mut dice, offense, defense, field_pos, TOUCHBACK);

            prop_assert!(allowed_results(offense).contains(&outcome.result));
            let end = field_pos + outcome.yards_gained;
            prop_assert!((0..=100).contains(&end));
            if outcome.touchdown {
                prop_assert_eq!(end, if outcome.change_poss { 0 } else { 100 });
            }
            if outcome.safety {
                prop_assert_eq!(end, 0);
                prop_assert!(!outcome.change_poss);
            }
        }
    }
}
