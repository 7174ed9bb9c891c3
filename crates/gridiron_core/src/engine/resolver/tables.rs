//! Scrimmage outcome tables
//!
//! One table per offensive call, keyed by the modified 3d6 roll (`1..=20`).
//! Each arm builds a raw outcome; goal-line handling happens afterwards in
//! [`super::apply_goal_lines`].

use tracing::trace;

use super::modifiers::Breakaway;
use crate::engine::dice::{Dice, DieSource};
use crate::models::{PlayOutcome, PlayResult};

/// Lowest and highest table rolls: 3d6 (3..=18) shifted by at most 2.
pub const MIN_TABLE_ROLL: u32 = 1;
pub const MAX_TABLE_ROLL: u32 = 20;

// ============================================================================
// Building blocks
// ============================================================================

/// Ball comes loose after the play. The defense recovers on a positive
/// difference of two dice; big differences mean a return.
pub(crate) fn add_fumble<S: DieSource>(dice: &mut Dice<S>, outcome: &mut PlayOutcome) {
    let diff = dice.d6() as i32 - dice.d6() as i32;
    if diff <= 0 {
        return;
    }

    outcome.change_poss = true;
    outcome.result = PlayResult::Fumble;
    outcome.yards_gained -= match diff {
        3 => dice.roll_yards(2, true),
        4 => dice.roll_yards(2, true) + 10,
        5 => dice.roll_yards(2, true) + 20,
        _ => 0,
    };
}

fn interception<S: DieSource>(dice: &mut Dice<S>) -> PlayOutcome {
    let yards = dice.roll_yards(3, true) - dice.roll_yards(2, true);
    PlayOutcome::turnover(PlayResult::Interception, yards)
}

fn incomplete() -> PlayOutcome {
    PlayOutcome::new(PlayResult::IncompletePass, 0)
}

fn completion<S: DieSource>(
    dice: &mut Dice<S>,
    base: i32,
    extra_dice: u32,
    breakaway: bool,
    forced: Breakaway,
) -> PlayOutcome {
    let gain = base + dice.roll_yards(extra_dice, forced.apply(breakaway));
    PlayOutcome::new(PlayResult::CompletedPass, gain)
}

fn sack<S: DieSource>(dice: &mut Dice<S>) -> PlayOutcome {
    PlayOutcome::new(PlayResult::Sack, -2 - dice.roll_yards(1, true))
}

fn scramble<S: DieSource>(dice: &mut Dice<S>) -> PlayOutcome {
    PlayOutcome::new(PlayResult::Handoff, dice.roll_yards(2, true) - 4)
}

/// Handoff gaining `base` plus `extra_dice` divided by `divisor`, rounded
/// away from zero. `loss` turns the dice into lost yardage.
fn handoff<S: DieSource>(
    dice: &mut Dice<S>,
    base: i32,
    extra_dice: u32,
    loss: bool,
    divisor: u32,
    breakaway: bool,
    forced: Breakaway,
) -> PlayOutcome {
    let breakaway = !loss && forced.apply(breakaway);
    let roll = dice.roll(extra_dice, breakaway);
    let magnitude = ((roll + divisor - 1) / divisor) as i32;
    let gain = if loss { base - magnitude } else { base + magnitude };
    PlayOutcome::new(PlayResult::Handoff, gain)
}

fn gain<S: DieSource>(
    dice: &mut Dice<S>,
    base: i32,
    extra_dice: u32,
    breakaway: bool,
    forced: Breakaway,
) -> PlayOutcome {
    handoff(dice, base, extra_dice, false, 1, breakaway, forced)
}

fn fumbled_snap<S: DieSource>(dice: &mut Dice<S>) -> PlayOutcome {
    let mut outcome = PlayOutcome::new(PlayResult::Sack, -1);
    add_fumble(dice, &mut outcome);
    outcome
}

// ============================================================================
// Sub-tables (plain 2d6)
// ============================================================================

/// Quarterback under pressure after the drop-back.
pub(crate) fn pressure<S: DieSource>(dice: &mut Dice<S>, forced: Breakaway) -> PlayOutcome {
    let roll = dice.roll(2, false);
    trace!(roll, "pressure table");
    match roll {
        0..=3 => interception(dice),
        4..=6 => sack(dice),
        7..=8 => incomplete(),
        9 => scramble(dice),
        10 => completion(dice, 0, 1, true, forced),
        11 => completion(dice, 0, 2, true, forced),
        12.. => completion(dice, 0, 3, true, forced),
    }
}

/// Something went wrong with the pass play.
pub(crate) fn mishap<S: DieSource>(dice: &mut Dice<S>, forced: Breakaway) -> PlayOutcome {
    let roll = dice.roll(2, false);
    trace!(roll, "mishap table");
    match roll {
        0..=5 => {
            let mut outcome = sack(dice);
            add_fumble(dice, &mut outcome);
            outcome
        }
        6 => interception(dice),
        7..=8 => incomplete(),
        9..=11 => {
            let mut outcome = completion(dice, 0, 2, true, forced);
            add_fumble(dice, &mut outcome);
            outcome
        }
        12.. => completion(dice, 0, 3, true, forced),
    }
}

// ============================================================================
// Call tables
// ============================================================================

pub(crate) fn short_pass<S: DieSource>(
    dice: &mut Dice<S>,
    roll: u32,
    forced: Breakaway,
) -> PlayOutcome {
    match roll {
        0..=2 => PlayOutcome::defensive_touchdown(PlayResult::Interception),
        3..=4 => interception(dice),
        5 => mishap(dice, forced),
        6 | 7 | 9 => incomplete(),
        8 => pressure(dice, forced),
        10 => completion(dice, 0, 1, false, forced),
        11 => completion(dice, 1, 1, false, forced),
        12 => completion(dice, 0, 2, false, forced),
        13 => completion(dice, 0, 2, true, forced),
        14 => completion(dice, 5, 2, true, forced),
        15 => completion(dice, 10, 2, true, forced),
        16 => completion(dice, 15, 2, true, forced),
        17 => completion(dice, 30, 3, true, forced),
        18 => completion(dice, 50, 3, true, forced),
        19.. => PlayOutcome::offensive_touchdown(PlayResult::CompletedPass),
    }
}

pub(crate) fn long_pass<S: DieSource>(
    dice: &mut Dice<S>,
    roll: u32,
    forced: Breakaway,
) -> PlayOutcome {
    match roll {
        0..=2 => PlayOutcome::defensive_touchdown(PlayResult::Interception),
        3..=4 => interception(dice),
        5 => mishap(dice, forced),
        6 => sack(dice),
        7 | 9..=11 => incomplete(),
        8 => pressure(dice, forced),
        12 => completion(dice, 2, 2, false, forced),
        13 => completion(dice, 0, 3, true, forced),
        14 => completion(dice, 5, 3, true, forced),
        15 => completion(dice, 10, 3, true, forced),
        16 => completion(dice, 15, 3, true, forced),
        17 => completion(dice, 40, 4, true, forced),
        18.. => PlayOutcome::offensive_touchdown(PlayResult::CompletedPass),
    }
}

pub(crate) fn run<S: DieSource>(dice: &mut Dice<S>, roll: u32, forced: Breakaway) -> PlayOutcome {
    match roll {
        0..=2 => PlayOutcome::defensive_touchdown(PlayResult::Fumble),
        3 => fumbled_snap(dice),
        4 => {
            // Re-roll where the ball comes out; low spots would fumble again.
            let spot = dice.roll(3, false).max(5);
            let mut outcome = run(dice, spot, forced);
            add_fumble(dice, &mut outcome);
            outcome
        }
        5 => handoff(dice, 0, 1, true, 1, false, forced),
        6 => handoff(dice, 0, 1, true, 2, false, forced),
        7 => handoff(dice, 0, 1, true, 3, false, forced),
        8 => gain(dice, 0, 0, false, forced),
        9..=10 => handoff(dice, 0, 1, false, 2, false, forced),
        11 => gain(dice, 0, 1, false, forced),
        12 => gain(dice, 1, 1, false, forced),
        13 => gain(dice, 0, 2, false, forced),
        14 => gain(dice, 0, 2, true, forced),
        15 => gain(dice, 0, 3, true, forced),
        16 => gain(dice, 5, 3, true, forced),
        17 => gain(dice, 20, 4, true, forced),
        18 => gain(dice, 40, 4, true, forced),
        19.. => PlayOutcome::offensive_touchdown(PlayResult::Handoff),
    }
}
