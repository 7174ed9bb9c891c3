//! Punts, field goals and extra-point kicks

use tracing::trace;

use crate::engine::dice::{Dice, DieSource};
use crate::models::{PlayOutcome, PlayResult};

/// Minimum 3d6 roll to make a kick, by yards to the goal line.
pub fn kick_threshold(field_pos: i32) -> u32 {
    match 100 - field_pos {
        i32::MIN..=3 => 5,
        4..=12 => 6,
        13..=22 => 7,
        23..=27 => 9,
        28..=32 => 10,
        33..=35 => 11,
        36..=37 => 12,
        38..=39 => 13,
        40..=42 => 14,
        43..=45 => 15,
        46..=47 => 16,
        48..=49 => 17,
        50.. => 18,
    }
}

/// Field goal attempt. A miss hands the ball over at the spot.
pub fn field_goal<S: DieSource>(dice: &mut Dice<S>, field_pos: i32) -> PlayOutcome {
    let roll = dice.roll(3, false);
    let threshold = kick_threshold(field_pos);
    trace!(roll, threshold, field_pos, "field goal attempt");

    if roll >= threshold {
        PlayOutcome::new(PlayResult::FieldGoalMade, 0)
    } else {
        PlayOutcome::turnover(PlayResult::FieldGoalMiss, 0)
    }
}

/// Kicked conversion after a touchdown.
pub fn extra_point_kick<S: DieSource>(dice: &mut Dice<S>, pat_spot: i32) -> PlayOutcome {
    let roll = dice.roll(3, false);
    if roll >= kick_threshold(pat_spot) {
        PlayOutcome::new(PlayResult::PatMade, 0)
    } else {
        PlayOutcome::new(PlayResult::PatMiss, 0)
    }
}

/// Air yards of a punt for the 2d6 distance roll.
pub fn punt_distance<S: DieSource>(dice: &mut Dice<S>, roll: u32) -> i32 {
    match roll {
        0..=2 => dice.roll_yards(2, true) + 20,
        3 => dice.roll_yards(2, true) + 25,
        4 => dice.roll_yards(2, true) + 30,
        5..=8 => dice.roll_yards(3, true) + 30,
        9..=10 => dice.roll_yards(3, true) + 35,
        11 => dice.roll_yards(3, true) + 40,
        12.. => dice.roll_yards(3, true) + 45,
    }
}

/// Return yardage, conditioned on the distance roll: short and very long
/// punts are harder to bring back.
pub fn punt_return<S: DieSource>(dice: &mut Dice<S>, distance_roll: u32) -> i32 {
    let face = dice.d6();
    // Number of return dice; zero means a fair catch or downed ball.
    let return_dice = match (face, distance_roll) {
        (1, 2) | (2, 2) => 0,
        (1, 3..=6) => 2,
        (1, _) => 3,
        (2, 3..=5) => 2,
        (2, _) => 3,
        (3, 0..=3) => 0,
        (3, 4..=8) => 2,
        (3, _) => 3,
        (4, 0..=3) => 0,
        (4, 4..=10) => 2,
        (4, _) => 3,
        (5, 0..=8) => 0,
        (5, 9..=10) => 2,
        (5, 11) => 3,
        (5, _) => 0,
        _ => 0,
    };
    dice.roll_yards(return_dice, true)
}

/// Punt: the ball always changes hands, net of the return.
pub fn punt<S: DieSource>(dice: &mut Dice<S>) -> PlayOutcome {
    let roll = dice.roll(2, false);
    let distance = punt_distance(dice, roll);
    let returned = punt_return(dice, roll);
    trace!(roll, distance, returned, "punt");
    PlayOutcome::turnover(PlayResult::PuntReturn, distance - returned)
}
