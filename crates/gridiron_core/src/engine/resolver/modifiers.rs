//! Defensive modifier matrix
//!
//! Before the offense rolls, the defense's call shifts the roll by a value
//! looked up from a 2d6 roll. Some matchup/roll pairs also force the
//! breakaway rule on or off for the offense's gain dice.

use tracing::trace;

use crate::engine::dice::{Dice, DieSource};
use crate::models::PlayCall;

/// Indexed `[offense][defense][2d6 - 2]` with run, short pass, long pass.
pub const DEFENSIVE_MODS: [[[i32; 11]; 3]; 3] = [
    [
        [1, 0, 0, 0, 0, 0, 0, -1, -1, -1, -2],
        [2, 1, 1, 1, 0, 0, 0, 0, 0, 0, -1],
        [1, 1, 0, 0, 0, 0, 0, 0, 0, -1, -1],
    ],
    [
        [1, 1, 0, 0, 0, 0, 0, 0, 0, -1, -1],
        [1, 0, 0, 0, 0, 0, 0, -1, -1, -1, -2],
        [2, 1, 1, 1, 0, 0, 0, 0, 0, 0, -1],
    ],
    [
        [2, 1, 1, 1, 0, 0, 0, 0, 0, 0, -1],
        [2, 1, 1, 1, 0, 0, 0, 0, 0, 0, -1],
        [1, 0, 0, 0, 0, 0, 0, -1, -1, -1, -2],
    ],
];

/// Breakaway setting for the gain dice of a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Breakaway {
    /// Use whatever the outcome table says.
    #[default]
    Table,
    Always,
    Never,
}

impl Breakaway {
    pub fn apply(self, table: bool) -> bool {
        match self {
            Breakaway::Table => table,
            Breakaway::Always => true,
            Breakaway::Never => false,
        }
    }
}

/// Result of sizing up the two calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Matchup {
    pub modifier: i32,
    pub breakaway: Breakaway,
}

/// Modifier for a given 2d6 `roll`. Zero whenever either side called a kick.
pub fn defensive_modifier(offense: PlayCall, defense: PlayCall, roll: u32) -> Matchup {
    let (Some(off), Some(def)) = (offense.scrimmage_index(), defense.scrimmage_index()) else {
        return Matchup::default();
    };
    let roll = roll.clamp(2, 12);

    Matchup {
        modifier: DEFENSIVE_MODS[off][def][(roll - 2) as usize],
        breakaway: forced_breakaway(offense, defense, roll),
    }
}

/// Roll 2d6 for the matchup. Kicks skip the roll entirely.
pub fn roll_matchup<S: DieSource>(
    dice: &mut Dice<S>,
    offense: PlayCall,
    defense: PlayCall,
) -> Matchup {
    if offense.is_kick() || defense.is_kick() {
        return Matchup::default();
    }
    let roll = dice.roll(2, false);
    let matchup = defensive_modifier(offense, defense, roll);
    trace!(?offense, ?defense, roll, ?matchup, "defensive modifier");
    matchup
}

fn forced_breakaway(offense: PlayCall, defense: PlayCall, roll: u32) -> Breakaway {
    use PlayCall::*;

    match (offense, defense, roll) {
        // Defense guessed the call: no big play on these rolls.
        (Run, Run, 8 | 11) | (ShortPass, ShortPass, 8 | 11) | (LongPass, LongPass, 8 | 11) => {
            Breakaway::Never
        }
        (ShortPass, Run, 10) | (LongPass, ShortPass, 10) => Breakaway::Never,

        // Defense sold out for the wrong thing.
        (Run, ShortPass | LongPass, 3 | 6) => Breakaway::Always,
        (ShortPass, LongPass, 3 | 6) | (LongPass, Run, 3 | 6) => Breakaway::Always,
        (ShortPass, Run, 4) | (LongPass, ShortPass, 4) => Breakaway::Always,

        _ => Breakaway::Table,
    }
}
