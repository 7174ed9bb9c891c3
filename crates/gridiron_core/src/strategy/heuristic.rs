//! Situational play calling
//!
//! Fourth downs are handled by fixed punt/kick rules; everything else is a
//! weighted draw between run, short pass and long pass that leans toward
//! passing as the distance grows. Defense guesses uniformly.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::engine::PlayCaller;
use crate::models::{Down, PlayCall, Role, SituationSnapshot, Snap};

const SCRIMMAGE_CALLS: [PlayCall; 3] = [PlayCall::Run, PlayCall::ShortPass, PlayCall::LongPass];

/// Closest spot from which the offense still punts on fourth down.
pub const PUNT_LIMIT: i32 = 57;
/// Field goal range on fourth down.
pub const KICK_RANGE: i32 = 60;

#[derive(Debug, Clone)]
pub struct HeuristicCaller {
    rng: ChaCha8Rng,
}

impl HeuristicCaller {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Punt on fourth down in your own half unless it is short yardage and
    /// the coach feels lucky.
    fn should_punt(&mut self, situation: &SituationSnapshot) -> bool {
        if situation.snap != Snap::Scrimmage(Down::Fourth) || situation.field_pos > PUNT_LIMIT {
            return false;
        }
        let gut: u32 = self.rng.gen_range(1..=6);
        let distance = situation.distance;
        let field_pos = situation.field_pos;

        distance > 2
            || field_pos <= 40
            || (field_pos <= 50 && distance == 1 && gut == 6)
            || (distance == 1 && gut > 1)
            || gut == 6
    }

    fn should_kick(situation: &SituationSnapshot) -> bool {
        situation.snap == Snap::Scrimmage(Down::Fourth) && situation.field_pos >= KICK_RANGE
    }

    /// Run/short/long weights for the yards still needed.
    fn weights(distance: i32) -> [u32; 3] {
        match distance {
            i32::MIN..=3 => [6, 3, 1],
            4..=7 => [4, 4, 2],
            _ => [2, 5, 3],
        }
    }

    fn weighted_call(&mut self, distance: i32) -> PlayCall {
        let weighted: Vec<(PlayCall, u32)> = SCRIMMAGE_CALLS
            .iter()
            .copied()
            .zip(Self::weights(distance))
            .collect();
        weighted
            .choose_weighted(&mut self.rng, |(_, weight)| *weight)
            .map(|(call, _)| *call)
            .unwrap_or(PlayCall::Run)
    }
}

impl PlayCaller for HeuristicCaller {
    fn call_play(&mut self, situation: &SituationSnapshot, role: Role) -> PlayCall {
        match role {
            Role::Defense => SCRIMMAGE_CALLS[self.rng.gen_range(0..SCRIMMAGE_CALLS.len())],
            Role::Offense => {
                if situation.snap == Snap::Pat {
                    // kick the extra point, go for two when it is 1-in-6
                    return if self.rng.gen_range(1..=6) == 6 {
                        PlayCall::ShortPass
                    } else {
                        PlayCall::FieldGoal
                    };
                }
                if self.should_punt(situation) {
                    PlayCall::Punt
                } else if Self::should_kick(situation) {
                    PlayCall::FieldGoal
                } else {
                    self.weighted_call(situation.distance)
                }
            }
        }
    }
}
