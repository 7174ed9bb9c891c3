//! Dice rolling
//!
//! Every random decision in a game is a sum of six-sided dice. The entropy
//! behind the dice is a [`DieSource`] owned by the game, so a seeded game
//! replays exactly and tests can load the dice with fixed faces.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{GameError, Result};

pub const DIE_SIDES: u32 = 6;

/// Produces single die faces in `1..=6`.
pub trait DieSource {
    fn face(&mut self) -> u32;
}

impl DieSource for ChaCha8Rng {
    fn face(&mut self) -> u32 {
        self.gen_range(1..=DIE_SIDES)
    }
}

impl DieSource for StdRng {
    fn face(&mut self) -> u32 {
        self.gen_range(1..=DIE_SIDES)
    }
}

impl<T: DieSource + ?Sized> DieSource for &mut T {
    fn face(&mut self) -> u32 {
        (**self).face()
    }
}

impl<T: DieSource + ?Sized> DieSource for Box<T> {
    fn face(&mut self) -> u32 {
        (**self).face()
    }
}

/// Dice that replay a fixed script of faces, wrapping around at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDice {
    faces: Vec<u32>,
    cursor: usize,
}

impl LoadedDice {
    /// The script must be non-empty, hold only valid faces, and contain at
    /// least one face other than 6 so breakaway rolls terminate.
    pub fn new(faces: Vec<u32>) -> Result<Self> {
        if faces.is_empty() {
            return Err(GameError::InvalidDiceScript(
                "script must contain at least one face".to_string(),
            ));
        }
        if let Some(&face) = faces.iter().find(|f| !(1..=DIE_SIDES).contains(*f)) {
            return Err(GameError::InvalidDieFace { face });
        }
        if faces.iter().all(|&f| f == DIE_SIDES) {
            return Err(GameError::InvalidDiceScript(
                "a script of only sixes never ends a breakaway roll".to_string(),
            ));
        }
        Ok(Self { faces, cursor: 0 })
    }

    /// Faces consumed so far, counting wrap-arounds.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl DieSource for LoadedDice {
    fn face(&mut self) -> u32 {
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}

/// Dice roller over an injectable [`DieSource`].
#[derive(Debug, Clone)]
pub struct Dice<S> {
    source: S,
}

impl Dice<ChaCha8Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<S: DieSource> Dice<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// One plain die.
    pub fn d6(&mut self) -> u32 {
        self.source.face()
    }

    /// Sum of `n` dice. With `breakaway`, every 6 earns one more die, which
    /// can itself break away again.
    pub fn roll(&mut self, n: u32, breakaway: bool) -> u32 {
        let mut remaining = n;
        let mut total = 0;
        while remaining > 0 {
            remaining -= 1;
            let face = self.source.face();
            if breakaway && face == DIE_SIDES {
                remaining += 1;
            }
            total += face;
        }
        total
    }

    /// Signed convenience for yardage arithmetic.
    pub fn roll_yards(&mut self, n: u32, breakaway: bool) -> i32 {
        self.roll(n, breakaway) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(faces: &[u32]) -> Dice<LoadedDice> {
        Dice::new(LoadedDice::new(faces.to_vec()).unwrap())
    }

    #[test]
    fn test_plain_roll_sums_faces() {
        let mut dice = loaded(&[3, 6, 2]);
        assert_eq!(dice.roll(3, false), 11);
        assert_eq!(dice.source().consumed(), 3);
    }

    #[test]
    fn test_breakaway_rerolls_sixes() {
        // 6 earns a bonus die, which rolls another 6 and another bonus.
        let mut dice = loaded(&[6, 6, 1, 4]);
        assert_eq!(dice.roll(2, true), 6 + 6 + 1 + 4);
        assert_eq!(dice.source().consumed(), 4);
    }

    #[test]
    fn test_without_breakaway_six_is_just_six() {
        let mut dice = loaded(&[6, 6, 1]);
        assert_eq!(dice.roll(2, false), 12);
        assert_eq!(dice.source().consumed(), 2);
    }

    #[test]
    fn test_zero_dice_roll_nothing() {
        let mut dice = loaded(&[5]);
        assert_eq!(dice.roll(0, true), 0);
        assert_eq!(dice.source().consumed(), 0);
    }

    #[test]
    fn test_loaded_dice_validation() {
        assert!(matches!(LoadedDice::new(vec![]), Err(GameError::InvalidDiceScript(_))));
        assert!(matches!(
            LoadedDice::new(vec![1, 7]),
            Err(GameError::InvalidDieFace { face: 7 })
        ));
        assert!(LoadedDice::new(vec![6, 6]).is_err());
        assert!(LoadedDice::new(vec![6, 5]).is_ok());
    }

    #[test]
    fn test_seeded_dice_replay() {
        let mut a = Dice::seeded(42);
        let mut b = Dice::seeded(42);
        let rolls_a: Vec<u32> = (0..50).map(|_| a.roll(3, true)).collect();
        let rolls_b: Vec<u32> = (0..50).map(|_| b.roll(3, true)).collect();
        assert_eq!(rolls_a, rolls_b);
    }

    #[test]
    fn test_faces_in_range() {
        let mut dice = Dice::seeded(7);
        for _ in 0..1000 {
            let face = dice.d6();
            assert!((1..=6).contains(&face));
        }
    }
}
