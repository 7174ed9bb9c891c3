//! Simulation engine: dice, outcome resolution, clock, situation and the
//! phase-driven game loop.

pub mod clock;
pub mod dice;
pub mod game;
pub mod observers;
pub mod phase;
pub mod resolver;
pub mod situation;

pub use clock::{AlarmType, Clock, ClockListener, ListenerId};
pub use dice::{Dice, DieSource, LoadedDice};
pub use game::{Game, Scoreboard, TeamInfo};
pub use observers::{PlayByPlayObserver, PlayCaller, SituationObserver};
pub use phase::GamePhase;
pub use resolver::resolve;
pub use situation::Situation;
