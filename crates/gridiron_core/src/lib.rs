//! # gridiron_core - Dice-Driven American Football Simulation
//!
//! Simulates a single game play by play. Play calls from both sides go
//! through a dice-table resolver; the resulting outcome moves the ball, runs
//! the clock and drives a small phase machine (kickoff, scrimmage, touchdown,
//! conversion, halftime, final) until the game is over.
//!
//! ## Features
//! - Deterministic: a seed (or loaded dice) reproduces a game exactly
//! - Pluggable play callers and play-by-play/situation observers
//! - Clock alarms for halftime, final and the two-minute warning
//! - JSON API for driving a whole game from one request

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod strategy;

pub use api::{
    simulate_game, simulate_game_json, GameRequest, GameSummary, TeamRequest, SCHEMA_VERSION,
};
pub use config::{ExtraPointMode, GameConfig};
pub use engine::{
    AlarmType, Clock, ClockListener, Dice, DieSource, Game, GamePhase, LoadedDice,
    PlayByPlayObserver, PlayCaller, Scoreboard, Situation, SituationObserver, TeamInfo,
};
pub use error::{GameError, Result};
pub use models::{
    Down, PlayCall, PlayOutcome, PlayResult, Role, Side, SituationSnapshot, Snap, TeamStats,
};
pub use strategy::{CallerKind, FixedCaller, HeuristicCaller, ScriptedCaller};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
