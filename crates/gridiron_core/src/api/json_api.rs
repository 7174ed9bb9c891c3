//! JSON entry point
//!
//! One request simulates one game and returns the final summary. Everything
//! a game needs (seed, callers, rules) is in the request, so the same request
//! always produces the same response.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::GameConfig;
use crate::engine::{Dice, Game, TeamInfo};
use crate::error::{GameError, Result};
use crate::models::{PlayOutcome, Side, SituationSnapshot, TeamStats};
use crate::strategy::CallerKind;

pub const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GameRequest {
    pub schema_version: u8,
    pub seed: u64,
    #[serde(default)]
    pub home: TeamRequest,
    #[serde(default)]
    pub away: TeamRequest,
    /// Rule overrides; omitted fields keep their defaults.
    #[serde(default)]
    pub config: Option<GameConfig>,
    #[serde(default)]
    pub include_play_by_play: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TeamRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub caller: CallerKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub name: String,
    pub score: u32,
    pub stats: TeamStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
    pub number: u32,
    /// Situation before the snap; conversion tries have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub situation: Option<SituationSnapshot>,
    pub outcome: PlayOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub schema_version: u8,
    pub seed: u64,
    pub home: TeamSummary,
    pub away: TeamSummary,
    pub winner: Option<Side>,
    pub final_quarter: u8,
    pub plays: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_by_play: Option<Vec<PlayRecord>>,
}

#[derive(Debug, Default)]
struct PlayLog {
    before_snap: Option<SituationSnapshot>,
    records: Vec<PlayRecord>,
}

/// Simulate the game described by `request`.
pub fn simulate_game(request: &GameRequest) -> Result<GameSummary> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(GameError::UnsupportedSchema {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    let config = request.config.clone().unwrap_or_default();
    config.validate()?;

    let seed = request.seed;
    let home = team_info(&request.home, "Home", seed.wrapping_add(1));
    let away = team_info(&request.away, "Away", seed.wrapping_add(2));
    let mut game = Game::new(home, away, Dice::seeded(seed), config);

    let log = Rc::new(RefCell::new(PlayLog::default()));
    if request.include_play_by_play {
        let situations = Rc::clone(&log);
        game.register_situation_observer(move |situation: &SituationSnapshot| {
            situations.borrow_mut().before_snap = Some(*situation);
        });
        let plays = Rc::clone(&log);
        game.register_play_by_play(move |outcome: &PlayOutcome| {
            let mut log = plays.borrow_mut();
            let situation = log.before_snap.take();
            let number = log.records.len() as u32 + 1;
            log.records.push(PlayRecord {
                number,
                situation,
                outcome: *outcome,
            });
        });
    }

    info!(seed, "simulating game");
    let score = game.run();

    let summary_of = |side: Side| {
        let team = game.team(side);
        TeamSummary {
            name: team.name.clone(),
            score: team.score,
            stats: team.stats.clone(),
        }
    };

    let play_by_play = request
        .include_play_by_play
        .then(|| std::mem::take(&mut log.borrow_mut().records));

    Ok(GameSummary {
        schema_version: SCHEMA_VERSION,
        seed,
        home: summary_of(Side::Home),
        away: summary_of(Side::Away),
        winner: score.winner(),
        final_quarter: game.situation().clock().quarter(),
        plays: game.plays(),
        play_by_play,
    })
}

/// JSON in, JSON out wrapper around [`simulate_game`].
pub fn simulate_game_json(request_json: &str) -> Result<String> {
    let request: GameRequest = serde_json::from_str(request_json)?;
    let summary = simulate_game(&request)?;
    Ok(serde_json::to_string(&summary)?)
}

fn team_info(request: &TeamRequest, default_name: &str, seed: u64) -> TeamInfo {
    let name = request.name.clone().unwrap_or_else(|| default_name.to_string());
    TeamInfo::boxed(name, request.caller.build(seed))
}
