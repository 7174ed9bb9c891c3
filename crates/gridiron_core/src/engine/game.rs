//! Single-game driver
//!
//! A [`Game`] owns both team records, the [`Situation`] (and through it the
//! clock), the current [`GamePhase`], the dice and the observer registries.
//! `step` runs one phase; `run` steps until the game is final.
//!
//! Clock alarms never interrupt a play. The clock queues them while the play
//! is applied, and the game turns them into phase changes once the phase step
//! has returned.

use std::fmt;

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{ExtraPointMode, GameConfig};
use crate::engine::clock::{AlarmType, ClockListener, ListenerId};
use crate::engine::dice::{Dice, DieSource};
use crate::engine::observers::{PlayByPlayObserver, PlayCaller, SituationObserver};
use crate::engine::phase::{self, GamePhase};
use crate::engine::resolver::{self, kicking};
use crate::engine::situation::Situation;
use crate::models::{PlayCall, PlayOutcome, PlayResult, Role, Side, SituationSnapshot, TeamStats};

pub const FIELD_GOAL_POINTS: u32 = 3;
pub const KICKED_CONVERSION_POINTS: u32 = 1;
pub const TWO_POINT_CONVERSION_POINTS: u32 = 2;
pub const TIMEOUTS_PER_HALF: u8 = 3;

// ============================================================================
// Teams
// ============================================================================

pub struct TeamInfo {
    pub name: String,
    pub score: u32,
    pub timeouts: u8,
    pub stats: TeamStats,
    caller: Box<dyn PlayCaller>,
}

impl TeamInfo {
    pub fn new(name: impl Into<String>, caller: impl PlayCaller + 'static) -> Self {
        Self::boxed(name, Box::new(caller))
    }

    pub fn boxed(name: impl Into<String>, caller: Box<dyn PlayCaller>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            timeouts: TIMEOUTS_PER_HALF,
            stats: TeamStats::default(),
            caller,
        }
    }

    fn call_play(&mut self, situation: &SituationSnapshot, role: Role) -> PlayCall {
        self.caller.call_play(situation, role)
    }
}

impl fmt::Debug for TeamInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TeamInfo")
            .field("name", &self.name)
            .field("score", &self.score)
            .field("timeouts", &self.timeouts)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    pub home: u32,
    pub away: u32,
}

impl Scoreboard {
    pub fn winner(&self) -> Option<Side> {
        match self.home.cmp(&self.away) {
            std::cmp::Ordering::Greater => Some(Side::Home),
            std::cmp::Ordering::Less => Some(Side::Away),
            std::cmp::Ordering::Equal => None,
        }
    }
}

// ============================================================================
// Game
// ============================================================================

pub struct Game<S: DieSource = ChaCha8Rng> {
    home: TeamInfo,
    away: TeamInfo,
    possession: Side,
    situation: Situation,
    phase: GamePhase,
    dice: Dice<S>,
    config: GameConfig,
    play_observers: Vec<Box<dyn PlayByPlayObserver>>,
    situation_observers: Vec<Box<dyn SituationObserver>>,
    pending_alarms: Vec<AlarmType>,
    plays: u32,
}

impl Game<ChaCha8Rng> {
    /// Default rules, dice seeded from `seed`.
    pub fn with_seed(home: TeamInfo, away: TeamInfo, seed: u64) -> Self {
        Self::new(home, away, Dice::seeded(seed), GameConfig::default())
    }
}

impl<S: DieSource> Game<S> {
    /// Set up a game at the opening kickoff. The home team kicks.
    ///
    /// `config` is taken as given; use [`GameConfig::validate`] on untrusted
    /// input first.
    pub fn new(home: TeamInfo, away: TeamInfo, dice: Dice<S>, config: GameConfig) -> Self {
        let mut situation = Situation::new(&config);
        phase::enter(GamePhase::Kickoff, &mut situation, &config);

        Self {
            home,
            away,
            possession: Side::Home,
            situation,
            phase: GamePhase::Kickoff,
            dice,
            config,
            play_observers: Vec::new(),
            situation_observers: Vec::new(),
            pending_alarms: Vec::new(),
            plays: 0,
        }
    }

    // ------------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------------

    pub fn register_play_by_play(&mut self, observer: impl PlayByPlayObserver + 'static) {
        self.play_observers.push(Box::new(observer));
    }

    pub fn register_situation_observer(&mut self, observer: impl SituationObserver + 'static) {
        self.situation_observers.push(Box::new(observer));
    }

    pub fn register_clock_listener(
        &mut self,
        alarm: AlarmType,
        listener: impl ClockListener + 'static,
    ) -> ListenerId {
        self.situation.clock_mut().set_alarm(alarm, listener)
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn possession(&self) -> Side {
        self.possession
    }

    pub fn situation(&self) -> &Situation {
        &self.situation
    }

    pub fn snapshot(&self) -> SituationSnapshot {
        self.situation.snapshot(self.possession)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn dice(&self) -> &Dice<S> {
        &self.dice
    }

    pub fn team(&self, side: Side) -> &TeamInfo {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard {
            home: self.home.score,
            away: self.away.score,
        }
    }

    /// Snaps played so far, conversion tries included.
    pub fn plays(&self) -> u32 {
        self.plays
    }

    /// Alarms that fired but have not been acted on yet.
    pub fn pending_alarms(&self) -> &[AlarmType] {
        &self.pending_alarms
    }

    // ------------------------------------------------------------------------
    // Driving loop
    // ------------------------------------------------------------------------

    /// Run the current phase once and move to the phase it selects, letting
    /// any clock alarm override that choice. Returns the new phase.
    pub fn step(&mut self) -> GamePhase {
        if self.phase.is_terminal() {
            return self.phase;
        }

        let mut next = phase::step(self.phase, self);

        let fired = self.situation.clock_mut().take_fired_alarms();
        self.pending_alarms.extend(fired);
        if !next.defers_alarms() {
            if let Some(forced) = self.apply_alarms() {
                next = forced;
            }
        }

        self.transition(next);
        self.phase
    }

    /// Step until the game is final.
    pub fn run(&mut self) -> Scoreboard {
        while !self.is_over() {
            self.step();
        }
        let score = self.scoreboard();
        info!(
            home = score.home,
            away = score.away,
            plays = self.plays,
            "final: {} {} - {} {}",
            self.home.name,
            score.home,
            score.away,
            self.away.name
        );
        score
    }

    fn apply_alarms(&mut self) -> Option<GamePhase> {
        let mut forced = None;
        for alarm in std::mem::take(&mut self.pending_alarms) {
            info!(?alarm, quarter = self.situation.clock().quarter(), "clock alarm");
            if let Some(phase) = phase::alarm_phase(alarm) {
                forced = Some(phase);
            }
        }
        forced
    }

    fn transition(&mut self, next: GamePhase) {
        if next == self.phase {
            return;
        }
        debug!(from = ?self.phase, to = ?next, "phase change");
        phase::exit(self.phase, &mut self.situation, &self.config);
        phase::enter(next, &mut self.situation, &self.config);
        self.phase = next;
    }

    // ------------------------------------------------------------------------
    // Phase actions
    // ------------------------------------------------------------------------

    pub(crate) fn set_possession(&mut self, side: Side) {
        self.possession = side;
    }

    /// Give the ball to the other team and start a new series for it.
    pub(crate) fn change_possession(&mut self) {
        self.possession = self.possession.other();
        self.situation.change_possession();
    }

    /// Snap one scrimmage play: observers, calls, resolution, field update,
    /// stats, scoring and possession change.
    pub(crate) fn play_from_scrimmage(&mut self) -> PlayOutcome {
        let snapshot = self.snapshot();
        for observer in self.situation_observers.iter_mut() {
            observer.on_situation(&snapshot);
        }

        let (offense_call, defense_call) = self.call_plays(&snapshot);
        let mut outcome = resolver::resolve(
            &mut self.dice,
            offense_call,
            defense_call,
            snapshot.field_pos,
            self.config.touchback_spot,
        );
        self.situation.notify(&mut outcome);

        let (offense, defense) = self.teams_mut();
        TeamStats::record_play(&mut offense.stats, &mut defense.stats, &outcome);
        self.plays += 1;
        self.notify_play(&outcome);

        if outcome.safety {
            info!(scoring = ?self.possession.other(), "safety");
            self.award(self.possession.other(), self.config.safety_points);
        } else if outcome.result == PlayResult::FieldGoalMade {
            info!(scoring = ?self.possession, "field goal");
            self.award(self.possession, FIELD_GOAL_POINTS);
        }

        if outcome.change_poss {
            self.change_possession();
        }

        outcome
    }

    pub(crate) fn score_touchdown(&mut self) {
        info!(scoring = ?self.possession, "touchdown");
        let points = self.config.extra_point.touchdown_points();
        self.award(self.possession, points);
    }

    /// Conversion try. The offense's call picks a kick or a two-point play;
    /// nothing is snapped when conversions are automatic.
    pub(crate) fn attempt_conversion(&mut self) {
        if self.config.extra_point == ExtraPointMode::Automatic {
            return;
        }

        let snapshot = self.snapshot();
        let (offense_call, defense_call) = self.call_plays(&snapshot);
        let outcome = if offense_call.is_kick() {
            kicking::extra_point_kick(&mut self.dice, self.config.pat_spot)
        } else {
            let attempt = resolver::resolve(
                &mut self.dice,
                offense_call,
                defense_call,
                snapshot.field_pos,
                self.config.touchback_spot,
            );
            if attempt.touchdown && !attempt.change_poss {
                PlayOutcome::new(PlayResult::TwoPtMade, attempt.yards_gained)
            } else {
                PlayOutcome::new(PlayResult::TwoPtMiss, 0)
            }
        };

        let points = match outcome.result {
            PlayResult::PatMade => KICKED_CONVERSION_POINTS,
            PlayResult::TwoPtMade => TWO_POINT_CONVERSION_POINTS,
            _ => 0,
        };
        debug!(result = ?outcome.result, points, "conversion");
        self.award(self.possession, points);
        self.plays += 1;
        self.notify_play(&outcome);
    }

    fn call_plays(&mut self, snapshot: &SituationSnapshot) -> (PlayCall, PlayCall) {
        let (offense, defense) = self.teams_mut();
        let offense_call = offense.call_play(snapshot, Role::Offense);
        let defense_call = defense.call_play(snapshot, Role::Defense);
        (offense_call, defense_call)
    }

    fn notify_play(&mut self, outcome: &PlayOutcome) {
        for observer in self.play_observers.iter_mut() {
            observer.on_play(outcome);
        }
    }

    fn award(&mut self, side: Side, points: u32) {
        let team = match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        };
        team.score += points;
    }

    /// (offense, defense) for the current possession.
    fn teams_mut(&mut self) -> (&mut TeamInfo, &mut TeamInfo) {
        match self.possession {
            Side::Home => (&mut self.home, &mut self.away),
            Side::Away => (&mut self.away, &mut self.home),
        }
    }
}
