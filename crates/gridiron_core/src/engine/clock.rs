//! Game clock
//!
//! Time is kept in ticks: `quarter_ticks` per quarter, each worth
//! `seconds_per_tick` seconds of game time. Plays run ticks off the clock and
//! an expired quarter rolls over automatically.
//!
//! Alarms (halftime, final, two-minute warning) are delivered to registered
//! listeners synchronously, in registration order, and also queued so the
//! game loop can pick them up once the play has been fully processed.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::models::{PlayOutcome, PlayResult};

pub const REGULATION_QUARTERS: u8 = 4;

/// Clock-triggered events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlarmType {
    /// Second quarter ended
    Halftime,
    /// Fourth quarter ended
    Final,
    /// Two minutes left in the second or fourth quarter
    TwoMinuteWarning,
}

impl AlarmType {
    fn slot(self) -> usize {
        match self {
            AlarmType::Halftime => 0,
            AlarmType::Final => 1,
            AlarmType::TwoMinuteWarning => 2,
        }
    }
}

/// Receives alarms from a [`Clock`].
pub trait ClockListener {
    fn on_clock_event(&mut self, alarm: AlarmType);
}

impl<F: FnMut(AlarmType)> ClockListener for F {
    fn on_clock_event(&mut self, alarm: AlarmType) {
        self(alarm)
    }
}

/// Handle for a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId {
    pub alarm: AlarmType,
    pub index: usize,
}

pub struct Clock {
    quarter: u8,
    /// Signed so a long play can overshoot zero before the quarter rolls.
    ticks: i32,
    quarter_ticks: u32,
    seconds_per_tick: u32,
    warning_ticks: u32,
    warned: bool,
    listeners: [Vec<Box<dyn ClockListener>>; 3],
    fired: Vec<AlarmType>,
}

impl fmt::Debug for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clock")
            .field("quarter", &self.quarter)
            .field("ticks", &self.ticks)
            .field("quarter_ticks", &self.quarter_ticks)
            .field("seconds_per_tick", &self.seconds_per_tick)
            .field("fired", &self.fired)
            .finish_non_exhaustive()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl Clock {
    /// Full quarter remaining in the first quarter.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            quarter: 1,
            ticks: config.quarter_ticks as i32,
            quarter_ticks: config.quarter_ticks,
            seconds_per_tick: config.seconds_per_tick,
            warning_ticks: config.two_minute_warning_ticks(),
            warned: false,
            listeners: [Vec::new(), Vec::new(), Vec::new()],
            fired: Vec::new(),
        }
    }

    /// Remaining ticks, never negative.
    pub fn ticks(&self) -> u32 {
        self.ticks.max(0) as u32
    }

    pub fn quarter(&self) -> u8 {
        self.quarter
    }

    /// Regulation is over once the quarter counter passed the fourth.
    pub fn is_expired(&self) -> bool {
        self.quarter > REGULATION_QUARTERS
    }

    /// Move to quarter `n`. Only regulation quarters are accepted; on error
    /// the clock is left untouched.
    #[must_use = "an invalid quarter leaves the clock unchanged"]
    pub fn set_quarter(&mut self, n: u8) -> Result<u8> {
        if !(1..=REGULATION_QUARTERS).contains(&n) {
            return Err(GameError::InvalidQuarter { quarter: n });
        }
        self.quarter = n;
        Ok(n)
    }

    /// Whole minutes left in the quarter (5:30 -> 5).
    pub fn minutes(&self) -> u32 {
        self.ticks().saturating_mul(self.seconds_per_tick) / 60
    }

    /// Seconds past the whole minute (5:30 -> 30).
    pub fn seconds(&self) -> u32 {
        self.ticks().saturating_mul(self.seconds_per_tick) % 60
    }

    /// Remaining time as `MM:SS`.
    pub fn time_remaining(&self) -> String {
        format!("{:02}:{:02}", self.minutes(), self.seconds())
    }

    /// Ticks a play takes off the clock.
    pub fn runoff(outcome: &PlayOutcome) -> u32 {
        if outcome.touchdown {
            return 1;
        }
        match outcome.result {
            PlayResult::Handoff | PlayResult::CompletedPass | PlayResult::Sack => 4,
            PlayResult::IncompletePass
            | PlayResult::Interception
            | PlayResult::Fumble
            | PlayResult::KickReturn
            | PlayResult::PuntReturn
            | PlayResult::FieldGoalMade
            | PlayResult::FieldGoalMiss
            | PlayResult::FieldGoalBlock => 1,
            PlayResult::PatMade
            | PlayResult::PatMiss
            | PlayResult::TwoPtMade
            | PlayResult::TwoPtMiss => 0,
        }
    }

    /// Run the clock after a play. Returns the ticks consumed.
    pub fn run_clock(&mut self, outcome: &PlayOutcome) -> u32 {
        let runoff = Self::runoff(outcome);
        self.ticks -= runoff as i32;

        if self.ticks <= 0 {
            self.advance_quarter();
        } else if self.in_warning_quarter() && !self.warned && self.ticks() <= self.warning_ticks {
            self.warned = true;
            self.fire(AlarmType::TwoMinuteWarning);
        }

        runoff
    }

    /// End the current quarter: fire halftime/final as appropriate, then
    /// start the next quarter with a full clock.
    pub fn advance_quarter(&mut self) -> u8 {
        match self.quarter {
            2 => self.fire(AlarmType::Halftime),
            4 => self.fire(AlarmType::Final),
            _ => {}
        }

        self.quarter = self.quarter.saturating_add(1);
        self.ticks = self.quarter_ticks as i32;
        self.warned = false;
        info!(quarter = self.quarter, "quarter started");

        self.quarter
    }

    /// Register `listener` for `alarm`. Listeners live as long as the clock.
    pub fn set_alarm(
        &mut self,
        alarm: AlarmType,
        listener: impl ClockListener + 'static,
    ) -> ListenerId {
        let slot = &mut self.listeners[alarm.slot()];
        slot.push(Box::new(listener));
        ListenerId {
            alarm,
            index: slot.len() - 1,
        }
    }

    pub fn listener_count(&self, alarm: AlarmType) -> usize {
        self.listeners[alarm.slot()].len()
    }

    /// Alarms fired since the last call, oldest first.
    pub fn take_fired_alarms(&mut self) -> Vec<AlarmType> {
        std::mem::take(&mut self.fired)
    }

    fn in_warning_quarter(&self) -> bool {
        self.quarter == 2 || self.quarter == 4
    }

    fn fire(&mut self, alarm: AlarmType) {
        for listener in self.listeners[alarm.slot()].iter_mut() {
            listener.on_clock_event(alarm);
        }
        self.fired.push(alarm);
    }
}
