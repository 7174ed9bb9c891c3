use serde::{Deserialize, Serialize};

/// Play calls selectable by either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum PlayCall {
    Run,
    ShortPass,
    LongPass,
    Punt,
    FieldGoal,
}

impl PlayCall {
    pub const ALL: [PlayCall; 5] = [
        PlayCall::Run,
        PlayCall::ShortPass,
        PlayCall::LongPass,
        PlayCall::Punt,
        PlayCall::FieldGoal,
    ];

    /// Row/column of the defensive modifier matrix. Kicks have none.
    pub fn scrimmage_index(self) -> Option<usize> {
        match self {
            PlayCall::Run => Some(0),
            PlayCall::ShortPass => Some(1),
            PlayCall::LongPass => Some(2),
            PlayCall::Punt | PlayCall::FieldGoal => None,
        }
    }

    pub fn is_kick(self) -> bool {
        matches!(self, PlayCall::Punt | PlayCall::FieldGoal)
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayCall::Run => "Run",
            PlayCall::ShortPass => "Short pass",
            PlayCall::LongPass => "Long pass",
            PlayCall::Punt => "Punt",
            PlayCall::FieldGoal => "Field goal",
        }
    }
}

/// Which side of the ball a caller is picking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Offense,
    Defense,
}

/// Category of what happened on a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum PlayResult {
    CompletedPass,
    IncompletePass,
    Fumble,
    Interception,
    Handoff,
    Sack,
    KickReturn,
    FieldGoalMade,
    FieldGoalMiss,
    PuntReturn,
    FieldGoalBlock,
    PatMade,
    PatMiss,
    TwoPtMade,
    TwoPtMiss,
}

impl PlayResult {
    pub fn label(self) -> &'static str {
        match self {
            PlayResult::CompletedPass => "Pass completed",
            PlayResult::IncompletePass => "Pass incomplete",
            PlayResult::Fumble => "Fumble",
            PlayResult::Interception => "Interception",
            PlayResult::Handoff => "Run",
            PlayResult::Sack => "Sacked",
            PlayResult::KickReturn => "Kick return",
            PlayResult::FieldGoalMade => "Field goal is good",
            PlayResult::FieldGoalMiss => "Field goal is missed",
            PlayResult::PuntReturn => "Punt",
            PlayResult::FieldGoalBlock => "Field goal is blocked",
            PlayResult::PatMade => "Extra point is good",
            PlayResult::PatMiss => "Extra point is missed",
            PlayResult::TwoPtMade => "Two-point conversion is good",
            PlayResult::TwoPtMiss => "Two-point conversion fails",
        }
    }

    /// Conversion tries, which only happen in the ExtraPoint phase.
    pub fn is_conversion(self) -> bool {
        matches!(
            self,
            PlayResult::PatMade | PlayResult::PatMiss | PlayResult::TwoPtMade | PlayResult::TwoPtMiss
        )
    }
}

/// Everything the rest of the engine needs to know about a resolved play.
///
/// `yards_gained` is measured from the offense's line of scrimmage toward the
/// opponent's goal and can always be added to the starting field position,
/// even when the ball changed hands during the play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    pub result: PlayResult,
    pub yards_gained: i32,
    pub change_poss: bool,
    pub touchdown: bool,
    /// The offense was downed in its own end zone without losing the ball.
    #[serde(default)]
    pub safety: bool,
}

impl PlayOutcome {
    pub fn new(result: PlayResult, yards_gained: i32) -> Self {
        Self {
            result,
            yards_gained,
            change_poss: false,
            touchdown: false,
            safety: false,
        }
    }

    pub fn turnover(result: PlayResult, yards_gained: i32) -> Self {
        Self {
            change_poss: true,
            ..Self::new(result, yards_gained)
        }
    }

    /// Offense scores outright; yardage is normalized at the goal line later.
    pub fn offensive_touchdown(result: PlayResult) -> Self {
        Self {
            touchdown: true,
            ..Self::new(result, 0)
        }
    }

    /// Defense takes the ball back for a score.
    pub fn defensive_touchdown(result: PlayResult) -> Self {
        Self {
            change_poss: true,
            touchdown: true,
            ..Self::new(result, 0)
        }
    }

    /// Touchdowns, safeties and made field goals close out the series;
    /// downs do not advance on them.
    pub fn ends_series(&self) -> bool {
        self.touchdown || self.safety || self.result == PlayResult::FieldGoalMade
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_all_calls_listed() {
        let iterated: Vec<PlayCall> = PlayCall::iter().collect();
        assert_eq!(iterated, PlayCall::ALL.to_vec());
    }

    #[test]
    fn test_only_kicks_lack_modifier_index() {
        for call in PlayCall::iter() {
            assert_eq!(call.scrimmage_index().is_none(), call.is_kick());
        }
    }

    #[test]
    fn test_every_result_has_a_label() {
        for result in PlayResult::iter() {
            assert!(!result.label().is_empty());
        }
    }

    #[test]
    fn test_constructors() {
        let td = PlayOutcome::defensive_touchdown(PlayResult::Interception);
        assert!(td.change_poss && td.touchdown);
        assert!(td.ends_series());

        let fg = PlayOutcome::new(PlayResult::FieldGoalMade, 0);
        assert!(fg.ends_series());

        let miss = PlayOutcome::turnover(PlayResult::FieldGoalMiss, 0);
        assert!(miss.change_poss);
        assert!(!miss.ends_series());
    }

    #[test]
    fn test_outcome_serializes_snake_case() {
        let json = serde_json::to_string(&PlayOutcome::new(PlayResult::CompletedPass, 12)).unwrap();
        assert!(json.contains("\"completed_pass\""));
        assert!(json.contains("\"yards_gained\":12"));
    }
}
