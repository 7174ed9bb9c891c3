use serde::{Deserialize, Serialize};

use super::play::{PlayOutcome, PlayResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

/// Per-team box score for one game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStats {
    pub passing_yards: i32,
    pub rushing_yards: i32,
    pub passing_plays: u32,
    pub completions: u32,
    pub running_plays: u32,
    /// Sacks made while on defense
    pub sacks: u32,
    /// Interceptions made while on defense
    pub interceptions: u32,
    /// Fumbles lost while on offense
    pub fumbles: u32,
}

impl TeamStats {
    pub fn total_yards(&self) -> i32 {
        self.passing_yards + self.rushing_yards
    }

    /// Credit a scrimmage play to the offense and defense that ran it.
    pub fn record_play(offense: &mut TeamStats, defense: &mut TeamStats, outcome: &PlayOutcome) {
        match outcome.result {
            PlayResult::CompletedPass => {
                offense.passing_yards += outcome.yards_gained;
                offense.completions += 1;
                offense.passing_plays += 1;
            }
            PlayResult::Handoff => {
                offense.rushing_yards += outcome.yards_gained;
                offense.running_plays += 1;
            }
            PlayResult::Sack => {
                defense.sacks += 1;
                offense.passing_yards += outcome.yards_gained;
            }
            PlayResult::Interception => {
                offense.passing_plays += 1;
                defense.interceptions += 1;
            }
            PlayResult::IncompletePass => {
                offense.passing_plays += 1;
            }
            PlayResult::Fumble => {
                offense.fumbles += 1;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_counts_as_pass_attempt() {
        let mut off = TeamStats::default();
        let mut def = TeamStats::default();
        TeamStats::record_play(&mut off, &mut def, &PlayOutcome::new(PlayResult::CompletedPass, 14));
        TeamStats::record_play(&mut off, &mut def, &PlayOutcome::new(PlayResult::IncompletePass, 0));
        assert_eq!(off.passing_plays, 2);
        assert_eq!(off.completions, 1);
        assert_eq!(off.passing_yards, 14);
        assert_eq!(def, TeamStats::default());
    }

    #[test]
    fn test_sack_credits_defense_and_charges_passing_yards() {
        let mut off = TeamStats::default();
        let mut def = TeamStats::default();
        TeamStats::record_play(&mut off, &mut def, &PlayOutcome::new(PlayResult::Sack, -6));
        assert_eq!(def.sacks, 1);
        assert_eq!(off.passing_yards, -6);
        assert_eq!(off.total_yards(), -6);
    }

    #[test]
    fn test_turnovers() {
        let mut off = TeamStats::default();
        let mut def = TeamStats::default();
        TeamStats::record_play(&mut off, &mut def, &PlayOutcome::turnover(PlayResult::Interception, 3));
        TeamStats::record_play(&mut off, &mut def, &PlayOutcome::turnover(PlayResult::Fumble, -4));
        assert_eq!(def.interceptions, 1);
        assert_eq!(off.fumbles, 1);
        assert_eq!(off.passing_plays, 1);
    }

    #[test]
    fn test_side_other() {
        assert_eq!(Side::Home.other(), Side::Away);
        assert_eq!(Side::Away.other(), Side::Home);
    }
}
