use serde::{Deserialize, Serialize};

use super::down::Snap;
use super::team::Side;

/// Read-only copy of the game situation handed to play callers and
/// situation observers before each snap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SituationSnapshot {
    pub snap: Snap,
    pub distance: i32,
    /// Yards from the offense's own goal line (0..=100)
    pub field_pos: i32,
    pub quarter: u8,
    pub ticks: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub possession: Side,
}

impl SituationSnapshot {
    pub fn yards_to_goal(&self) -> i32 {
        100 - self.field_pos
    }

    pub fn is_goal_to_go(&self) -> bool {
        self.field_pos + self.distance >= 100
    }

    /// "Third and 4 from the 62 yard line" style description.
    pub fn describe(&self) -> String {
        let lead = match self.snap {
            Snap::Scrimmage(down) => {
                let to_go = if self.is_goal_to_go() {
                    "goal".to_string()
                } else {
                    self.distance.to_string()
                };
                format!("{} and {}", down.label(), to_go)
            }
            Snap::Kickoff => "Kickoff".to_string(),
            Snap::Pat => "Conversion try".to_string(),
        };
        format!(
            "{} from the {} yard line, {:02}:{:02} remaining in quarter {}",
            lead, self.field_pos, self.minutes, self.seconds, self.quarter
        )
    }
}
