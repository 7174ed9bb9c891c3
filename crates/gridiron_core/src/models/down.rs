use serde::{Deserialize, Serialize};

/// A real down of a scrimmage series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Down {
    #[default]
    First,
    Second,
    Third,
    Fourth,
}

impl Down {
    /// Advance one down. The flag is set when the series ran out
    /// (advancing from fourth wraps to first and the ball changes hands).
    pub fn next(self) -> (Down, bool) {
        match self {
            Down::First => (Down::Second, false),
            Down::Second => (Down::Third, false),
            Down::Third => (Down::Fourth, false),
            Down::Fourth => (Down::First, true),
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Down::First => 1,
            Down::Second => 2,
            Down::Third => 3,
            Down::Fourth => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Down::First => "First down",
            Down::Second => "Second down",
            Down::Third => "Third down",
            Down::Fourth => "Fourth down",
        }
    }
}

/// What kind of snap the ball is spotted for.
///
/// Kickoffs and conversion tries are not downs, so they are kept apart from
/// the down counter instead of being extra `Down` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Snap {
    Scrimmage(Down),
    Kickoff,
    Pat,
}

impl Default for Snap {
    fn default() -> Self {
        Snap::Scrimmage(Down::First)
    }
}

impl Snap {
    pub fn down(self) -> Option<Down> {
        match self {
            Snap::Scrimmage(down) => Some(down),
            Snap::Kickoff | Snap::Pat => None,
        }
    }

    pub fn is_scrimmage(self) -> bool {
        matches!(self, Snap::Scrimmage(_))
    }
}
