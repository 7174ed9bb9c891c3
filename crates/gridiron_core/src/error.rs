use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid quarter: {quarter} (must be 1..=4)")]
    InvalidQuarter { quarter: u8 },

    #[error("Invalid die face: {face} (must be 1..=6)")]
    InvalidDieFace { face: u32 },

    #[error("Invalid dice script: {0}")]
    InvalidDiceScript(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchema { found: u8, expected: u8 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GameError {
    /// Errors the caller can fix by adjusting its input and retrying.
    pub fn is_input_error(&self) -> bool {
        match self {
            GameError::InvalidQuarter { .. } => true,
            GameError::InvalidDieFace { .. } => true,
            GameError::InvalidDiceScript(_) => true,
            GameError::InvalidConfig(_) => true,
            GameError::UnsupportedSchema { .. } => true,
            GameError::Serialization(err) => err.is_syntax() || err.is_data(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
