//! Gridiron CLI library
//!
//! Glue between command line options and the engine's JSON API: reads rule
//! files, builds the request and writes the summary.

use anyhow::{Context, Result};
use gridiron_core::{
    simulate_game, CallerKind, GameConfig, GameRequest, GameSummary, TeamRequest, SCHEMA_VERSION,
};
use std::fs;
use std::path::Path;

/// Options for one simulated game.
#[derive(Debug, Clone, Default)]
pub struct SimulateOptions {
    pub seed: u64,
    pub home: CallerKind,
    pub away: CallerKind,
    pub home_name: Option<String>,
    pub away_name: Option<String>,
    pub config: Option<GameConfig>,
    pub play_by_play: bool,
}

/// Read and validate a rules file.
pub fn load_config(path: &Path) -> Result<GameConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    GameConfig::from_json(&json)
        .with_context(|| format!("Invalid config file: {}", path.display()))
}

pub fn build_request(options: &SimulateOptions) -> GameRequest {
    GameRequest {
        schema_version: SCHEMA_VERSION,
        seed: options.seed,
        home: TeamRequest {
            name: options.home_name.clone(),
            caller: options.home,
        },
        away: TeamRequest {
            name: options.away_name.clone(),
            caller: options.away,
        },
        config: options.config.clone(),
        include_play_by_play: options.play_by_play,
    }
}

pub fn run_simulation(options: &SimulateOptions) -> Result<GameSummary> {
    let request = build_request(options);
    simulate_game(&request).context("Simulation failed")
}

/// Serialize a summary and write it to `out`, creating parent directories.
pub fn write_summary(summary: &GameSummary, out: &Path, pretty: bool) -> Result<()> {
    let json = to_json(summary, pretty)?;
    if let Some(parent) = out.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    fs::write(out, json).with_context(|| format!("Failed to write summary: {}", out.display()))?;
    Ok(())
}

pub fn to_json(summary: &GameSummary, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(summary)?
    } else {
        serde_json::to_string(summary)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridiron_core::ExtraPointMode;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_load_config() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(br#"{"extra_point": "attempted", "seconds_per_tick": 10}"#)?;

        let config = load_config(file.path())?;
        assert_eq!(config.extra_point, ExtraPointMode::Attempted);
        assert_eq!(config.seconds_per_tick, 10);
        assert_eq!(config.quarter_ticks, 90);
        Ok(())
    }

    #[test]
    fn test_load_config_rejects_bad_spot() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(br#"{"kickoff_spot": 120}"#)?;
        assert!(load_config(file.path()).is_err());
        Ok(())
    }

    #[test]
    fn test_missing_config_file() {
        let err = load_config(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_build_request_carries_team_options() {
        let options = SimulateOptions {
            seed: 3,
            away: CallerKind::LongPass,
            away_name: Some("Hawks".to_string()),
            ..Default::default()
        };
        let request = build_request(&options);
        assert_eq!(request.schema_version, SCHEMA_VERSION);
        assert_eq!(request.home.caller, CallerKind::Heuristic);
        assert!(request.home.name.is_none());
        assert_eq!(request.away.caller, CallerKind::LongPass);
        assert_eq!(request.away.name.as_deref(), Some("Hawks"));
        assert!(!request.include_play_by_play);
    }

    #[test]
    fn test_run_and_write_summary() -> Result<()> {
        let options = SimulateOptions {
            seed: 11,
            away: CallerKind::Run,
            home_name: Some("Lions".to_string()),
            play_by_play: true,
            ..Default::default()
        };
        let summary = run_simulation(&options)?;
        assert_eq!(summary.home.name, "Lions");
        assert_eq!(summary.final_quarter, 5);

        let dir = tempdir()?;
        let out = dir.path().join("games").join("11.json");
        write_summary(&summary, &out, true)?;

        let written: GameSummary = serde_json::from_str(&fs::read_to_string(&out)?)?;
        assert_eq!(written, summary);
        Ok(())
    }

    #[test]
    fn test_same_seed_same_json() -> Result<()> {
        let options = SimulateOptions {
            seed: 5,
            ..Default::default()
        };
        let a = to_json(&run_simulation(&options)?, false)?;
        let b = to_json(&run_simulation(&options)?, false)?;
        assert_eq!(a, b);
        Ok(())
    }
}
