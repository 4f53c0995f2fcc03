use std::path::Path;

use anyhow::{Context, Result};
use grid_engine::GameRules;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub game: GameSettings,
    #[serde(default)]
    pub recommendation: RecommendationSettings,
}

/// Where the HTTP server listens.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct AppSettings {
    #[serde(default = "defaults::host")]
    pub host: String,
    #[serde(default = "defaults::port")]
    pub port: u16,
}

/// Parameters of a fresh game; converted into [`GameRules`] for the engine.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct GameSettings {
    #[serde(default = "defaults::grid_length")]
    pub grid_length: usize,
    #[serde(default = "defaults::goal_number")]
    pub goal_number: u64,
    #[serde(default = "defaults::min_start_count")]
    pub min_start_count: usize,
    #[serde(default = "defaults::max_start_count")]
    pub max_start_count: usize,
    #[serde(default = "defaults::start_number")]
    pub start_number: u64,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct RecommendationSettings {
    /// Provider selection: "heuristic" or "auto".
    #[serde(default = "defaults::mode")]
    pub mode: String,
}

impl Settings {
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let settings: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(settings)
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            host: defaults::host(),
            port: defaults::port(),
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            grid_length: defaults::grid_length(),
            goal_number: defaults::goal_number(),
            min_start_count: defaults::min_start_count(),
            max_start_count: defaults::max_start_count(),
            start_number: defaults::start_number(),
        }
    }
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            mode: defaults::mode(),
        }
    }
}

impl From<&GameSettings> for GameRules {
    fn from(game: &GameSettings) -> Self {
        GameRules {
            grid_length: game.grid_length,
            goal: game.goal_number,
            min_start_count: game.min_start_count,
            max_start_count: game.max_start_count,
            start_number: game.start_number,
        }
    }
}

mod defaults {
    pub fn host() -> String { "127.0.0.1".to_string() }
    pub fn port() -> u16 { 8000 }
    pub fn grid_length() -> usize { 4 }
    pub fn goal_number() -> u64 { 2048 }
    pub fn min_start_count() -> usize { 2 }
    pub fn max_start_count() -> usize { 4 }
    pub fn start_number() -> u64 { 2 }
    pub fn mode() -> String { "heuristic".to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_engine_rules() {
        let settings = Settings::default();
        assert_eq!(settings.app.port, 8000);
        assert_eq!(settings.recommendation.mode, "heuristic");
        assert_eq!(GameRules::from(&settings.game), GameRules::default());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[app]\nport = 9001\n\n[game]\ngrid_length = 5\ngoal_number = 4096\n"
        )
        .unwrap();
        let settings = Settings::from_toml(file.path()).unwrap();
        assert_eq!(settings.app.host, "127.0.0.1");
        assert_eq!(settings.app.port, 9001);
        assert_eq!(settings.game.grid_length, 5);
        assert_eq!(settings.game.goal_number, 4096);
        assert_eq!(settings.game.start_number, 2);
        assert_eq!(settings.recommendation.mode, "heuristic");
    }

    #[test]
    fn malformed_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[game]\ngrid_length = \"big\"").unwrap();
        let err = Settings::from_toml(file.path()).unwrap_err();
        assert!(format!("{err}").contains("failed to parse"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Settings::from_toml(dir.path().join("absent.toml")).is_err());
    }
}
