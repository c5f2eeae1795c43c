//! Run configuration: which renderer and policies to wire together.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How the game is shown.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum RendererKind {
    /// Line-based text output.
    Console,
    /// Full-screen terminal UI.
    Terminal,
}

/// Where a role's moves come from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum PolicyKind {
    /// Human typing `row col` lines.
    Console,
    /// Human pressing keys 1-9 in the terminal UI.
    Keyboard,
    /// Uniform choice among legal moves.
    Random,
    /// Lowest free cell.
    FirstLegal,
}

/// Configuration for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Renderer used for every frame.
    #[serde(default = "default_renderer")]
    renderer: RendererKind,

    /// Policy for the primary role (player A, moves first).
    #[serde(default = "default_primary")]
    primary: PolicyKind,

    /// Policy for the secondary role (player B).
    #[serde(default = "default_secondary")]
    secondary: PolicyKind,

    /// Seed for random policies; OS entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Number of episodes to play back to back.
    #[serde(default = "default_episodes")]
    episodes: u32,

    /// Print episode summaries as JSON lines.
    #[serde(default)]
    json: bool,
}

fn default_renderer() -> RendererKind {
    RendererKind::Console
}

fn default_primary() -> PolicyKind {
    PolicyKind::Console
}

fn default_secondary() -> PolicyKind {
    PolicyKind::Random
}

fn default_episodes() -> u32 {
    1
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            renderer: default_renderer(),
            primary: default_primary(),
            secondary: default_secondary(),
            seed: None,
            episodes: default_episodes(),
            json: false,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            renderer = %config.renderer,
            primary = %config.primary,
            secondary = %config.secondary,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }

    /// Applies command-line overrides; `None` keeps the current value.
    pub fn with_overrides(
        mut self,
        renderer: Option<RendererKind>,
        primary: Option<PolicyKind>,
        secondary: Option<PolicyKind>,
        seed: Option<u64>,
        episodes: Option<u32>,
        json: bool,
    ) -> Self {
        self.renderer = renderer.unwrap_or(self.renderer);
        self.primary = primary.unwrap_or(self.primary);
        self.secondary = secondary.unwrap_or(self.secondary);
        self.seed = seed.or(self.seed);
        self.episodes = episodes.unwrap_or(self.episodes);
        self.json |= json;
        self
    }

    /// Rejects combinations that cannot run.
    ///
    /// The secondary role answers inside `step` before anything is redrawn,
    /// so it must be an automatic policy. Line input does not work under the
    /// full-screen renderer and key presses are only read there. JSON
    /// summaries go to stdout, which the full-screen renderer owns.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if matches!(self.secondary, PolicyKind::Console | PolicyKind::Keyboard) {
            return Err(ConfigError::new(format!(
                "secondary policy '{}' is interactive; use 'random' or 'first_legal'",
                self.secondary
            )));
        }
        for (role, kind) in [("primary", self.primary), ("secondary", self.secondary)] {
            match (kind, self.renderer) {
                (PolicyKind::Console, RendererKind::Terminal) => {
                    return Err(ConfigError::new(format!(
                        "{} policy 'console' needs the console renderer",
                        role
                    )));
                }
                (PolicyKind::Keyboard, RendererKind::Console) => {
                    return Err(ConfigError::new(format!(
                        "{} policy 'keyboard' needs the terminal renderer",
                        role
                    )));
                }
                _ => {}
            }
        }
        if self.episodes == 0 {
            return Err(ConfigError::new("episodes must be at least 1".to_string()));
        }
        if self.json && self.renderer == RendererKind::Terminal {
            return Err(ConfigError::new(
                "JSON summaries need the console renderer".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
