use anyhow::{Context, Result};
use chrono::NaiveDate;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::Schedule;

fn default_total_goal() -> u32 {
    20
}
fn default_password_suffix() -> String {
    "pen".to_string()
}

/// Which day the pacing message treats as day one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PacingBaseline {
    /// Whole challenge window, bonus week included.
    #[default]
    Window,
    /// From the first graded week onward.
    Graded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeConfig {
    /// Overall target in graded days. Set on its own, not summed from weekly goals.
    #[serde(default = "default_total_goal")]
    pub total_goal: u32,
    #[serde(default)]
    pub pacing_baseline: PacingBaseline,
    #[serde(default)]
    pub weeks: Schedule,
}

impl Default for ChallengeConfig {
    fn default() -> Self {
        Self {
            total_goal: default_total_goal(),
            pacing_baseline: PacingBaseline::default(),
            weeks: Schedule::default(),
        }
    }
}

impl ChallengeConfig {
    /// The `(start, end)` span used to compute the expected pace.
    pub fn pacing_window(&self) -> (NaiveDate, NaiveDate) {
        let start = match self.pacing_baseline {
            PacingBaseline::Window => self.weeks.start(),
            PacingBaseline::Graded => self.weeks.graded_start(),
        };
        (start, self.weeks.end())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RosterConfig {
    #[serde(default)]
    pub members: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Appended to today's `YYYYMMDD` to form the organizer password.
    #[serde(default = "default_password_suffix")]
    pub password_suffix: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            password_suffix: default_password_suffix(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("roster member names cannot be blank")]
    BlankMember,
    #[error("'{0}' appears more than once in the roster")]
    DuplicateMember(String),
    #[error("total_goal must be at least 1")]
    ZeroTotalGoal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub challenge: ChallengeConfig,
    #[serde(default)]
    pub roster: RosterConfig,
    #[serde(default)]
    pub admin: AdminConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "dailywrite")
            .context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.data_dir().to_path_buf())
    }

    pub fn db_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("dailywrite.db"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Read and validate a config file; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        config.validate().context("Validating config.toml")?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }

    /// Checks that serde alone can't express. The week schedule validates
    /// itself while deserializing.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.challenge.total_goal == 0 {
            return Err(ConfigError::ZeroTotalGoal);
        }
        let mut seen = HashSet::new();
        for member in &self.roster.members {
            if member.trim().is_empty() {
                return Err(ConfigError::BlankMember);
            }
            if !seen.insert(member.as_str()) {
                return Err(ConfigError::DuplicateMember(member.clone()));
            }
        }
        Ok(())
    }

    pub fn ensure_data_dir() -> Result<PathBuf> {
        let dir = Self::data_dir()?;
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}
