use crate::core::calculator::OvertimeRules;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Early arrivals before this time are paid at the 50% rate.
    #[serde(default = "default_early_cutoff")]
    pub early_cutoff: String,
    /// Time worked after this time is paid at the 50% rate.
    #[serde(default = "default_late_cutoff")]
    pub late_cutoff: String,
    /// Overtime blocks of this many minutes or less are not credited.
    #[serde(default = "default_min_overtime_minutes")]
    pub min_overtime_minutes: u32,
    #[serde(default = "default_format")]
    pub default_format: ExportFormat,
}

fn default_early_cutoff() -> String {
    "07:00".to_string()
}
fn default_late_cutoff() -> String {
    "21:00".to_string()
}
fn default_min_overtime_minutes() -> u32 {
    30
}
fn default_format() -> ExportFormat {
    ExportFormat::Xlsx
}

impl Default for Config {
    fn default() -> Self {
        Self {
            early_cutoff: default_early_cutoff(),
            late_cutoff: default_late_cutoff(),
            min_overtime_minutes: default_min_overtime_minutes(),
            default_format: default_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Write the default configuration, creating the parent directory.
    pub fn init_all(path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Self::default())
            .map_err(|e| AppError::Config(e.to_string()))?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(())
    }

    /// Thresholds for the overtime splitter.
    pub fn rules(&self) -> AppResult<OvertimeRules> {
        Ok(OvertimeRules {
            early_cutoff: parse_cutoff(&self.early_cutoff)?,
            late_cutoff: parse_cutoff(&self.late_cutoff)?,
            min_minutes: f64::from(self.min_overtime_minutes),
        })
    }
}

fn parse_cutoff(s: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|_| AppError::InvalidTime(s.to_string()))
}
