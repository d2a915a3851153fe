use crate::cycle::{validate_cycle_length, CycleCalculator, DEFAULT_CYCLE_LENGTH};
use crate::parser::{VoiceDateInterpreter, DEFAULT_MAX_DAYS_AGO};
use crate::speech::{DEFAULT_LANGUAGE, DEFAULT_SPEECH_RATE};
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "SHEWELL_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub cycle: CycleConfig,
    #[serde(default)]
    pub voice: VoiceConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleConfig {
    pub cycle_length_days: u32,
    /// Largest N accepted in "<N> days ago".
    pub max_days_ago: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    pub enabled: bool,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    pub enabled: bool,
    pub rate: f32,
    /// External program used to speak, e.g. "espeak". Logged when unset.
    pub command: Option<String>,
    pub args: Vec<String>,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self { cycle_length_days: DEFAULT_CYCLE_LENGTH, max_days_ago: DEFAULT_MAX_DAYS_AGO }
    }
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self { enabled: true, language: DEFAULT_LANGUAGE.to_string() }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self { enabled: false, rate: DEFAULT_SPEECH_RATE, command: None, args: Vec::new() }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load from `path`, writing the defaults there first if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let default_config = Config::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        validate_cycle_length(self.cycle.cycle_length_days)
            .context("Invalid [cycle] cycle_length_days")?;
        if !(self.speech.rate > 0.0 && self.speech.rate <= 10.0) {
            return Err(anyhow!(
                "Invalid [speech] rate: {} (expected a value above 0 and at most 10)",
                self.speech.rate
            ));
        }
        if self.voice.language.trim().is_empty() {
            return Err(anyhow!("Invalid [voice] language: must not be empty"));
        }
        Ok(())
    }

    pub fn calculator(&self) -> Result<CycleCalculator> {
        Ok(CycleCalculator::new(self.cycle.cycle_length_days)?)
    }

    pub fn interpreter(&self) -> VoiceDateInterpreter {
        VoiceDateInterpreter::new(self.cycle.max_days_ago)
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    let proj_dirs = ProjectDirs::from("com", "shewell", "shewell")
        .context("Failed to determine config directory")?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}
