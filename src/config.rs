use squad_core::GroupSize;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_GENERATED_ROSTER_SIZE: usize = 40;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a number, got '{value}'")]
    NotANumber { name: &'static str, value: String },

    #[error("GROUP_SIZE must be between 5 and 11, got {0}")]
    GroupSizeOutOfRange(u64),

    #[error("unknown MODE '{0}', expected SINGLE or OVERVIEW")]
    UnknownMode(String),

    #[error("unknown OUTPUT '{0}', expected TEXT or JSON")]
    UnknownOutput(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum RosterSource {
    Bundled,
    File(PathBuf),
    Generated { seed: u64, size: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Single,
    Overview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub group_size: GroupSize,
    pub roster: RosterSource,
    pub mode: RunMode,
    pub output: OutputFormat,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let group_size = match read("GROUP_SIZE") {
            Some(value) => {
                let size = parse_number("GROUP_SIZE", &value)?;
                u8::try_from(size)
                    .ok()
                    .and_then(GroupSize::new)
                    .ok_or(ConfigError::GroupSizeOutOfRange(size))?
            }
            None => GroupSize::default(),
        };

        let roster = match (read("ROSTER_SEED"), read("ROSTER_PATH")) {
            (Some(seed), _) => RosterSource::Generated {
                seed: parse_number("ROSTER_SEED", &seed)?,
                size: match read("ROSTER_SIZE") {
                    Some(size) => parse_number("ROSTER_SIZE", &size)? as usize,
                    None => DEFAULT_GENERATED_ROSTER_SIZE,
                },
            },
            (None, Some(path)) => RosterSource::File(PathBuf::from(path)),
            (None, None) => RosterSource::Bundled,
        };

        let mode = match read("MODE").map(|v| v.to_uppercase()).as_deref() {
            None | Some("SINGLE") => RunMode::Single,
            Some("OVERVIEW") => RunMode::Overview,
            Some(other) => return Err(ConfigError::UnknownMode(other.to_string())),
        };

        let output = match read("OUTPUT").map(|v| v.to_uppercase()).as_deref() {
            None | Some("TEXT") => OutputFormat::Text,
            Some("JSON") => OutputFormat::Json,
            Some(other) => return Err(ConfigError::UnknownOutput(other.to_string())),
        };

        Ok(AppConfig {
            group_size,
            roster,
            mode,
            output,
        })
    }
}

fn parse_number(name: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.parse().map_err(|_| ConfigError::NotANumber {
        name,
        value: value.to_string(),
    })
}
