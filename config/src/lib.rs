//! Board configuration for dayspan.
//!
//! The file format is TOML, read from `~/.dayspan/config.toml` unless a path
//! is given explicitly:
//!
//! ```toml
//! [refresh]
//! interval_ms = 250
//!
//! [[cards]]
//! id = "arrival"
//! label = "Days since arrival"
//! date = "2016-01-15"
//!
//! [featured]
//! id = "deadline"
//! date = "2027-09-23T09:30"
//! ```
//!
//! Raw file structs deserialize leniently; [`Board::from_config`] turns them
//! into validated [`TargetSpec`]s. Every date is parsed here, once, so the
//! engine never sees malformed input.

mod datetime;

pub use datetime::parse_target_datetime;

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use toml::de::Error as TomlError;

use dayspan_types::{TargetId, TargetSpec};

/// One display frame at 60 Hz.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(16);

/// Small cards shown when no config file exists: `(id, label, date)`.
const BUILTIN_CARDS: [(&str, Option<&str>, &str); 4] = [
    ("gold", None, "2014-09-06"),
    ("bronze", None, "2015-07-28"),
    ("arrival", Some("Days since arrival"), "2016-01-15"),
    ("application", Some("Days since application"), "2024-11-26"),
];

const BUILTIN_FEATURED: (&str, &str) = ("deadline", "2027-09-23");

#[derive(Debug, Default, Deserialize)]
pub struct DayspanConfig {
    pub refresh: Option<RefreshConfig>,
    /// Small cards, in display order.
    #[serde(default)]
    pub cards: Vec<CardConfig>,
    /// The single large card.
    pub featured: Option<CardConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RefreshConfig {
    /// Milliseconds between refresh ticks. Default: 16.
    pub interval_ms: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CardConfig {
    pub id: String,
    pub label: Option<String>,
    /// `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM[:SS[.fff]]`, no offset.
    pub date: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: TomlError,
    },
    #[error("card #{index} has an empty id")]
    EmptyId { index: usize },
    #[error("card id `{id}` is configured more than once")]
    DuplicateId { id: TargetId },
    #[error("card `{id}` has an invalid target date-time `{raw}`: {source}")]
    InvalidTarget {
        id: TargetId,
        raw: String,
        source: chrono::ParseError,
    },
    #[error("refresh interval must be greater than zero")]
    InvalidInterval,
}

impl ConfigError {
    /// The file involved, for read and parse failures.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => Some(path),
            _ => None,
        }
    }
}

impl DayspanConfig {
    fn builtin() -> Self {
        let card = |id: &str, label: Option<&str>, date: &str| CardConfig {
            id: id.to_string(),
            label: label.map(str::to_string),
            date: date.to_string(),
        };
        let (featured_id, featured_date) = BUILTIN_FEATURED;

        Self {
            refresh: None,
            cards: BUILTIN_CARDS
                .iter()
                .map(|&(id, label, date)| card(id, label, date))
                .collect(),
            featured: Some(card(featured_id, None, featured_date)),
        }
    }

    pub fn parse(content: &str) -> Result<Self, TomlError> {
        toml::from_str(content)
    }

    /// Load from `path`. A missing file is an error here; see [`Board::load`]
    /// for the default-location fallback.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match Self::parse(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }
}

/// Validated cards plus refresh cadence. Built once at startup and handed to
/// the driver; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cards: Vec<TargetSpec>,
    featured: Option<TargetSpec>,
    interval: Duration,
}

impl Board {
    #[must_use]
    pub fn new(cards: Vec<TargetSpec>, featured: Option<TargetSpec>, interval: Duration) -> Self {
        Self {
            cards,
            featured,
            interval,
        }
    }

    /// Explicit path: must exist. No path: the default location if present,
    /// otherwise the built-in board.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            let board = Self::from_config(DayspanConfig::load_from(path)?)?;
            tracing::info!(path = %path.display(), cards = board.len(), "Loaded board");
            return Ok(board);
        }

        match config_path() {
            Some(path) if path.exists() => {
                let board = Self::from_config(DayspanConfig::load_from(&path)?)?;
                tracing::info!(path = %path.display(), cards = board.len(), "Loaded board");
                Ok(board)
            }
            _ => {
                tracing::info!("No config file found, using built-in board");
                Self::builtin()
            }
        }
    }

    /// The default board. Validated like any file-backed board.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_config(DayspanConfig::builtin())
    }

    pub fn from_config(config: DayspanConfig) -> Result<Self, ConfigError> {
        let interval = match config.refresh.and_then(|r| r.interval_ms) {
            Some(0) => return Err(ConfigError::InvalidInterval),
            Some(ms) => Duration::from_millis(ms),
            None => DEFAULT_REFRESH_INTERVAL,
        };

        let mut seen = HashSet::new();
        let mut index = 0;
        let mut build = |card: CardConfig| -> Result<TargetSpec, ConfigError> {
            index += 1;
            let spec = target_spec(card, index)?;
            if !seen.insert(spec.id().clone()) {
                return Err(ConfigError::DuplicateId {
                    id: spec.id().clone(),
                });
            }
            Ok(spec)
        };

        let cards = config
            .cards
            .into_iter()
            .map(&mut build)
            .collect::<Result<Vec<_>, _>>()?;
        let featured = config.featured.map(&mut build).transpose()?;

        if cards.is_empty() && featured.is_none() {
            tracing::warn!("Board has no cards configured");
        }

        Ok(Self::new(cards, featured, interval))
    }

    #[must_use]
    pub fn cards(&self) -> &[TargetSpec] {
        &self.cards
    }

    #[must_use]
    pub fn featured(&self) -> Option<&TargetSpec> {
        self.featured.as_ref()
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Total number of cards, featured included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len() + usize::from(self.featured.is_some())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn target_spec(card: CardConfig, index: usize) -> Result<TargetSpec, ConfigError> {
    let id = TargetId::new(card.id).map_err(|_| ConfigError::EmptyId { index })?;
    let target = match parse_target_datetime(&card.date) {
        Ok(target) => target,
        Err(source) => {
            return Err(ConfigError::InvalidTarget {
                id,
                raw: card.date,
                source,
            });
        }
    };
    Ok(TargetSpec::new(id, card.label, target, card.date.trim()))
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".dayspan").join("config.toml"))
}
