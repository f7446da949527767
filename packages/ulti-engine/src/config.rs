use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::state::{Seat, PLAYERS};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid {expected}: '{value}'")]
    Malformed {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
    #[error("starting dealer must be 0..=2, got {0}")]
    DealerOutOfRange(u64),
    #[error("invalid engine config json: {0}")]
    Json(String),
}

/// Settings for creating a game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Base seed for the whole game; drawn at random when absent.
    pub seed: Option<u64>,
    pub starting_dealer: Seat,
}

impl EngineConfig {
    /// Read `ULTI_SEED` and `ULTI_STARTING_DEALER`; unset variables keep defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| ConfigError::Json(e.to_string()))?;
        check_dealer(config.starting_dealer as u64)?;
        Ok(config)
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let seed = match lookup("ULTI_SEED") {
            Some(raw) => Some(parse_u64("ULTI_SEED", &raw)?),
            None => None,
        };
        let starting_dealer = match lookup("ULTI_STARTING_DEALER") {
            Some(raw) => check_dealer(parse_u64("ULTI_STARTING_DEALER", &raw)?)?,
            None => 0,
        };
        Ok(Self {
            seed,
            starting_dealer,
        })
    }
}

fn parse_u64(var: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse::<u64>().map_err(|_| ConfigError::Malformed {
        var,
        expected: "unsigned integer",
        value: raw.to_string(),
    })
}

fn check_dealer(dealer: u64) -> Result<Seat, ConfigError> {
    if dealer < PLAYERS as u64 {
        Ok(dealer as Seat)
    } else {
        Err(ConfigError::DealerOutOfRange(dealer))
    }
}
