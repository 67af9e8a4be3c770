//! Server configuration read from the environment.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_TICK_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the websocket listener binds to (`SERVER_ADDR`)
    pub addr: SocketAddr,
    /// Time between board regenerations (`TICK_INTERVAL_SECS`)
    pub tick_interval: Duration,
    /// Fixed RNG seed for reproducible boards (`BOARD_SEED`)
    pub seed: Option<u64>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup; unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = parse(&lookup, "SERVER_ADDR")?
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)));

        let tick_secs: u64 = parse(&lookup, "TICK_INTERVAL_SECS")?.unwrap_or(DEFAULT_TICK_SECS);
        if tick_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "TICK_INTERVAL_SECS",
                value: "0".into(),
            });
        }

        let seed = parse(&lookup, "BOARD_SEED")?;

        Ok(Self {
            addr,
            tick_interval: Duration::from_secs(tick_secs),
            seed,
        })
    }

    /// RNG for board generation: seeded if `BOARD_SEED` was given
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn parse<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
