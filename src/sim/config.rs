use std::path::PathBuf;

use log::warn;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use toml::Value;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SimConfig {
    pub log_level: u64,
    pub json: Option<PathBuf>,
}

pub trait Config: DeserializeOwned + Default {
    fn from_section(section: Option<&Value>) -> Result<Self, toml::de::Error> {
        match section {
            Some(value) => value.clone().try_into(),
            None => {
                warn!("config section not found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

impl Config for SimConfig {}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            log_level: 0,
            json: None,
        }
    }
}

/// Shape of the simulated system, used to synthesize the controller list
/// when running standalone.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct SystemConfig {
    pub num_cpus: usize,
    pub num_dirs: usize,
    pub cache_levels: usize,
    pub num_dma: usize,
}

impl Config for SystemConfig {}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            num_cpus: 16,
            num_dirs: 4,
            cache_levels: 3,
            num_dma: 0,
        }
    }
}
