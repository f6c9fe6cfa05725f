// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use dayplan_core::{APP_NAME, Config as CoreConfig, RecurrenceKind, get_config_dir};

const DAYPLAN_CONFIG_ENV: &str = "DAYPLAN_CONFIG";

/// Color of new events when none is given on the command line.
pub const DEFAULT_COLOR: &str = "#2196f3";

#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<(CoreConfig, Config), Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(DAYPLAN_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            return Err(format!("No config found at: {}", config.display()).into());
        }
        config
    };

    tracing::debug!(path = %path.display(), "reading config file");
    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map(|a| (a.core, a.cli))
}

/// Configuration for the dayplan command line.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// Color of new events, as `#rrggbb`.
    #[serde(default = "Config::default_color")]
    pub default_color: String,

    /// Recurrence of new events.
    #[serde(default)]
    pub default_recurrence: RecurrenceKind,
}

impl Config {
    fn default_color() -> String {
        DEFAULT_COLOR.to_string()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_color: Self::default_color(),
            default_recurrence: RecurrenceKind::default(),
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    core: CoreConfig,

    #[serde(default)]
    cli: Config,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}
