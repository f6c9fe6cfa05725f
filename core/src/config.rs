// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::path::{Path, PathBuf};

use jiff::civil::Time;
use jiff::tz::TimeZone;
use serde::de;

use crate::{Error, TimeGrid};

/// The name of the dayplan application.
pub const APP_NAME: &str = "dayplan";

/// Configuration for the dayplan core.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Identifier of the user whose events are shown and created.
    pub owner: String,

    /// Directory for storing application state.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,

    /// IANA name of the viewer's time zone, the system zone if unset.
    #[serde(default)]
    pub timezone: Option<String>,

    /// Bounds of the displayed day.
    #[serde(default)]
    pub grid: GridConfig,
}

impl Config {
    /// Creates a configuration for the owner with every other field defaulted.
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            state_dir: None,
            timezone: None,
            grid: GridConfig::default(),
        }
    }

    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Error> {
        self.owner = self.owner.trim().to_string();
        if self.owner.is_empty() {
            return Err(Error::Config("owner must not be empty".to_string()));
        }

        // Normalize state directory
        match &self.state_dir {
            Some(a) => {
                self.state_dir = Some(expand_path(a).map_err(|e| {
                    Error::Config(format!("Failed to expand state directory path: {e}"))
                })?)
            }

            None => match get_state_dir() {
                Ok(a) => self.state_dir = Some(a.join(APP_NAME)),
                Err(e) => tracing::warn!(err = %e, "failed to get state directory"),
            },
        };

        Ok(())
    }

    /// The configured time zone, or the system one.
    pub fn time_zone(&self) -> Result<TimeZone, Error> {
        match &self.timezone {
            Some(name) => TimeZone::get(name)
                .map_err(|e| Error::Config(format!("Unknown time zone {name}: {e}"))),
            None => Ok(TimeZone::system()),
        }
    }

    /// The grid built from the configured bounds.
    pub fn time_grid(&self) -> Result<TimeGrid, Error> {
        TimeGrid::new(self.grid.start.0, self.grid.end.0)
    }
}

/// First and last slot start of the displayed day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub struct GridConfig {
    /// Start of the first slot, `07:00` by default.
    #[serde(default = "GridConfig::default_start")]
    pub start: ConfigTime,

    /// Start of the last slot, `20:00` by default.
    #[serde(default = "GridConfig::default_end")]
    pub end: ConfigTime,
}

impl GridConfig {
    fn default_start() -> ConfigTime {
        ConfigTime(TimeGrid::default().first().start())
    }

    fn default_end() -> ConfigTime {
        ConfigTime(TimeGrid::default().last().start())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            start: Self::default_start(),
            end: Self::default_end(),
        }
    }
}

/// A time of day written as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigTime(pub Time);

impl<'de> serde::Deserialize<'de> for ConfigTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct TimeVisitor;

        impl<'de> de::Visitor<'de> for TimeVisitor {
            type Value = ConfigTime;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(r#"a time of day like "07:00" or "20:30""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                parse_time(value).map(ConfigTime).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(TimeVisitor)
    }
}

/// Parse a time of day in the format "HH:MM".
fn parse_time(s: &str) -> Result<Time, String> {
    let (h, m) = s
        .split_once(':')
        .ok_or_else(|| format!("Invalid time format: {s}"))?;
    let hour: i8 = h.trim().parse().map_err(|e| format!("Invalid hour in {s}: {e}"))?;
    let minute: i8 = m
        .trim()
        .parse()
        .map_err(|e| format!("Invalid minute in {s}: {e}"))?;
    Time::new(hour, minute, 0, 0).map_err(|e| format!("Invalid time {s}: {e}"))
}

/// Handle tilde (~) and environment variables in the path
pub fn expand_path(path: &Path) -> Result<PathBuf, String> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, String> {
    dirs::home_dir().ok_or_else(|| "User-specific home directory not found".to_string())
}

/// The user-specific configuration directory.
pub fn get_config_dir() -> Result<PathBuf, String> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".to_string())
}

fn get_state_dir() -> Result<PathBuf, String> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_dir();
    state_dir.ok_or_else(|| "User-specific state directory not found".to_string())
}
