use std::{fs, io, path::PathBuf};

use serde::{Deserialize, Serialize};
use smartmark_lib::fs::config_dir;
use thiserror::Error;

use crate::config::theme::Theme;

mod theme;

const CURRENT_CONFIG_VERSION: u16 = 1;
const FILE_NAME: &str = "gui.toml";

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to access GUI configuration: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to write GUI configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Front end settings, serialized to TOML next to the core configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    version: u16,
    pub theme: Theme,
}

impl GuiConfig {
    /// Load the settings file. A missing file is created with defaults; an unreadable one is
    /// ignored in favor of the defaults.
    pub fn load() -> Result<Self, Error> {
        let path = Self::path()?;

        if path.exists() {
            let contents = fs::read_to_string(path)?;
            Ok(toml::from_str(&contents).unwrap_or_default())
        } else {
            let cfg = Self::default();
            cfg.save()?;
            Ok(cfg)
        }
    }

    pub fn save(&self) -> Result<(), Error> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(Self::path()?, contents)?;

        Ok(())
    }

    pub fn theme(&self) -> iced::Theme {
        (&self.theme).into()
    }

    fn path() -> Result<PathBuf, Error> {
        Ok(config_dir()?.join(FILE_NAME))
    }
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_CONFIG_VERSION,
            theme: Theme::default(),
        }
    }
}
