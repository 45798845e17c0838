use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::fs::config_dir;

const CURRENT_CONFIG_VERSION: u16 = 1;
const FILE_NAME: &str = "config.toml";
const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
/// Path of the bookmark collection below the API base URL.
const COLLECTION_PATH: &str = "/api/bookmarks";

/// Environment variable that overrides [`CoreConfig::api_base_url`].
pub const API_BASE_URL_VAR: &str = "SMARTMARK_API_BASE_URL";

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to access configuration file: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to write configuration file: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// The core configuration, serialized to TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    version: u16,
    api_base_url: String,
}

impl CoreConfig {
    /// Load the configuration file, creating it with defaults if it doesn't exist, then apply
    /// any override from the environment (or a `.env` file in the working directory).
    pub fn load() -> Result<Self> {
        load_env_file();

        let cfg = Self::load_from(&Self::path()?)?;
        Ok(cfg.with_env_override(env::var(API_BASE_URL_VAR).ok()))
    }

    /// Like [`load`](Self::load), but an unusable configuration file is replaced by the
    /// defaults. The environment override applies either way.
    pub fn load_or_default() -> Self {
        load_env_file();

        let env_url = env::var(API_BASE_URL_VAR).ok();
        match Self::path() {
            Ok(path) => Self::load_from_or_default(&path, env_url),
            Err(err) => {
                warn!("Using default configuration: {err}");
                Self::default().with_env_override(env_url)
            }
        }
    }

    /// Load the configuration at `path`, falling back to the defaults if it can't be read or
    /// parsed, then apply `env_url` as the base URL override.
    pub fn load_from_or_default(path: &Path, env_url: Option<String>) -> Self {
        Self::load_from(path)
            .unwrap_or_else(|err| {
                warn!("Using default configuration: {err}");
                Self::default()
            })
            .with_env_override(env_url)
    }

    /// Load the configuration at `path`, writing the defaults there first if it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            let cfg = Self::default();
            cfg.save_to(path)?;
            Ok(cfg)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;

        Ok(())
    }

    /// Replace the base URL with `value`, if there is one and it isn't blank.
    pub fn with_env_override(self, value: Option<String>) -> Self {
        match value {
            Some(url) if !url.trim().is_empty() => self.with_api_base_url(url),
            _ => self,
        }
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// The bookmark collection endpoint, e.g. `http://localhost:8080/api/bookmarks`.
    pub fn endpoint(&self) -> String {
        format!(
            "{}{COLLECTION_PATH}",
            self.api_base_url.trim_end_matches('/')
        )
    }

    fn path() -> Result<PathBuf> {
        Ok(config_dir()?.join(FILE_NAME))
    }
}

fn load_env_file() {
    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded environment from {}", path.display());
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_CONFIG_VERSION,
            api_base_url: DEFAULT_API_BASE_URL.into(),
        }
    }
}

#[cfg(test)]
mod test {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_creates_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);

        let cfg = CoreConfig::load_from(&path).unwrap();

        assert_eq!(cfg, CoreConfig::default());
        assert!(path.exists());
        assert_eq!(CoreConfig::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn test_load_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "api_base_url = \"https://bookmarks.example\"\n").unwrap();

        let cfg = CoreConfig::load_from(&path).unwrap();

        assert_eq!(cfg.api_base_url(), "https://bookmarks.example");
        assert_eq!(cfg.version, CURRENT_CONFIG_VERSION);
    }

    #[test]
    fn test_load_invalid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "api_base_url = [").unwrap();

        assert!(matches!(CoreConfig::load_from(&path), Err(Error::Parse(_))));
    }

    #[test]
    fn test_invalid_file_still_takes_env_override() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(FILE_NAME);
        fs::write(&path, "api_base_url = [").unwrap();

        let cfg = CoreConfig::load_from_or_default(&path, Some("https://api.example".into()));

        assert_eq!(cfg.endpoint(), "https://api.example/api/bookmarks");

        let cfg = CoreConfig::load_from_or_default(&path, None);

        assert_eq!(cfg, CoreConfig::default());
    }

    #[test]
    fn test_env_override() {
        let cfg = CoreConfig::default();

        assert_eq!(
            cfg.clone().with_env_override(None).api_base_url(),
            DEFAULT_API_BASE_URL
        );
        assert_eq!(
            cfg.clone()
                .with_env_override(Some("  ".into()))
                .api_base_url(),
            DEFAULT_API_BASE_URL
        );
        assert_eq!(
            cfg.with_env_override(Some("https://api.example".into()))
                .api_base_url(),
            "https://api.example"
        );
    }

    #[test]
    fn test_endpoint() {
        let cfg = CoreConfig::default();
        assert_eq!(cfg.endpoint(), "http://localhost:8080/api/bookmarks");

        let cfg = cfg.with_api_base_url("https://api.example/");
        assert_eq!(cfg.endpoint(), "https://api.example/api/bookmarks");
    }
}
