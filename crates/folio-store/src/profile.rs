//! Data-directory layout and content catalog resolution.
//!
//! A profile owns one base directory (default `~/.folio`, overridable by
//! the caller) holding the preference database, an optional `folio.toml`
//! config, and an optional installed `content.json`. Content resolution
//! order: config-pointed file, installed file, built-in catalog.

use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::Deserialize;

use folio_core::{PortfolioContent, builtin, export_json, import_json};

use crate::error::{Result, StoreError};
use crate::store::Store;

const CONFIG_FILE: &str = "folio.toml";
const CONTENT_FILE: &str = "content.json";
const PREFS_FILE: &str = "preferences.db";

/// Default base directory for all folio storage.
pub fn default_base_dir() -> PathBuf {
    dirs_home().join(".folio")
}

fn dirs_home() -> PathBuf {
    env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

#[derive(Debug, Default, Deserialize)]
struct Config {
    #[serde(default)]
    content: ContentConfig,
}

#[derive(Debug, Default, Deserialize)]
struct ContentConfig {
    /// Catalog file to use instead of the installed one. Relative paths
    /// resolve against the base directory.
    path: Option<PathBuf>,
}

pub struct Profile {
    base_dir: PathBuf,
    store: Store,
}

impl Profile {
    /// Open (creating if needed) the profile at `base_dir`, or at the
    /// default location when `None`.
    pub fn open(base_dir: Option<&Path>) -> Result<Self> {
        let base_dir = base_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(default_base_dir);
        fs::create_dir_all(&base_dir)?;

        let store = Store::open(&base_dir.join(PREFS_FILE))?;
        tracing::debug!("profile opened at {}", base_dir.display());

        Ok(Self { base_dir, store })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// The catalog file that would be loaded, if any. `None` means the
    /// built-in catalog is active.
    pub fn content_path(&self) -> Result<Option<PathBuf>> {
        if let Some(path) = self.config()?.content.path {
            let resolved = if path.is_absolute() {
                path
            } else {
                self.base_dir.join(path)
            };
            return Ok(Some(resolved));
        }

        let installed = self.base_dir.join(CONTENT_FILE);
        if installed.is_file() {
            return Ok(Some(installed));
        }
        Ok(None)
    }

    /// Load and validate the active content catalog.
    pub fn load_content(&self) -> Result<PortfolioContent> {
        match self.content_path()? {
            Some(path) => {
                let json = fs::read_to_string(&path)?;
                let content = import_json(&json)?;
                tracing::debug!("loaded catalog from {}", path.display());
                Ok(content)
            }
            None => Ok(builtin()),
        }
    }

    /// Validate `json` and install it as this profile's catalog.
    pub fn install_content(&self, json: &str) -> Result<PortfolioContent> {
        let content = import_json(json)?;
        let path = self.base_dir.join(CONTENT_FILE);
        fs::write(&path, json)?;
        tracing::info!("installed catalog at {}", path.display());
        Ok(content)
    }

    /// Serialize the active catalog in the current wire format.
    pub fn export_content(&self) -> Result<String> {
        let content = self.load_content()?;
        export_json(&content).map_err(|e| StoreError::Content(e.into()))
    }

    fn config(&self) -> Result<Config> {
        let path = self.base_dir.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(Config::default());
        }
        let raw = fs::read_to_string(&path)?;
        toml::from_str(&raw)
            .map_err(|e| StoreError::Config(format!("{}: {e}", path.display())))
    }
}
