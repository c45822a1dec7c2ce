//! Configuration and data directory management.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::defaults::Defaults;
use crate::error::{Error, Result};
use crate::sheets::{SheetKind, SheetSources};

pub const DEFAULT_PORT: u16 = 3003;
pub const DEFAULT_CACHE_KEY: &str = "portfolio_data_v1";
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60);
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Paths to the Folio data directories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// Key-value cache directory (`data/cache/`).
    pub cache: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory. Creates directories if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        let paths = Self {
            cache: root.join("cache"),
            root,
        };
        std::fs::create_dir_all(&paths.cache)?;
        Ok(paths)
    }
}

/// How ids of sheet-derived records are generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// `<prefix>-sheet-<row index>`. Changes when rows are reordered.
    #[default]
    Row,
    /// `<prefix>-sheet-<hash>` from the row's fields. Survives reordering.
    Hash,
}

impl std::str::FromStr for IdStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "row" | "index" => Ok(Self::Row),
            "hash" | "content" => Ok(Self::Hash),
            other => Err(Error::Config(format!("unknown id strategy: {}", other))),
        }
    }
}

/// Top-level Folio configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolioConfig {
    /// HTTP server port.
    pub port: u16,
    /// Data directory paths.
    pub data_paths: DataPaths,
    /// Published CSV URL per sheet.
    pub sources: SheetSources,
    /// Name of the cache entry holding the assembled content.
    pub cache_key: String,
    /// Age after which the cached content is refetched.
    pub cache_ttl: Duration,
    /// Upper bound for a single sheet fetch.
    pub fetch_timeout: Duration,
    pub id_strategy: IdStrategy,
    /// JSON file replacing the built-in defaults.
    pub defaults_file: Option<PathBuf>,
}

impl FolioConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env(data_dir: impl AsRef<Path>) -> Result<Self> {
        Self::from_lookup(data_dir, |key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(data_dir: impl AsRef<Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = var("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let mut sources = SheetSources::default();
        for kind in SheetKind::ALL {
            sources.set(kind, var(&format!("FOLIO_SHEET_{}_URL", kind.env_suffix())));
        }

        let cache_ttl = var("FOLIO_CACHE_TTL_SECS")
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_CACHE_TTL);

        let fetch_timeout = var("FOLIO_FETCH_TIMEOUT_SECS")
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_FETCH_TIMEOUT);
        if fetch_timeout.is_zero() {
            return Err(Error::Config(
                "FOLIO_FETCH_TIMEOUT_SECS must be at least 1".into(),
            ));
        }

        let id_strategy = match var("FOLIO_ID_STRATEGY") {
            Some(s) => s.parse()?,
            None => IdStrategy::default(),
        };

        let data_paths = DataPaths::new(data_dir)?;

        Ok(Self {
            port,
            data_paths,
            sources,
            cache_key: var("FOLIO_CACHE_KEY").unwrap_or_else(|| DEFAULT_CACHE_KEY.into()),
            cache_ttl,
            fetch_timeout,
            id_strategy,
            defaults_file: var("FOLIO_DEFAULTS_FILE").map(PathBuf::from),
        })
    }

    /// Defaults from `defaults_file`, or the built-in set.
    pub fn load_defaults(&self) -> Result<Defaults> {
        match &self.defaults_file {
            Some(path) => Defaults::load(path),
            None => Ok(Defaults::builtin()),
        }
    }
}
