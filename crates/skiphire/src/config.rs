//! Application configuration.
//!
//! Values are layered, highest precedence first:
//! 1. command line flags
//! 2. the `SKIPHIRE_BASE_URL` environment variable (base URL only)
//! 3. `{data_dir}/config.yaml`
//! 4. built-in defaults

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use skiphire_core::{DEFAULT_PAGE_SIZE, FetchError, Location};

use crate::catalog::CatalogEndpoint;

/// Environment variable holding the catalog base URL
pub const BASE_URL_ENV: &str = "SKIPHIRE_BASE_URL";

const CONFIG_FILE_NAME: &str = "config.yaml";

/// Contents of `config.yaml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    pub postcode: String,
    pub area: String,
    pub page_size: usize,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            postcode: "NR32".to_string(),
            area: "Lowestoft".to_string(),
            page_size: DEFAULT_PAGE_SIZE.get(),
            request_timeout_secs: 15,
        }
    }
}

/// Values given on the command line; `None` leaves the lower layer alone
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub postcode: Option<String>,
    pub area: Option<String>,
    pub page_size: Option<usize>,
}

impl AppConfig {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE_NAME)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    /// Load `config.yaml`, falling back to defaults if it is missing or invalid.
    pub fn load_or_default(data_dir: &Path) -> Self {
        let path = Self::path(data_dir);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_yaml(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "Invalid config file, using defaults");
                Self::default()
            }),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Could not read config file, using defaults");
                Self::default()
            }
        }
    }

    /// Apply environment variables through `lookup` (normally `std::env::var`).
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // A blank variable counts as unset
        if let Some(url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.base_url = Some(url);
        }
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(url) = overrides.base_url {
            self.base_url = Some(url);
        }
        if let Some(postcode) = overrides.postcode {
            self.postcode = postcode;
        }
        if let Some(area) = overrides.area {
            self.area = area;
        }
        if let Some(page_size) = overrides.page_size {
            self.page_size = page_size;
        }
    }

    /// Resolve every layer for `data_dir`
    pub fn resolve(data_dir: &Path, overrides: ConfigOverrides) -> Self {
        let mut config = Self::load_or_default(data_dir);
        config.apply_env(|key| std::env::var(key).ok());
        config.apply_overrides(overrides);
        config
    }

    pub fn location(&self) -> Location {
        Location::new(self.postcode.trim(), self.area.trim())
    }

    /// Configured page size; zero falls back to the default
    pub fn page_size(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.page_size).unwrap_or_else(|| {
            tracing::warn!("page_size must be positive, using {}", DEFAULT_PAGE_SIZE);
            DEFAULT_PAGE_SIZE
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Validate the base URL. Failure is reported through the fetch
    /// lifecycle rather than stopping the app.
    pub fn endpoint(&self) -> Result<CatalogEndpoint, FetchError> {
        CatalogEndpoint::parse(self.base_url.as_deref())
    }
}
