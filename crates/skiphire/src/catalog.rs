//! HTTP access to the skip catalog.

use std::time::Duration;

use reqwest::Url;
use skiphire_core::catalog::{CATALOG_PATH, parse_catalog, query_pairs};
use skiphire_core::{FetchError, Location, SkipOption};

const USER_AGENT: &str = concat!("skiphire/", env!("CARGO_PKG_VERSION"));

/// Validated catalog base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEndpoint {
    base: Url,
}

impl CatalogEndpoint {
    /// Validate a configured base URL. Blank input counts as missing.
    pub fn parse(base_url: Option<&str>) -> Result<Self, FetchError> {
        let raw = base_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(FetchError::MissingBaseUrl)?;

        let base = Url::parse(raw).map_err(|e| FetchError::InvalidBaseUrl(format!("{raw}: {e}")))?;

        match base.scheme() {
            "http" | "https" => Ok(Self { base }),
            other => Err(FetchError::InvalidBaseUrl(format!(
                "{raw}: unsupported scheme '{other}'"
            ))),
        }
    }

    /// Full request URL for `location`
    pub fn url_for(&self, location: &Location) -> Result<Url, FetchError> {
        let path = format!("{}{}", self.base.as_str().trim_end_matches('/'), CATALOG_PATH);
        Url::parse_with_params(&path, query_pairs(location))
            .map_err(|e| FetchError::InvalidBaseUrl(e.to_string()))
    }
}

/// Something that can answer a catalog request
pub trait CatalogSource {
    fn fetch(&self, url: &Url) -> Result<Vec<SkipOption>, FetchError>;
}

/// Catalog source backed by a blocking reqwest client
pub struct HttpCatalog {
    client: reqwest::blocking::Client,
}

impl HttpCatalog {
    /// # Errors
    ///
    /// Returns an error if the TLS backend or client cannot be initialised.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self { client })
    }
}

impl CatalogSource for HttpCatalog {
    fn fetch(&self, url: &Url) -> Result<Vec<SkipOption>, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        parse_catalog(&body)
    }
}
