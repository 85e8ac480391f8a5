//! Manifest fetchers: HTTP for the live route, filesystem for offline runs.

use std::path::Path;

use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::manifest::Manifest;
use crate::traits::ManifestFetcher;

#[derive(Debug, Clone)]
pub struct HttpManifestFetcher {
    client: reqwest::blocking::Client,
}

impl HttpManifestFetcher {
    pub fn new(config: FetchConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client })
    }
}

impl ManifestFetcher for HttpManifestFetcher {
    fn fetch_manifest(&self, url: &str) -> Result<Manifest, FetchError> {
        let body = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.text())?;

        Ok(Manifest::from_json(&body)?)
    }
}

/// Reads the manifest from a local JSON file; `url` is a filesystem path.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileManifestFetcher;

impl ManifestFetcher for FileManifestFetcher {
    fn fetch_manifest(&self, url: &str) -> Result<Manifest, FetchError> {
        let body = std::fs::read_to_string(Path::new(url))?;
        Ok(Manifest::from_json(&body)?)
    }
}
