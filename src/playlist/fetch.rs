//! Playlist acquisition: HTTP download with an on-disk cache.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;

use crate::config::PlaylistConfig;

/// Hard ceiling on one playlist download.
const FETCH_TIMEOUT: Duration = Duration::from_secs(120);

/// Downloads the playlist, reusing a cached copy while it is fresh.
pub struct PlaylistSource {
    client: Client,
    cache_path: PathBuf,
    max_age: Duration,
}

impl PlaylistSource {
    pub fn new(config: &PlaylistConfig) -> Self {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(config.user_agent.as_str())
            .cookie_store(true)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                Client::new()
            });

        Self {
            client,
            cache_path: config.cache_path.clone(),
            max_age: Duration::from_secs(config.max_age_hours.saturating_mul(3600)),
        }
    }

    /// Return the playlist text, downloading only when the cache is stale.
    pub async fn acquire(&self, url: &str) -> Result<String> {
        if self.cache_is_fresh() {
            tracing::info!("Using cached playlist: {:?}", self.cache_path);
            return std::fs::read_to_string(&self.cache_path)
                .with_context(|| format!("Failed to read cached playlist: {:?}", self.cache_path));
        }

        let body = self.download(url).await?;
        self.persist(&body)?;
        Ok(body)
    }

    fn cache_is_fresh(&self) -> bool {
        if self.max_age.is_zero() {
            return false;
        }
        let modified = match std::fs::metadata(&self.cache_path).and_then(|m| m.modified()) {
            Ok(t) => t,
            Err(_) => return false,
        };
        match modified.elapsed() {
            Ok(age) => age < self.max_age,
            // A modification time in the future still counts as fresh.
            Err(_) => true,
        }
    }

    async fn download(&self, url: &str) -> Result<String> {
        tracing::info!("Downloading playlist from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to GET {}", url))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Playlist server returned HTTP {}", status);
        }

        response
            .text()
            .await
            .context("Failed to read playlist body")
    }

    fn persist(&self, body: &str) -> Result<()> {
        let dir = match self.cache_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create cache directory: {:?}", parent))?;
                parent
            }
            _ => Path::new("."),
        };

        // Write-then-rename keeps a concurrent reader off a half-written cache.
        let mut file = tempfile::NamedTempFile::new_in(dir)
            .context("Failed to create temporary cache file")?;
        file.write_all(body.as_bytes())
            .context("Failed to write playlist cache")?;
        file.persist(&self.cache_path)
            .with_context(|| format!("Failed to replace cache file: {:?}", self.cache_path))?;

        tracing::debug!("Cached playlist at {:?}", self.cache_path);
        Ok(())
    }
}
