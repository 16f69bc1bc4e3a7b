//! Release index client speaking the PyPI JSON API

use std::collections::HashMap;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::FETCH_TIMEOUT;
use crate::error::IndexError;
use crate::release_set::ReleaseSet;

/// Client for one release index.
///
/// Stateless apart from the connection pool; every fetch is a single
/// request with no retries. A fetch failure is reported to the caller as an
/// [`IndexError`] and never aborts the pipeline.
pub struct IndexClient {
    client: Client,
    base_url: String,
    host: String,
}

/// Release-manifest response. Only the `releases` keys matter; the
/// per-version file listings are ignored.
#[derive(Debug, Deserialize)]
struct ReleaseManifest {
    releases: HashMap<String, serde_json::Value>,
}

impl IndexClient {
    /// Client for the index at `https://{host}`.
    pub fn new(host: &str) -> Self {
        Self::with_base_url(host, format!("https://{host}"))
    }

    /// Client against an explicit base URL, so tests can point at a local
    /// server.
    pub fn with_base_url(host: &str, base_url: String) -> Self {
        Self {
            client: Client::builder()
                .user_agent("release-version")
                .timeout(FETCH_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
            base_url,
            host: host.to_string(),
        }
    }

    /// The index host identifier, for diagnostics.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Fetches the set of versions already published for `package`.
    pub async fn fetch_releases(&self, package: &str) -> Result<ReleaseSet, IndexError> {
        let url = format!("{}/pypi/{}/json", self.base_url, package);
        debug!("Fetching release manifest: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(IndexError::Status(response.status()));
        }

        let manifest: ReleaseManifest = response
            .json()
            .await
            .map_err(|e| IndexError::InvalidResponse(e.to_string()))?;

        debug!(
            "Index {} reports {} published versions for {}",
            self.host,
            manifest.releases.len(),
            package
        );

        Ok(manifest.releases.into_keys().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn fetch_releases_collects_manifest_keys() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/pypi/elm327-emulator/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "info": {"version": "1.4.0"},
                    "releases": {
                        "1.3.2": [],
                        "1.4.0": [{"filename": "elm327_emulator-1.4.0.tar.gz"}]
                    }
                }"#,
            )
            .create_async()
            .await;

        let client = IndexClient::with_base_url("pypi.org", server.url());
        let releases = client.fetch_releases("elm327-emulator").await.unwrap();

        mock.assert_async().await;

        assert_eq!(releases.len(), 2);
        assert_eq!(releases.matching("1.4.0"), vec!["1.4.0"]);
    }

    #[tokio::test]
    async fn fetch_releases_reports_non_success_status() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/pypi/unpublished/json")
            .with_status(404)
            .create_async()
            .await;

        let client = IndexClient::with_base_url("pypi.org", server.url());
        let result = client.fetch_releases("unpublished").await;

        mock.assert_async().await;

        assert!(matches!(result, Err(IndexError::Status(status)) if status.as_u16() == 404));
    }

    #[tokio::test]
    async fn fetch_releases_reports_malformed_json() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/pypi/elm327-emulator/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json at all")
            .create_async()
            .await;

        let client = IndexClient::with_base_url("pypi.org", server.url());
        let result = client.fetch_releases("elm327-emulator").await;

        mock.assert_async().await;

        assert!(matches!(result, Err(IndexError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn fetch_releases_reports_missing_releases_field() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/pypi/elm327-emulator/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"info": {"version": "1.4.0"}}"#)
            .create_async()
            .await;

        let client = IndexClient::with_base_url("pypi.org", server.url());
        let result = client.fetch_releases("elm327-emulator").await;

        mock.assert_async().await;

        assert!(matches!(result, Err(IndexError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn fetch_releases_reports_network_failure() {
        // Nothing listens on port 1, so the connection is refused
        let client = IndexClient::with_base_url("pypi.org", "http://127.0.0.1:1".to_string());
        let result = client.fetch_releases("elm327-emulator").await;

        assert!(matches!(result, Err(IndexError::Network(_))));
    }
}
