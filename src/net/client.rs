use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;

use crate::config::ServerConfig;
use crate::consts;
use crate::models::{DhikrTimes, Poster, Timetable};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Debug, Deserialize)]
pub struct VersionDoc {
    pub version: String,
}

/// Everything the display asks of the outside world, behind one seam
/// so the pollers are testable without a server.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DisplayServer: Send + Sync {
    async fn fetch_timetable(&self) -> Result<Timetable, FetchError>;
    async fn fetch_dhikr(&self) -> Result<DhikrTimes, FetchError>;
    async fn fetch_version(&self) -> Result<String, FetchError>;
    async fn probe_poster(&self, file: &str) -> Result<Poster, FetchError>;
}

pub struct HttpDisplayServer {
    client: reqwest::Client,
    base_url: String,
    dhikr_url: String,
}

impl HttpDisplayServer {
    pub fn new(config: &ServerConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(consts::http::TIMEOUT)
            .user_agent(format!("mihrab/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(HttpDisplayServer {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            dhikr_url: config.dhikr_url.clone(),
        })
    }

    /// Kiosk browsers cache hard; every request carries a throwaway
    /// query parameter so intermediaries always pass it through.
    fn cachebusted(&self, path: &str) -> String {
        format!(
            "{}/{}?t={}",
            self.base_url,
            path,
            Utc::now().timestamp_millis()
        )
    }

    async fn get_ok(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        let resp = self.client.get(url).send().await?;
        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status()));
        }
        Ok(resp)
    }
}

#[async_trait]
impl DisplayServer for HttpDisplayServer {
    async fn fetch_timetable(&self) -> Result<Timetable, FetchError> {
        let url = self.cachebusted("prayer-times.json");
        Ok(self.get_ok(&url).await?.json().await?)
    }

    async fn fetch_dhikr(&self) -> Result<DhikrTimes, FetchError> {
        let resp = self
            .client
            .get(&self.dhikr_url)
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status()));
        }
        Ok(resp.json().await?)
    }

    async fn fetch_version(&self) -> Result<String, FetchError> {
        let url = self.cachebusted("version.json");
        let doc: VersionDoc = self.get_ok(&url).await?.json().await?;
        Ok(doc.version)
    }

    async fn probe_poster(&self, file: &str) -> Result<Poster, FetchError> {
        let url = self.cachebusted(&format!("posters/{}", file));
        let bytes = self.get_ok(&url).await?.bytes().await?;
        Ok(Poster {
            file: file.to_string(),
            size_bytes: bytes.len() as u64,
        })
    }
}
