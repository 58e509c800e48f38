use std::time::Duration;

use anyhow::Context;
use reqwest::Url;
use tracing::{debug, info};

use crate::error::{Result, TrialError};

pub const DEFAULT_FEED_BASE: &str = "https://clinicaltrials.gov";
const USER_AGENT: &str = concat!("trial-lookup/", env!("CARGO_PKG_VERSION"));

/// Anything that can hand back the raw text of a remote document.
#[allow(async_fn_in_trait)]
pub trait DocumentSource {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Fetches documents over HTTP. One request per call, no retries.
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(HttpSource { client })
    }
}

impl DocumentSource for HttpSource {
    async fn fetch(&self, url: &str) -> Result<String> {
        info!("Fetching {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| TrialError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TrialError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| TrialError::Request {
            url: url.to_string(),
            source,
        })?;
        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

/// URLs of the listing feed and the per-trial detail document.
#[derive(Debug, Clone)]
pub struct Endpoints {
    listing: Url,
    show: Url,
}

impl Endpoints {
    pub fn new(base: &str) -> Result<Self> {
        let base = format!("{}/", base.trim().trim_end_matches('/'));
        let parse = |path: &str| {
            Url::parse(&base)
                .and_then(|b| b.join(path))
                .map_err(|e| TrialError::Validation(format!("invalid feed base '{}': {}", base, e)))
        };
        let listing = parse("ct2/results/rss.xml")?;
        let show = parse("ct2/show/")?;
        if show.cannot_be_a_base() {
            return Err(TrialError::Validation(format!(
                "feed base '{}' cannot hold a path",
                base
            )));
        }
        Ok(Endpoints { listing, show })
    }

    pub fn listing_url(&self, molecule: &str, pathology: &str) -> String {
        let mut url = self.listing.clone();
        url.query_pairs_mut()
            .append_pair("term", molecule)
            .append_pair("cond", pathology);
        url.to_string()
    }

    pub fn detail_url(&self, id: &str) -> String {
        let mut url = self.show.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id);
        }
        url.query_pairs_mut().append_pair("displayxml", "true");
        url.to_string()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_url_encodes_query() {
        let e = Endpoints::new(DEFAULT_FEED_BASE).unwrap();
        assert_eq!(
            e.listing_url("insulin glargine", "diabetes & obesity"),
            "https://clinicaltrials.gov/ct2/results/rss.xml?term=insulin+glargine&cond=diabetes+%26+obesity"
        );
        assert_eq!(
            e.listing_url("metformin", ""),
            "https://clinicaltrials.gov/ct2/results/rss.xml?term=metformin&cond="
        );
    }

    #[test]
    fn detail_url_escapes_id() {
        let e = Endpoints::new(DEFAULT_FEED_BASE).unwrap();
        assert_eq!(
            e.detail_url("NCT04368728"),
            "https://clinicaltrials.gov/ct2/show/NCT04368728?displayxml=true"
        );
        assert!(!e.detail_url("../admin").contains("/../"));
    }

    #[test]
    fn base_with_path_is_kept() {
        let e = Endpoints::new("http://localhost:8080/mirror/").unwrap();
        assert_eq!(
            e.detail_url("NCT1"),
            "http://localhost:8080/mirror/ct2/show/NCT1?displayxml=true"
        );
    }

    #[test]
    fn invalid_base_is_rejected() {
        assert!(Endpoints::new("not a url").is_err());
    }
}
