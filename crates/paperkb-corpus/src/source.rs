//! Paper sources: the scroll client and an in-memory stand-in.

use paperkb_core::{Error, PaperRecord, PointId, Result, SourceConfig};
use reqwest::Client;
use tracing::debug;

use crate::types::{ScrollPage, ScrollRequest, ScrollResponse};

/// Anything that can hand out the corpus one cursor-addressed page at a time.
#[allow(async_fn_in_trait)]
pub trait PaperSource {
    /// Fetch at most `limit` papers starting at `offset` (`None` = first page).
    async fn fetch_page(&self, offset: Option<&PointId>, limit: usize) -> Result<ScrollPage>;
}

/// Scroll client for a Qdrant-compatible point store.
pub struct QdrantSource {
    client: Client,
    scroll_url: String,
}

impl QdrantSource {
    pub fn new(config: &SourceConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &SourceConfig) -> Self {
        let scroll_url = format!(
            "{}/collections/{}/points/scroll",
            config.url.trim_end_matches('/'),
            config.collection
        );
        Self { client, scroll_url }
    }

    pub fn scroll_url(&self) -> &str {
        &self.scroll_url
    }
}

impl PaperSource for QdrantSource {
    async fn fetch_page(&self, offset: Option<&PointId>, limit: usize) -> Result<ScrollPage> {
        let body = ScrollRequest::new(limit, offset.cloned());

        debug!("Scrolling {} (offset: {:?})", self.scroll_url, offset);

        let response = self
            .client
            .post(&self.scroll_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::SourceUnavailable(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::SourceUnavailable(format!(
                "API error {}: {}",
                status, body
            )));
        }

        let parsed: ScrollResponse = response
            .json()
            .await
            .map_err(|e| Error::SourceUnavailable(format!("Malformed scroll response: {}", e)))?;

        Ok(parsed.result.into())
    }
}

/// Serves a fixed paper list, paged by position. The cursor is the index of
/// the first paper on the next page.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    papers: Vec<PaperRecord>,
}

impl MemorySource {
    pub fn new(papers: Vec<PaperRecord>) -> Self {
        Self { papers }
    }
}

impl PaperSource for MemorySource {
    async fn fetch_page(&self, offset: Option<&PointId>, limit: usize) -> Result<ScrollPage> {
        let start = match offset {
            None => 0,
            Some(PointId::Num(n)) => *n as usize,
            Some(other) => {
                return Err(Error::SourceUnavailable(format!(
                    "Unknown cursor: {}",
                    other
                )))
            }
        };
        let end = (start + limit).min(self.papers.len());
        let papers = self.papers.get(start..end).unwrap_or_default().to_vec();
        let next_offset = (end < self.papers.len()).then(|| PointId::Num(end as u64));
        Ok(ScrollPage {
            papers,
            next_offset,
        })
    }
}
