//! Corpus reader. Walks the scroll cursor until the source runs dry.

use paperkb_core::{Error, PaperRecord, PointId, Result};
use tracing::{debug, info};

use crate::source::PaperSource;

/// Pages through a [`PaperSource`] and collects every paper.
pub struct CorpusReader<S> {
    source: S,
    page_size: usize,
}

impl<S: PaperSource> CorpusReader<S> {
    pub fn new(source: S, page_size: usize) -> Self {
        Self {
            source,
            page_size: page_size.max(1),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch the whole corpus.
    ///
    /// Stops on the first empty page or when the source stops returning a
    /// cursor. Any failed page aborts the read: a truncated corpus is never
    /// returned.
    pub async fn fetch_all(&self) -> Result<Vec<PaperRecord>> {
        let mut papers = Vec::new();
        let mut cursor: Option<PointId> = None;
        let mut pages = 0usize;

        loop {
            let page = self
                .source
                .fetch_page(cursor.as_ref(), self.page_size)
                .await?;
            pages += 1;

            if page.papers.is_empty() {
                break;
            }

            debug!("Page {}: {} papers", pages, page.papers.len());
            papers.extend(page.papers);

            match page.next_offset {
                Some(next) if cursor.as_ref() == Some(&next) => {
                    return Err(Error::SourceUnavailable(format!(
                        "Scroll cursor did not advance past {}",
                        next
                    )));
                }
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        info!("Fetched {} papers in {} pages", papers.len(), pages);
        Ok(papers)
    }
}
