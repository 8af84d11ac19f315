//! Scroll protocol types for the point store's `points/scroll` request/response.

use paperkb_core::{PaperRecord, PointId};
use serde::{Deserialize, Serialize};

/// Request body for `POST /collections/<name>/points/scroll`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollRequest {
    pub limit: usize,
    pub with_payload: bool,
    pub with_vector: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<PointId>,
}

impl ScrollRequest {
    pub fn new(limit: usize, offset: Option<PointId>) -> Self {
        Self {
            limit,
            with_payload: true,
            with_vector: false,
            offset,
        }
    }
}

/// Response envelope. A body without `result` is a protocol error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollResponse {
    pub result: ScrollResult,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrollResult {
    #[serde(default)]
    pub points: Vec<ScrollPoint>,
    #[serde(default)]
    pub next_page_offset: Option<PointId>,
}

/// One stored point. Vectors are never requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollPoint {
    pub id: PointId,
    #[serde(default)]
    pub payload: PointPayload,
}

/// Paper fields as stored in the point payload. Any of them may be absent
/// or null, and so may individual list entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PointPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub categories: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub r#abstract: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl From<ScrollPoint> for PaperRecord {
    fn from(point: ScrollPoint) -> Self {
        let p = point.payload;
        PaperRecord {
            id: point.id,
            title: p.title.unwrap_or_default(),
            r#abstract: p.r#abstract.unwrap_or_default(),
            authors: present(p.authors),
            categories: present(p.categories),
            url: p.url.unwrap_or_default(),
        }
    }
}

/// Non-empty entries of a nullable list of nullable strings.
fn present(list: Option<Vec<Option<String>>>) -> Vec<String> {
    list.unwrap_or_default()
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect()
}

/// One page of papers plus the cursor for the next page, if any.
#[derive(Debug, Clone, Default)]
pub struct ScrollPage {
    pub papers: Vec<PaperRecord>,
    pub next_offset: Option<PointId>,
}

impl From<ScrollResult> for ScrollPage {
    fn from(result: ScrollResult) -> Self {
        Self {
            papers: result.points.into_iter().map(PaperRecord::from).collect(),
            next_offset: result.next_page_offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_request_omits_offset() {
        let body = serde_json::to_value(ScrollRequest::new(100, None)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"limit": 100, "with_payload": true, "with_vector": false})
        );
        let next = serde_json::to_value(ScrollRequest::new(100, Some(PointId::Num(200)))).unwrap();
        assert_eq!(next["offset"], 200);
    }

    #[test]
    fn test_parse_page_with_sparse_payload() {
        let raw = serde_json::json!({
            "result": {
                "points": [
                    {
                        "id": "5f0c7c1e-8d0a-4a4e-9d4b-0e7d7f3a1b2c",
                        "payload": {
                            "title": "Attention Is All You Need",
                            "authors": ["Ashish Vaswani", "Noam Shazeer"],
                            "categories": ["cs.CL"],
                            "abstract": "The dominant sequence transduction models...",
                            "url": "https://arxiv.org/abs/1706.03762"
                        }
                    },
                    { "id": 7, "payload": { "title": null } },
                    { "id": 8 }
                ],
                "next_page_offset": null
            },
            "status": "ok",
            "time": 0.002
        });
        let response: ScrollResponse = serde_json::from_value(raw).unwrap();
        let page = ScrollPage::from(response.result);
        assert_eq!(page.papers.len(), 3);
        assert!(page.next_offset.is_none());
        assert_eq!(page.papers[0].authors.len(), 2);
        assert_eq!(page.papers[1].id, PointId::Num(7));
        assert!(page.papers[1].title.is_empty());
        assert!(page.papers[2].url.is_empty());
    }

    #[test]
    fn test_null_list_entries_are_dropped() {
        let raw = serde_json::json!({
            "result": {
                "points": [{
                    "id": 3,
                    "payload": {
                        "title": "Sparse",
                        "authors": ["Ada", null, "", "Alan"],
                        "categories": [null, "cs.LG"]
                    }
                }],
                "next_page_offset": 4
            }
        });
        let response: ScrollResponse = serde_json::from_value(raw).unwrap();
        let page = ScrollPage::from(response.result);
        assert_eq!(page.papers[0].authors, vec!["Ada", "Alan"]);
        assert_eq!(page.papers[0].categories, vec!["cs.LG"]);
        assert_eq!(page.next_offset, Some(PointId::Num(4)));
    }

    #[test]
    fn test_missing_result_is_rejected() {
        let raw = serde_json::json!({"status": {"error": "Not found: Collection `papers` doesn't exist!"}});
        assert!(serde_json::from_value::<ScrollResponse>(raw).is_err());
    }
}
