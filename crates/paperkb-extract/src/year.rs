//! Publication year from arXiv abstract URLs.

use once_cell::sync::Lazy;
use regex::Regex;

/// `/abs/YYMM`: the first two digits are the two-digit year.
static ARXIV_ABS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/abs/([0-9]{2})([0-9]{2})").expect("valid arXiv regex"));

/// Year encoded in an arXiv URL as `2000 + YY`, with no century rollover.
/// Non-arXiv URLs and arXiv URLs without a `/abs/DDDD` segment have no year.
pub fn extract_year(url: &str) -> Option<i32> {
    if !url.contains("arxiv.org") {
        return None;
    }
    let caps = ARXIV_ABS.captures(url)?;
    let yy: i32 = caps.get(1)?.as_str().parse().ok()?;
    Some(2000 + yy)
}
