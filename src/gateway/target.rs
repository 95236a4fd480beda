//! Target URL construction.

use url::Url;

use crate::gateway::error::{GatewayError, GatewayResult};

/// Split a raw request path into its non-empty segments.
///
/// Segments stay percent-encoded so `%2F` inside a segment is not turned
/// into a path separator.
pub fn split_path(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Join segments into a backend-relative path.
pub fn join_segments(segments: &[String]) -> String {
    segments.join("/")
}

/// Build `<base>/<segments>[?<query>]`. An empty query appends nothing.
pub fn build_target(base_url: &str, segments: &[String], query: Option<&str>) -> String {
    let mut target = String::from(base_url.trim_end_matches('/'));
    target.push('/');
    target.push_str(&join_segments(segments));

    if let Some(query) = query.filter(|q| !q.is_empty()) {
        target.push('?');
        target.push_str(query);
    }

    target
}

pub fn parse_target(target: &str) -> GatewayResult<Url> {
    Url::parse(target).map_err(|source| GatewayError::InvalidTarget {
        url: target.to_string(),
        source,
    })
}
