//! Deep-link URLs: scheme + path segments + key/value query.
//!
//! Links look like `com.example.app:///Children?index=<uuid>`. The host is
//! left explicitly empty so the result reads `scheme://` rather than
//! `scheme:`, and the path always carries a leading slash. Both directions
//! percent-encode/decode, so query values may hold arbitrary printable
//! Unicode.

use std::collections::HashMap;

use percent_encoding::percent_decode_str;
use thiserror::Error;
use url::Url;

/// Errors from building or parsing a deep link.
#[derive(Debug, Error)]
pub enum DeepLinkError {
    /// Input was not a parseable URL (also covers invalid schemes when
    /// building).
    #[error("invalid URL: {0}")]
    Parse(#[from] url::ParseError),
    /// The URL's shape cannot carry path segments.
    #[error("URL cannot carry a path: {url}")]
    PathRejected { url: String },
}

/// Decoded form of a deep link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    /// URL scheme; for app links, typically the application bundle id.
    pub scheme: String,
    /// Path components. The first element is always the literal `/`;
    /// the remaining components are percent-decoded segments.
    pub path: Vec<String>,
    /// Decoded query key/value pairs.
    pub query: HashMap<String, String>,
}

/// Build a deep-link URL string from its parts.
///
/// Path segments and query pairs are percent-encoded. Query pairs are
/// emitted in sorted key order so the output is deterministic.
pub fn build_url<S: AsRef<str>>(
    scheme: &str,
    path_items: &[S],
    key_values: &HashMap<String, String>,
) -> Result<String, DeepLinkError> {
    // The empty host forces `scheme://` rather than `scheme:`.
    let base = format!("{}://", scheme);
    let mut url = Url::parse(&base)?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|()| DeepLinkError::PathRejected { url: base.clone() })?;
        segments.clear();
        for item in path_items {
            segments.push(item.as_ref());
        }
    }
    if !key_values.is_empty() {
        let mut pairs: Vec<_> = key_values.iter().collect();
        pairs.sort();
        let mut query = url.query_pairs_mut();
        for (key, value) in pairs {
            query.append_pair(key, value);
        }
    }
    Ok(url.into())
}

/// Parse a deep-link URL string back into its parts.
///
/// The inverse of [`build_url`]: `parse_url(build_url(s, p, kv))` recovers
/// the same scheme, the same path (behind the leading `/` component), and
/// the same query mapping. Empty path segments (a trailing slash) are
/// dropped.
pub fn parse_url(input: &str) -> Result<DeepLink, DeepLinkError> {
    let url = Url::parse(input)?;
    let mut path = vec!["/".to_string()];
    if let Some(segments) = url.path_segments() {
        for segment in segments {
            if segment.is_empty() {
                continue;
            }
            path.push(percent_decode_str(segment).decode_utf8_lossy().into_owned());
        }
    }
    Ok(DeepLink {
        scheme: url.scheme().to_string(),
        path,
        query: parse_query(url.query().unwrap_or("")),
    })
}

/// Decode a bare query string (no leading `?`) into a key/value map.
///
/// Later duplicates of a key win, matching map semantics on the build
/// side.
pub fn parse_query(query: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}
