//! ETag computation for rendered pages.
//!
//! The registry never changes while the server runs, so a page's body is
//! fully determined by its route; hashing the body gives a stable validator.

use axum::http::HeaderMap;
use sha2::{Digest, Sha256};

/// Quoted SHA-256 hex digest of `body`.
pub fn compute_etag(body: &[u8]) -> String {
  let hash = Sha256::digest(body);
  format!("\"{}\"", hex::encode(hash))
}

/// Whether the request's `If-None-Match` header matches `etag`.
///
/// Accepts `*`, comma-separated lists, weak validators (`W/"…"`) and bare
/// unquoted tags.
pub fn if_none_match(headers: &HeaderMap, etag: &str) -> bool {
  let Some(value) = headers
    .get(axum::http::header::IF_NONE_MATCH)
    .and_then(|v| v.to_str().ok())
  else {
    return false;
  };
  let wanted = etag.trim_matches('"');
  value.split(',').map(str::trim).any(|candidate| {
    candidate == "*"
      || candidate
        .trim_start_matches("W/")
        .trim_matches('"')
        .eq(wanted)
  })
}

#[cfg(test)]
mod tests {
  use axum::http::{HeaderValue, header};

  use super::*;

  fn headers(value: &str) -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(header::IF_NONE_MATCH, HeaderValue::from_str(value).unwrap());
    h
  }

  #[test]
  fn same_body_same_etag() {
    assert_eq!(compute_etag(b"{\"a\":1}"), compute_etag(b"{\"a\":1}"));
  }

  #[test]
  fn different_body_different_etag() {
    assert_ne!(compute_etag(b"{\"a\":1}"), compute_etag(b"{\"a\":2}"));
  }

  #[test]
  fn etag_is_quoted_hex() {
    let etag = compute_etag(b"");
    assert!(etag.starts_with('"') && etag.ends_with('"'));
    assert_eq!(etag.len(), 64 + 2);
  }

  #[test]
  fn if_none_match_forms() {
    let etag = compute_etag(b"page");
    let bare = etag.trim_matches('"').to_string();

    assert!(if_none_match(&headers(&etag), &etag));
    assert!(if_none_match(&headers(&bare), &etag));
    assert!(if_none_match(&headers(&format!("W/{etag}")), &etag));
    assert!(if_none_match(&headers(&format!("\"other\", {etag}")), &etag));
    assert!(if_none_match(&headers("*"), &etag));
    assert!(!if_none_match(&headers("\"stale\""), &etag));
    assert!(!if_none_match(&HeaderMap::new(), &etag));
  }
}
