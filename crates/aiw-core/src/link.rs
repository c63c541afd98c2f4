//! Context-aware link resolution.
//!
//! Keeps relative navigation inside the namespace of the event being viewed:
//! a `/topics` link on archived event 1 must land on `/events/1/topics`,
//! while the same link on the current event stays `/topics`.

/// Root of the per-archived-event route tree.
pub const EVENTS_PREFIX: &str = "/events/";

/// Rewrite `href` for a page whose base path is `base_path`.
///
/// Evaluated in order:
/// 1. scheme-prefixed targets (`https:`, `mailto:`, …) and in-page anchors
///    (`#…`) are returned unchanged;
/// 2. targets already under `/events/` are returned unchanged;
/// 3. anything else is prefixed with `base_path`.
///
/// Rule 2 makes resolution idempotent.
pub fn resolve_href(base_path: &str, href: &str) -> String {
  if is_external(href) || href.starts_with('#') {
    return href.to_owned();
  }
  if href.starts_with(EVENTS_PREFIX) {
    return href.to_owned();
  }
  if base_path.is_empty() || href.starts_with('/') {
    format!("{base_path}{href}")
  } else {
    format!("{}/{href}", base_path.trim_end_matches('/'))
  }
}

/// Whether `href` starts with a URI scheme (`ALPHA *( ALPHA / DIGIT / "+" /
/// "-" / "." ) ":"`).
pub fn is_external(href: &str) -> bool {
  let Some((scheme, _)) = href.split_once(':') else {
    return false;
  };
  let mut chars = scheme.chars();
  matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
    && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
