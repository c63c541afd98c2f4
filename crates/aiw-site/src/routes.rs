//! The site's route set.
//!
//! Every route ends in `/`. The current event's pages sit at the root; each
//! archived event repeats the same page set under `/events/{id}/`.

use aiw_core::{EventRegistry, page::Page};
use serde::Serialize;
use strum::IntoEnumIterator as _;

/// One page of the static site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
  pub path:     String,
  pub page:     Page,
  /// `None` for the current event's pages.
  pub event_id: Option<String>,
}

/// Canonical path of `page` under `base_path` (`""` or `/events/{id}`).
pub fn page_path(base_path: &str, page: Page) -> String {
  match page {
    Page::Home => format!("{base_path}/"),
    _ => format!("{base_path}/{}/", page.slug()),
  }
}

/// Root pages followed by each archived event's pages, in registry order.
pub fn manifest(registry: &EventRegistry) -> Vec<Route> {
  let root = Page::iter().map(|page| Route {
    path: page_path("", page),
    page,
    event_id: None,
  });

  let archived = registry.archived_events().into_iter().flat_map(|event| {
    let base = format!("/events/{}", event.event_id);
    Page::iter().map(move |page| Route {
      path: page_path(&base, page),
      page,
      event_id: Some(event.event_id.clone()),
    })
  });

  root.chain(archived).collect()
}

/// Prefix `path` with the sub-path the site is hosted under.
pub fn with_site_base(site_base_path: &str, path: &str) -> String {
  format!("{}{path}", site_base_path.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn page_paths_carry_trailing_slashes() {
    assert_eq!(page_path("", Page::Home), "/");
    assert_eq!(page_path("", Page::WhosComing), "/whos-coming/");
    assert_eq!(page_path("/events/1", Page::Home), "/events/1/");
    assert_eq!(page_path("/events/1", Page::Topics), "/events/1/topics/");
  }

  #[test]
  fn manifest_for_builtin_catalog() {
    let registry = aiw_catalog::builtin().unwrap().registry;
    let paths: Vec<_> =
      manifest(&registry).into_iter().map(|r| r.path).collect();
    assert_eq!(paths, [
      "/",
      "/details/",
      "/topics/",
      "/whos-coming/",
      "/events/1/",
      "/events/1/details/",
      "/events/1/topics/",
      "/events/1/whos-coming/",
    ]);
  }

  #[test]
  fn manifest_tags_archived_routes_with_their_event() {
    let registry = aiw_catalog::builtin().unwrap().registry;
    let routes = manifest(&registry);
    assert!(routes[..4].iter().all(|r| r.event_id.is_none()));
    assert!(routes[4..].iter().all(|r| r.event_id.as_deref() == Some("1")));
  }

  #[test]
  fn site_base_is_prefixed_once() {
    assert_eq!(
      with_site_base("/agenticinternetworkshop.org", "/topics/"),
      "/agenticinternetworkshop.org/topics/"
    );
    assert_eq!(with_site_base("/site/", "/"), "/site/");
    assert_eq!(with_site_base("", "/details/"), "/details/");
  }
}
