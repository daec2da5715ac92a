//! Link-list curation for API responses.
//!
//! API documents carry `links` arrays of `{href, rel, title, ...}` records.
//! [`friendly_links`] turns such a list into something a UI can render:
//! navigation links like `self` are dropped, every link gets a title and the
//! list is sorted by that title.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::classify::natural_cmp;
use crate::coerce::array_or_empty;
use crate::error::Result;
use crate::options::LinkOptions;
use crate::text::prettify_string;

/// A hyperlink record. Keys other than `href`, `rel` and `title` are kept in
/// `extra` and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            rel: None,
            title: None,
            extra: Map::new(),
        }
    }

    pub fn with_rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = Some(rel.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn has_title(&self) -> bool {
        self.title.as_deref().is_some_and(|t| !t.is_empty())
    }
}

static SCHEME_PREFIX_RE: OnceLock<Regex> = OnceLock::new();

fn scheme_prefix_re() -> &'static Regex {
    SCHEME_PREFIX_RE.get_or_init(|| {
        Regex::new(r"(?i)^[a-z][a-z0-9+.\-]*://(www\.)?").expect("static regex is valid")
    })
}

/// Display form of an href: scheme, a leading `www.` and one trailing `/`
/// are removed.
fn title_from_href(href: &str) -> String {
    let stripped = scheme_prefix_re().replace(href, "");
    let stripped: &str = &stripped;
    stripped.strip_suffix('/').unwrap_or(stripped).to_string()
}

/// Curates a list of links for display.
///
/// Links whose `rel` is listed in `opts.ignore_rel` are dropped. A missing or
/// empty title is derived from `rel` when it is longer than one character,
/// otherwise from `href`. With `opts.sort` the result is stably sorted by
/// title in natural order. The input is left untouched.
pub fn friendly_links(links: &[Link], opts: &LinkOptions) -> Vec<Link> {
    let mut out: Vec<Link> = Vec::with_capacity(links.len());
    for link in links {
        if let Some(rel) = link.rel.as_deref() {
            if opts.ignores(rel) {
                tracing::debug!(href = %link.href, rel, "dropping ignored link");
                continue;
            }
        }
        let mut link = link.clone();
        if !link.has_title() {
            let title = match link.rel.as_deref() {
                Some(rel) if rel.chars().count() > 1 => {
                    tracing::debug!(href = %link.href, source = "rel", "deriving link title");
                    prettify_string(rel, &opts.prettify)
                }
                _ => {
                    tracing::debug!(href = %link.href, source = "href", "deriving link title");
                    title_from_href(&link.href)
                }
            };
            link.title = Some(title);
        }
        out.push(link);
    }
    if opts.sort {
        out.sort_by(|a, b| {
            natural_cmp(
                a.title.as_deref().unwrap_or_default(),
                b.title.as_deref().unwrap_or_default(),
            )
        });
    }
    out
}

/// [`friendly_links`] over a raw JSON value.
///
/// `null` yields no links. An array is read as link records, so an element
/// without a string `href` is an error, as is any other non-array input.
pub fn friendly_links_value(v: &Value, opts: &LinkOptions) -> Result<Vec<Link>> {
    let items = array_or_empty(v)?;
    let mut links = Vec::with_capacity(items.len());
    for item in items {
        links.push(Link::deserialize(item)?);
    }
    Ok(friendly_links(&links, opts))
}
