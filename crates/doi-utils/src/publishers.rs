//! Publisher landing-page rules
//!
//! Maps landing-page URLs that never pass through `doi.org` to the DOI they
//! describe. Each rule is plain data: a host/path matcher and an extractor.
//! Adding a publisher means adding one entry to [`PUBLISHER_RULES`].

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use url::Url;

use crate::grammar::looks_like_part;

lazy_static! {
    // Preprint version and rendering suffixes: `v2`, `v2.full`, `v2.full.pdf`
    static ref PREPRINT_VERSION: Regex =
        Regex::new(r"v\d+(?:\.full(?:\.pdf)?|\.abstract)?$").unwrap();
}

/// One entry of the publisher table
#[derive(Clone, Copy)]
pub struct PublisherRule {
    /// Display name, also used in trace output
    pub name: &'static str,
    /// Does this rule own the URL (host and path shape)?
    pub matches: fn(&Url) -> bool,
    /// Derive the DOI; `None` when the URL is owned but not convertible
    pub extract: fn(&Url) -> Option<String>,
}

impl std::fmt::Debug for PublisherRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublisherRule").field("name", &self.name).finish()
    }
}

/// A DOI pulled out of a publisher page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublisherMatch {
    pub publisher: &'static str,
    pub doi: String,
}

/// The fixed publisher table, consulted in order.
pub static PUBLISHER_RULES: &[PublisherRule] = &[
    PublisherRule {
        name: "eLife",
        matches: |url| host_is(url, "elifesciences.org"),
        extract: extract_elife,
    },
    PublisherRule {
        name: "Wiley",
        matches: |url| host_ends_with(url, "onlinelibrary.wiley.com"),
        extract: extract_wiley,
    },
    PublisherRule {
        name: "PLOS",
        matches: |url| host_ends_with(url, "journals.plos.org"),
        extract: extract_plos,
    },
    PublisherRule {
        name: "Zenodo",
        matches: |url| host_is(url, "zenodo.org"),
        extract: extract_zenodo,
    },
    PublisherRule {
        name: "JOSS",
        matches: |url| host_is(url, "joss.theoj.org"),
        extract: extract_joss,
    },
    PublisherRule {
        name: "Pangaea",
        matches: |url| host_is(url, "pangaea.de") || host_is(url, "doi.pangaea.de"),
        extract: extract_pangaea,
    },
    PublisherRule {
        name: "bioRxiv",
        matches: |url| host_ends_with(url, "biorxiv.org"),
        extract: extract_preprint_server,
    },
    PublisherRule {
        name: "medRxiv",
        matches: |url| host_ends_with(url, "medrxiv.org"),
        extract: extract_preprint_server,
    },
];

/// Try every publisher rule against `input`, first success wins.
///
/// Inputs without a scheme are read as `https://` URLs. Extractions that do
/// not come out in DOI shape count as no match.
pub fn match_publisher(input: &str) -> Option<PublisherMatch> {
    let url = parse_url(input)?;

    PUBLISHER_RULES
        .iter()
        .filter(|rule| (rule.matches)(&url))
        .find_map(|rule| {
            let doi = (rule.extract)(&url).filter(|doi| looks_like_part(doi))?;
            tracing::trace!(publisher = rule.name, %doi, "matched publisher rule");
            Some(PublisherMatch {
                publisher: rule.name,
                doi,
            })
        })
}

fn parse_url(input: &str) -> Option<Url> {
    let input = input.trim();
    if input.is_empty() || input.chars().any(char::is_whitespace) {
        return None;
    }
    if input.contains("://") {
        Url::parse(input).ok()
    } else {
        Url::parse(&format!("https://{}", input)).ok()
    }
}

fn host_is(url: &Url, domain: &str) -> bool {
    match url.host_str() {
        Some(host) => host == domain || host.strip_prefix("www.") == Some(domain),
        None => false,
    }
}

fn host_ends_with(url: &Url, domain: &str) -> bool {
    match url.host_str() {
        Some(host) => {
            host == domain
                || host
                    .strip_suffix(domain)
                    .is_some_and(|rest| rest.ends_with('.'))
        }
        None => false,
    }
}

fn segments(url: &Url) -> Vec<&str> {
    url.path_segments()
        .map(|segs| segs.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default()
}

/// Re-join path segments as `prefix/suffix`, percent-decoded, case preserved.
fn join_decoded(segs: &[&str]) -> Option<String> {
    if segs.len() < 2 {
        return None;
    }
    urlencoding::decode(&segs.join("/"))
        .ok()
        .map(Cow::into_owned)
}

fn is_numeric(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_digit())
}

// /articles/<id> or /reviewed-preprints/<id>; slugs have no DOI
fn extract_elife(url: &Url) -> Option<String> {
    match segments(url).as_slice() {
        [kind, id, ..] if matches!(*kind, "articles" | "reviewed-preprints") && is_numeric(id) => {
            Some(format!("10.7554/eLife.{}", id))
        }
        _ => None,
    }
}

// /doi/<prefix>/<suffix>, optionally with a view segment: /doi/full/<prefix>/<suffix>
fn extract_wiley(url: &Url) -> Option<String> {
    let segs = segments(url);
    let after_doi = segs.iter().position(|s| *s == "doi")? + 1;
    let start = segs[after_doi..]
        .iter()
        .position(|s| s.starts_with("10."))?
        + after_doi;
    join_decoded(&segs[start..])
}

// article?id=<doi>
fn extract_plos(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

// /badge/latestdoi/<record id>
fn extract_zenodo(url: &Url) -> Option<String> {
    match segments(url).as_slice() {
        ["badge", "latestdoi", id] if is_numeric(id) => Some(format!("10.5281/zenodo.{}", id)),
        _ => None,
    }
}

// /papers/<prefix>/<suffix>
fn extract_joss(url: &Url) -> Option<String> {
    match segments(url).as_slice() {
        ["papers", rest @ ..] => join_decoded(rest),
        _ => None,
    }
}

// pangaea.de/doi/<prefix>/<suffix> or doi.pangaea.de/<prefix>/<suffix>
fn extract_pangaea(url: &Url) -> Option<String> {
    let segs = segments(url);
    if url.host_str() == Some("doi.pangaea.de") {
        return join_decoded(&segs);
    }
    match segs.as_slice() {
        ["doi", rest @ ..] => join_decoded(rest),
        _ => None,
    }
}

// /content/<prefix>/<suffix>v<version>
fn extract_preprint_server(url: &Url) -> Option<String> {
    match segments(url).as_slice() {
        ["content", rest @ ..] => {
            let doi = join_decoded(rest)?;
            Some(PREPRINT_VERSION.replace(&doi, "").into_owned())
        }
        _ => None,
    }
}
