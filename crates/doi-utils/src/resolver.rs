//! Stripping of DOI carriers: the `doi:` scheme and `doi.org` resolver URLs
//!
//! Nothing here consults the publisher table. Candidates come back in the
//! loose `10.NNNN/<non-whitespace>` shape and are not yet checked against
//! the strict grammar.

use lazy_static::lazy_static;
use regex::Regex;

use crate::grammar::{looks_like_part, validate_part};
use crate::normalize::NormalizeOptions;

lazy_static! {
    static ref DOI_SCHEME: Regex = Regex::new(r"(?i)^doi:\s*(?P<rest>.*)$").unwrap();

    // doi.org, dx.doi.org, www.doi.org with optional protocol; query and
    // fragment are not part of the DOI
    static ref RESOLVER_URL: Regex = Regex::new(
        r"(?i)^(?:https?://)?(?:www\.)?(?:dx\.)?doi\.org/(?P<doi>[^\s?#]+)(?:[?#]\S*)?$"
    ).unwrap();

    // A `doi` word somewhere before a path that starts with a DOI prefix,
    // e.g. `doi.something.else/10.x/y` or `something.else/doi/10.x/y`
    static ref EMBEDDED_RESOLVER: Regex = Regex::new(
        r"(?i)\bdoi\b.*?/(?P<doi>10\.\d{4,}/[^\s?#]+)"
    ).unwrap();
}

/// Remove a leading, case-insensitive `doi:` scheme.
pub fn strip_scheme(input: &str) -> Option<&str> {
    DOI_SCHEME
        .captures(input)
        .and_then(|cap| cap.name("rest"))
        .map(|m| m.as_str().trim())
}

/// Extract the path of a `doi.org`-family resolver URL.
pub fn strip_resolver_url(input: &str) -> Option<&str> {
    RESOLVER_URL
        .captures(input.trim())
        .and_then(|cap| cap.name("doi"))
        .map(|m| m.as_str())
        .filter(|candidate| looks_like_part(candidate))
}

/// Find a DOI path that follows a `doi` marker anywhere in the input.
pub fn find_embedded_resolver(input: &str) -> Option<&str> {
    EMBEDDED_RESOLVER
        .captures(input)
        .and_then(|cap| cap.name("doi"))
        .map(|m| m.as_str())
}

/// Strip any DOI carrier from `input`, returning the candidate part.
///
/// Order: `doi:` scheme, then a resolver URL, then (non-strict only) an
/// embedded `doi` marker. A well-formed bare part is left for the caller.
pub fn strip_carrier(input: &str, options: NormalizeOptions) -> Option<&str> {
    let body = match strip_scheme(input) {
        Some(rest) if looks_like_part(rest) => {
            tracing::trace!(input, "matched doi: scheme");
            return Some(rest);
        }
        Some(rest) => rest,
        None => input,
    };

    if let Some(doi) = strip_resolver_url(body) {
        tracing::trace!(input, "matched resolver URL");
        return Some(doi);
    }

    if options.strict || validate_part(body) {
        return None;
    }

    let doi = find_embedded_resolver(body)?;
    tracing::trace!(input, "matched embedded resolver marker");
    Some(doi)
}
