//! Normalization pipeline and the operations derived from it

use serde::{Deserialize, Serialize};

use crate::error::{DoiError, Result};
use crate::grammar::{validate_part, DoiPart, OPEN_FUNDER_REGISTRY_PREFIX};
use crate::publishers::match_publisher;
use crate::resolver::strip_carrier;

/// Canonical resolver prefix used by [`build_url`]
pub const DOI_RESOLVER: &str = "https://doi.org/";

/// Per-call normalization options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    /// Only accept explicit `doi:` / resolver-URL forms and well-formed bare
    /// parts; publisher pages and embedded markers are ignored.
    pub strict: bool,
}

impl NormalizeOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// Extract the DOI part from `input`.
///
/// Tries, in order: a `doi:` scheme or resolver URL, the publisher table
/// (non-strict), and finally `input` itself when it is a well-formed part.
/// Returns `None` when nothing is found; this is an expected outcome.
pub fn normalize(input: &str, options: NormalizeOptions) -> Option<String> {
    if input.is_empty() {
        return None;
    }

    if let Some(doi) = strip_carrier(input, options) {
        return Some(doi.to_string());
    }

    if !options.strict {
        if let Some(found) = match_publisher(input) {
            return Some(found.doi);
        }
    }

    validate_part(input).then(|| input.to_string())
}

/// Check that `input` normalizes to a grammatically valid DOI part.
pub fn validate(input: &str, options: NormalizeOptions) -> bool {
    normalize(input, options).is_some_and(|doi| validate_part(&doi))
}

/// Canonical `https://doi.org/<part>` URL, or `None` when no DOI is found.
pub fn build_url(input: &str) -> Option<String> {
    normalize(input, NormalizeOptions::default()).map(|doi| format!("{}{}", DOI_RESOLVER, doi))
}

/// Whether `input` names an Open Funder Registry record (prefix `10.13039`).
pub fn is_open_funder_registry(input: &str) -> bool {
    normalize(input, NormalizeOptions::default())
        .and_then(|doi| doi.split_once('/').map(|(prefix, _)| prefix == OPEN_FUNDER_REGISTRY_PREFIX))
        .unwrap_or(false)
}

/// Normalize into a typed [`DoiPart`], reporting why that failed.
pub fn parse(input: &str, options: NormalizeOptions) -> Result<DoiPart> {
    if input.trim().is_empty() {
        return Err(DoiError::Empty);
    }
    let doi = normalize(input, options).ok_or_else(|| DoiError::NotFound(input.to_string()))?;
    doi.parse()
}
