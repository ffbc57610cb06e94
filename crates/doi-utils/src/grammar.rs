//! DOI part grammar
//!
//! A DOI part is `prefix/suffix`. The prefix is `10.` followed by at least
//! four registrant digits; the suffix is everything after the first `/`,
//! including any further slashes.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::DoiError;

/// Prefix reserved for the Open Funder Registry
pub const OPEN_FUNDER_REGISTRY_PREFIX: &str = "10.13039";

lazy_static! {
    // Strict grammar: restricted suffix alphabet, no whitespace or percent escapes
    static ref DOI_PART_PATTERN: Regex =
        Regex::new(r"^10\.\d{4,}/[-._;()/<>A-Za-z0-9]+$").unwrap();

    // Shape accepted from an explicit carrier (doi:, resolver URL)
    static ref LOOSE_PART_PATTERN: Regex = Regex::new(r"^10\.\d{4,}/\S+$").unwrap();
}

/// Check whether `text` is a syntactically valid DOI part.
///
/// Empty input is never valid. Carriers such as `doi:` or a resolver URL
/// are not stripped here; see [`crate::normalize`] for that.
pub fn validate_part(text: &str) -> bool {
    !text.is_empty() && DOI_PART_PATTERN.is_match(text)
}

/// Loose shape check used on text pulled out of a `doi:` or resolver carrier.
pub(crate) fn looks_like_part(text: &str) -> bool {
    LOOSE_PART_PATTERN.is_match(text)
}

/// A validated DOI, split at the first `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoiPart {
    pub prefix: String,
    pub suffix: String,
}

impl DoiPart {
    /// Registrant digits of the prefix (`1234` for `10.1234`)
    pub fn registrant(&self) -> &str {
        self.prefix.strip_prefix("10.").unwrap_or(&self.prefix)
    }

    pub fn is_open_funder_registry(&self) -> bool {
        self.prefix == OPEN_FUNDER_REGISTRY_PREFIX
    }
}

impl FromStr for DoiPart {
    type Err = DoiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(DoiError::Empty);
        }
        if !validate_part(s) {
            return Err(DoiError::InvalidSyntax(s.to_string()));
        }
        let (prefix, suffix) = s
            .split_once('/')
            .ok_or_else(|| DoiError::InvalidSyntax(s.to_string()))?;
        Ok(DoiPart {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        })
    }
}

impl fmt::Display for DoiPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.prefix, self.suffix)
    }
}
