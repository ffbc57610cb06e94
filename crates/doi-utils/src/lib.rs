//! DOI extraction, validation and canonicalization
//!
//! This crate turns DOI-like input in its many shapes into one canonical
//! `prefix/suffix` part:
//! - bare parts (`10.1234/56789`)
//! - the `doi:` scheme
//! - `doi.org` resolver URLs, with or without protocol, `www.` or `dx.`
//! - publisher landing pages (eLife, Wiley, PLOS, Zenodo, JOSS, Pangaea, bioRxiv)
//!
//! Everything here is pure string transformation; no network access.
//!
//! ```
//! use doi_utils::{build_url, normalize, validate, NormalizeOptions};
//!
//! assert_eq!(
//!     normalize("doi:10.1234/56789", NormalizeOptions::default()),
//!     Some("10.1234/56789".to_string())
//! );
//! assert!(validate("https://doi.org/10.1234/56789", NormalizeOptions::strict()));
//! assert_eq!(
//!     build_url("http://dx.doi.org/10.1016/j.cageo.2015.09.015"),
//!     Some("https://doi.org/10.1016/j.cageo.2015.09.015".to_string())
//! );
//! ```

pub mod error;
pub mod grammar;
pub mod normalize;
pub mod publishers;
pub mod resolver;

pub use error::*;
pub use grammar::*;
pub use normalize::*;
pub use publishers::{match_publisher, PublisherMatch, PublisherRule, PUBLISHER_RULES};
pub use resolver::strip_carrier;
