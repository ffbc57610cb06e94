//! DOI normalization integration tests

use doi_utils::{
    build_url, is_open_funder_registry, match_publisher, normalize, validate, validate_part,
    NormalizeOptions,
};
use rstest::rstest;

fn loose() -> NormalizeOptions {
    NormalizeOptions::default()
}

fn strict() -> NormalizeOptions {
    NormalizeOptions::strict()
}

// === Validation ===

#[test]
fn test_validate_bare_part() {
    assert!(validate("10.1234/56789", loose()));
}

#[test]
fn test_empty_is_not_valid() {
    assert!(!validate_part(""));
    assert!(!validate("", loose()));
}

#[rstest]
#[case("https://doi.org/10.1371/journal.pclm.0000068")]
#[case("doi:10.1234/56789")]
#[case("10.1234/56789")]
#[case("doi.org/10.1371/journal.pclm.0000068")]
fn test_validate_accepts(#[case] input: &str) {
    assert!(validate(input, loose()));
}

#[rstest]
#[case("https://www.technologyreview.com/2020/07/17/1005396/predictive-policing-algorithms-racist-dismantled-machine-learning-bias-criminal-justice/")]
#[case("https://doi.org")]
#[case("https://doi.org/")]
fn test_validate_rejects(#[case] input: &str) {
    assert!(!validate(input, loose()));
}

#[rstest]
#[case("https://doi.org/10.1371/journal.pclm.0000068")]
#[case(":10.1234/56789a")]
#[case("doi:10.1234/56789")]
fn test_validate_part_rejects_carriers(#[case] input: &str) {
    assert!(!validate_part(input));
}

#[test]
fn test_percent_encoded_link_through_resolver() {
    let part = "10.1175/1520-0493(1972)100%3C0081%3AOTAOSH%3E2.3.CO%3B2";
    let url = format!("https://doi.org/{}", part);
    assert_eq!(normalize(&url, loose()).as_deref(), Some(part));
    assert_eq!(normalize(part, loose()), None);
    assert!(!validate(&url, strict()));
}

// === URL building ===

#[test]
fn test_build_url_from_part() {
    assert_eq!(
        build_url("10.1234/56789").as_deref(),
        Some("https://doi.org/10.1234/56789")
    );
}

#[rstest]
#[case("http://dx.doi.org/10.1016/j.cageo.2015.09.015")]
#[case("http://www.doi.org/10.1016/j.cageo.2015.09.015")]
#[case("http://doi.org/10.1016/j.cageo.2015.09.015")]
#[case("www.doi.org/10.1016/j.cageo.2015.09.015")]
#[case("doi.org/10.1016/j.cageo.2015.09.015")]
#[case("doi.something.else/10.1016/j.cageo.2015.09.015")]
#[case("something.else/doi/10.1016/j.cageo.2015.09.015")]
fn test_build_url_canonicalizes(#[case] input: &str) {
    assert_eq!(
        build_url(input).as_deref(),
        Some("https://doi.org/10.1016/j.cageo.2015.09.015")
    );
}

// === Normalization ===

#[rstest]
#[case("doi:10.1234/56789")]
#[case("DOI:10.1234/56789")]
#[case("doi.org/10.1234/56789")]
#[case("https://doi.org/10.1234/56789")]
#[case("http://www.doi.org/10.1234/56789")]
fn test_normalize_variants(#[case] input: &str) {
    assert_eq!(normalize(input, loose()).as_deref(), Some("10.1234/56789"));
}

// === Publisher pages ===

#[rstest]
#[case::elife("https://elifesciences.org/articles/59045", Some("10.7554/eLife.59045"))]
#[case::elife_preprint(
    "https://elifesciences.org/reviewed-preprints/103597",
    Some("10.7554/eLife.103597")
)]
#[case::elife_slug("https://elifesciences.org/articles/short-report", None)]
#[case::wiley(
    "https://agupubs.onlinelibrary.wiley.com/doi/full/10.1029/2022GC010600",
    Some("10.1029/2022GC010600")
)]
#[case::plos(
    "https://journals.plos.org/climate/article?id=10.1371/journal.pclm.0000068",
    Some("10.1371/journal.pclm.0000068")
)]
#[case::zenodo("https://zenodo.org/badge/latestdoi/169800572", Some("10.5281/zenodo.169800572"))]
#[case::joss("https://joss.theoj.org/papers/10.21105/joss.04767", Some("10.21105/joss.04767"))]
#[case::pangaea_path("https://pangaea.de/doi/10.1594/PANGAEA.941238", Some("10.1594/PANGAEA.941238"))]
#[case::pangaea_subdomain(
    "https://doi.pangaea.de/10.1594/PANGAEA.941238",
    Some("10.1594/PANGAEA.941238")
)]
#[case::biorxiv(
    "https://www.biorxiv.org/content/10.1101/2020.11.02.364968v2",
    Some("10.1101/2020.11.02.364968")
)]
fn test_publisher_links(#[case] url: &str, #[case] expected: Option<&str>) {
    assert_eq!(normalize(url, loose()).as_deref(), expected);
    assert_eq!(validate(url, loose()), expected.is_some());
    assert!(!validate(url, strict()));
}

#[rstest]
#[case("https://onlinelibrary.wiley.com/doi/full/10.1002/anie.201915678?af=R", "10.1002/anie.201915678")]
#[case("https://onlinelibrary.wiley.com/doi/full/10.1002/anie.201915678#section", "10.1002/anie.201915678")]
#[case("https://doi.pangaea.de/10.1594/PANGAEA.941238?format=html", "10.1594/PANGAEA.941238")]
#[case("https://pangaea.de/doi/10.1594/PANGAEA.941238#section", "10.1594/PANGAEA.941238")]
#[case("https://doi.org/10.1234/56789?af=R", "10.1234/56789")]
#[case("https://doi.org/10.1234/56789#section", "10.1234/56789")]
fn test_query_and_fragment_not_part_of_doi(#[case] url: &str, #[case] expected: &str) {
    assert_eq!(normalize(url, loose()).as_deref(), Some(expected));
    assert!(validate(url, loose()));
    if let Some(found) = match_publisher(url) {
        assert_eq!(found.doi, expected);
    }
}

#[test]
fn test_publisher_match_reports_rule() {
    let found = match_publisher("https://www.biorxiv.org/content/10.1101/2020.11.02.364968v2")
        .expect("bioRxiv link");
    assert_eq!(found.publisher, "bioRxiv");
    assert_eq!(found.doi, "10.1101/2020.11.02.364968");
}

// === Open Funder Registry ===

#[rstest]
#[case("", false)]
#[case("http://www.doi.org/10.1234/56789", false)]
#[case("http://dx.doi.org/10.13039/100000879", true)]
#[case("10.13039/100000879", true)]
fn test_open_funder_registry(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_open_funder_registry(input), expected);
}

// === Properties ===

const SAMPLES: &[&str] = &[
    "10.1234/56789",
    "doi:10.1234/56789",
    "https://doi.org/10.1016/j.cageo.2015.09.015",
    "something.else/doi/10.1016/j.cageo.2015.09.015",
    "https://elifesciences.org/articles/59045",
    "https://journals.plos.org/climate/article?id=10.1371/journal.pclm.0000068",
    "https://www.biorxiv.org/content/10.1101/2020.11.02.364968v2",
    "https://doi.org/10.1175/1520-0493(1972)100%3C0081%3AOTAOSH%3E2.3.CO%3B2",
    "https://doi.org/",
    "not a doi",
    "",
];

#[test]
fn test_normalize_is_idempotent_on_valid_parts() {
    for input in SAMPLES {
        if let Some(doi) = normalize(input, loose()).filter(|doi| validate_part(doi)) {
            assert_eq!(normalize(&doi, loose()), Some(doi.clone()), "{input}");
        }
    }
}

#[test]
fn test_build_url_round_trips() {
    for part in ["10.1234/56789", "10.1016/j.cageo.2015.09.015", "10.1594/PANGAEA.941238"] {
        let url = build_url(part).expect("buildable");
        assert_eq!(normalize(&url, loose()).as_deref(), Some(part));
        assert_eq!(build_url(&url), Some(url));
    }
}

#[test]
fn test_strict_acceptance_is_subset() {
    for input in SAMPLES {
        if validate(input, strict()) {
            assert!(validate(input, loose()), "{input}");
        }
    }
}
