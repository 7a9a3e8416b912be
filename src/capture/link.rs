//! Cross-reference search links
//!
//! A (label, value) annotation becomes a search-query URL that filters the
//! scan server's listing to scans carrying that annotation and pre-selects
//! the scan currently being viewed. The server substitutes the literal
//! `{SCAN_ID}` placeholder in the fragment.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Placeholder the scan server expands to "the scan currently being viewed"
pub const SCAN_ID_PLACEHOLDER: &str = "{SCAN_ID}";

// RFC 3986 unreserved characters pass through; everything else is escaped.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// A titled link attached to the build outcome
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrossReferenceLink {
    pub title: String,
    pub url: String,
}

impl CrossReferenceLink {
    /// Build the search link for a (label, value) annotation against a scan
    /// server base address
    pub fn for_annotation(server: &str, label: &str, value: &str) -> Self {
        let url = format!(
            "{}scans?search.names={}&search.values={}#selection.buildScanB={}",
            append_if_missing(server, '/'),
            url_encode(label),
            url_encode(value),
            url_encode(SCAN_ID_PLACEHOLDER)
        );
        Self {
            title: format!("{label} build scans"),
            url,
        }
    }
}

/// Percent-encode UTF-8 text per RFC 3986
pub fn url_encode(text: &str) -> String {
    utf8_percent_encode(text, QUERY_ENCODE_SET).to_string()
}

/// Append `suffix` to `base` unless it already ends with it
pub fn append_if_missing(base: &str, suffix: char) -> String {
    if base.ends_with(suffix) {
        base.to_string()
    } else {
        format!("{base}{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_encode_space_and_braces() {
        assert_eq!(url_encode("Experiment id"), "Experiment%20id");
        assert_eq!(url_encode("{SCAN_ID}"), "%7BSCAN_ID%7D");
        // Unreserved characters pass through
        assert_eq!(url_encode("exp-42_a.b~c"), "exp-42_a.b~c");
    }

    #[test]
    fn test_append_if_missing_is_idempotent() {
        assert_eq!(
            append_if_missing("https://scans.example.com", '/'),
            "https://scans.example.com/"
        );
        assert_eq!(
            append_if_missing("https://scans.example.com/", '/'),
            "https://scans.example.com/"
        );
        assert_eq!(
            append_if_missing(&append_if_missing("https://scans.example.com", '/'), '/'),
            "https://scans.example.com/"
        );
    }

    #[test]
    fn test_search_link_exact_form() {
        let link = CrossReferenceLink::for_annotation(
            "https://scans.example.com",
            "Experiment id",
            "exp-42",
        );
        assert_eq!(link.title, "Experiment id build scans");
        assert_eq!(
            link.url,
            "https://scans.example.com/scans?search.names=Experiment%20id&search.values=exp-42#selection.buildScanB=%7BSCAN_ID%7D"
        );
    }

    #[test]
    fn test_search_link_with_trailing_slash_base() {
        let link = CrossReferenceLink::for_annotation(
            "https://scans.example.com/",
            "Experiment run id",
            "run 7",
        );
        assert_eq!(
            link.url,
            "https://scans.example.com/scans?search.names=Experiment%20run%20id&search.values=run%207#selection.buildScanB=%7BSCAN_ID%7D"
        );
    }
}
