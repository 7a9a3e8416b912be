//! Scan record derivation and rendering
//!
//! One record is appended to the scan log per published scan. The record
//! keeps the scan URI exactly as the host delivered it; only the base URL is
//! derived from its parts.

use crate::capture::error::{CaptureError, CaptureResult};
use crate::session::api::PublishedScan;
use url::Url;

/// One row of the persisted scan log
///
/// Immutable once constructed; all fields are non-empty for any scan the
/// server accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanRecord {
    base_url: String,
    scan_uri: String,
    scan_id: String,
}

impl ScanRecord {
    /// Derive a record from a published scan descriptor
    ///
    /// `base_url` is `scheme://host`, with `:port` appended only when the
    /// URI carries an explicit port; a URI without a port yields no
    /// colon-port suffix at all.
    pub fn from_published(scan: &PublishedScan) -> CaptureResult<Self> {
        let parsed = Url::parse(&scan.uri).map_err(|e| CaptureError::InvalidScanUri {
            uri: scan.uri.clone(),
            reason: e.to_string(),
        })?;
        let host = parsed.host_str().ok_or_else(|| CaptureError::InvalidScanUri {
            uri: scan.uri.clone(),
            reason: "URI has no host".to_string(),
        })?;

        let base_url = match parsed.port() {
            Some(port) => format!("{}://{}:{}", parsed.scheme(), host, port),
            None => format!("{}://{}", parsed.scheme(), host),
        };

        Ok(Self {
            base_url,
            scan_uri: scan.uri.clone(),
            scan_id: scan.id.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn scan_uri(&self) -> &str {
        &self.scan_uri
    }

    pub fn scan_id(&self) -> &str {
        &self.scan_id
    }

    /// Render the record as one newline-terminated scan log line
    ///
    /// Three comma-separated fields, no header, no escaping; field content
    /// is constrained upstream.
    pub fn to_csv_line(&self) -> String {
        format!("{},{},{}\n", self.base_url, self.scan_uri, self.scan_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(uri: &str, id: &str) -> PublishedScan {
        PublishedScan::new(uri.to_string(), id.to_string())
    }

    #[test]
    fn test_base_url_without_port() {
        let record =
            ScanRecord::from_published(&scan("https://scans.example.com/s/abc123", "abc123"))
                .unwrap();
        assert_eq!(record.base_url(), "https://scans.example.com");
        assert_eq!(
            record.to_csv_line(),
            "https://scans.example.com,https://scans.example.com/s/abc123,abc123\n"
        );
    }

    #[test]
    fn test_base_url_with_explicit_port() {
        let record =
            ScanRecord::from_published(&scan("https://scans.example.com:9191/s/xyz", "xyz"))
                .unwrap();
        assert_eq!(record.base_url(), "https://scans.example.com:9191");
        assert_eq!(
            record.to_csv_line(),
            "https://scans.example.com:9191,https://scans.example.com:9191/s/xyz,xyz\n"
        );
    }

    #[test]
    fn test_scan_uri_preserved_verbatim() {
        let record =
            ScanRecord::from_published(&scan("http://scans.example.com:8080/s/q?x=1", "q"))
                .unwrap();
        assert_eq!(record.scan_uri(), "http://scans.example.com:8080/s/q?x=1");
        assert_eq!(record.scan_id(), "q");
    }

    #[test]
    fn test_invalid_uri_rejected() {
        let err = ScanRecord::from_published(&scan("not a uri", "x")).unwrap_err();
        assert!(matches!(err, CaptureError::InvalidScanUri { .. }));

        // Parseable but hostless URIs are rejected too
        let err = ScanRecord::from_published(&scan("mailto:nobody@example.com", "x")).unwrap_err();
        assert!(matches!(err, CaptureError::InvalidScanUri { .. }));
    }
}
