//! Build outcome metadata accumulated during a session

/// Metadata attached to the in-progress build, rendered by the scan server UI
///
/// Holds the scan server base address once resolved, plus the three kinds of
/// attachable metadata: labeled custom values, tags, and titled links.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BuildOutcome {
    server: Option<String>,
    values: Vec<(String, String)>,
    tags: Vec<String>,
    links: Vec<(String, String)>,
}

impl BuildOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the scan server base address once known
    pub fn set_server(&mut self, server: impl Into<String>) {
        self.server = Some(server.into());
    }

    /// The scan server base address, if resolved yet
    pub fn server(&self) -> Option<&str> {
        self.server.as_deref()
    }

    /// Attach a labeled custom value
    pub fn value(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.values.push((label.into(), value.into()));
    }

    /// Attach a tag
    pub fn tag(&mut self, tag: impl Into<String>) {
        self.tags.push(tag.into());
    }

    /// Attach a titled link
    pub fn link(&mut self, title: impl Into<String>, url: impl Into<String>) {
        self.links.push((title.into(), url.into()));
    }

    pub fn values(&self) -> &[(String, String)] {
        &self.values
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn links(&self) -> &[(String, String)] {
        &self.links
    }
}
