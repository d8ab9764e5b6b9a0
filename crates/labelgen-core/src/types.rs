use std::fmt;

/// Number of characters kept from a revision id in report lines.
pub const SHORT_ID_LEN: usize = 7;

/// Full hex identifier of a committed snapshot.
///
/// Ordering between ids only comes from the history enumerator; the id
/// itself carries no ordering.
///
/// # Examples
///
/// ```
/// use labelgen_core::RevisionId;
///
/// let id = RevisionId::new("4b825dc642cb6eb9a060e54bf8d69288fbee4904");
/// assert_eq!(id.short(), "4b825dc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RevisionId(String);

impl RevisionId {
    /// Wrap a hex object id.
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    /// The full identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The leading [`SHORT_ID_LEN`] characters.
    pub fn short(&self) -> &str {
        &self.0[..self.0.len().min(SHORT_ID_LEN)]
    }
}

impl fmt::Display for RevisionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One report line: a short revision id and its summary.
///
/// # Examples
///
/// ```
/// use labelgen_core::{LabelRecord, RevisionId};
///
/// let id = RevisionId::new("a94a8fe5ccb19ba61c4c0873d391e987982fbbd3");
/// let record = LabelRecord::new(&id, "style update");
/// assert_eq!(record.to_string(), "a94a8fe - style update");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRecord {
    /// Short revision id.
    pub prefix: String,
    /// Default token or comma-joined labels.
    pub summary: String,
}

impl LabelRecord {
    /// Build a record for `revision`, truncating its id.
    pub fn new(revision: &RevisionId, summary: impl Into<String>) -> Self {
        Self {
            prefix: revision.short().to_string(),
            summary: summary.into(),
        }
    }
}

impl fmt::Display for LabelRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.prefix, self.summary)
    }
}
