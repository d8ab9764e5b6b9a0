use labelgen_core::{LabelError, RevisionId};

/// Read-only view of a version-control history, scoped by path.
///
/// Implementations block until each query completes; callers issue them
/// one at a time.
pub trait RevisionSource {
    /// Revisions whose change set includes `path`, oldest first.
    ///
    /// A path that never existed yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::Git`] if the history cannot be walked.
    fn list_revisions_touching(&self, path: &str) -> Result<Vec<RevisionId>, LabelError>;

    /// Raw unified diff of `path` between `base` and `target`.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::Git`] if either revision cannot be resolved
    /// or the diff cannot be produced.
    fn diff_between(
        &self,
        base: &RevisionId,
        target: &RevisionId,
        path: &str,
    ) -> Result<Vec<u8>, LabelError>;
}
