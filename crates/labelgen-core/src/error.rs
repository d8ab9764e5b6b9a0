/// Errors that can occur while building a label report.
///
/// Library crates return this type directly. It derives
/// [`miette::Diagnostic`] so the binary can propagate it with `?` and show
/// the attached help text.
///
/// # Examples
///
/// ```
/// use labelgen_core::LabelError;
///
/// let err = LabelError::EmptyHistory { path: "index.html".into() };
/// assert!(err.to_string().contains("index.html"));
/// ```
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum LabelError {
    /// Filesystem I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or missing configuration.
    #[error("configuration error: {0}")]
    #[diagnostic(code(labelgen::config))]
    Config(String),

    /// Git operation failure.
    #[error("git error: {0}")]
    #[diagnostic(code(labelgen::git))]
    Git(String),

    /// A keyword rule pattern failed to compile.
    #[error("invalid keyword pattern: {0}")]
    Pattern(String),

    /// TOML deserialization failure.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The tracked path has no revisions at all.
    #[error("no revisions found touching `{path}`")]
    #[diagnostic(
        code(labelgen::empty_history),
        help("check --path (or report.path); it is relative to the repository root")
    )]
    EmptyHistory {
        /// The tracked path that was queried.
        path: String,
    },
}
