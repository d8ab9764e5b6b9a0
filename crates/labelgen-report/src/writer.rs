use std::path::Path;

use labelgen_core::{LabelError, LabelRecord};

/// Render records as `"<prefix> - <summary>"` lines joined by `\n`.
///
/// There is no trailing newline.
///
/// # Examples
///
/// ```
/// use labelgen_core::{LabelRecord, RevisionId};
/// use labelgen_report::render;
///
/// let records = vec![
///     LabelRecord::new(&RevisionId::new("1111111aaaa"), "initial version"),
///     LabelRecord::new(&RevisionId::new("2222222bbbb"), "tweak"),
/// ];
/// assert_eq!(render(&records), "1111111 - initial version\n2222222 - tweak");
/// ```
pub fn render(records: &[LabelRecord]) -> String {
    records
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Overwrite `path` with the rendered report.
///
/// # Errors
///
/// Returns [`LabelError::Io`] if the file cannot be written.
pub fn write_report(path: &Path, records: &[LabelRecord]) -> Result<(), LabelError> {
    std::fs::write(path, render(records))?;
    Ok(())
}
