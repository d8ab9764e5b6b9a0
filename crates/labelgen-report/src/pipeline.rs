//! History → diff → label, one revision at a time.
//!
//! Each diff uses the previous revision as its base, so the walk is strictly
//! sequential. Any failing query aborts the whole run.

use labelgen_core::{LabelError, LabelRecord, RevisionId};
use labelgen_history::decode::decode_lossy;
use labelgen_history::RevisionSource;
use labelgen_rules::{RuleSet, INITIAL_SUMMARY};

/// Revisions touching `path`, oldest first.
///
/// # Errors
///
/// Returns [`LabelError::EmptyHistory`] if nothing ever touched `path`, or
/// whatever the source returns if the query fails.
pub fn list_history<S>(source: &S, path: &str) -> Result<Vec<RevisionId>, LabelError>
where
    S: RevisionSource + ?Sized,
{
    let revisions = source.list_revisions_touching(path)?;
    if revisions.is_empty() {
        return Err(LabelError::EmptyHistory { path: path.into() });
    }
    Ok(revisions)
}

/// Label `revisions` in order, calling `on_record` as each one is produced.
///
/// The first revision is always [`INITIAL_SUMMARY`]; every later one is
/// summarized from its diff against the revision before it.
///
/// # Errors
///
/// Returns the first error raised by [`RevisionSource::diff_between`].
pub fn label_revisions<S, F>(
    source: &S,
    revisions: &[RevisionId],
    path: &str,
    rules: &RuleSet,
    mut on_record: F,
) -> Result<Vec<LabelRecord>, LabelError>
where
    S: RevisionSource + ?Sized,
    F: FnMut(&LabelRecord),
{
    let Some((first, rest)) = revisions.split_first() else {
        return Ok(Vec::new());
    };

    let mut records = Vec::with_capacity(revisions.len());
    let initial = LabelRecord::new(first, INITIAL_SUMMARY);
    on_record(&initial);
    records.push(initial);

    let mut prev = first;
    for current in rest {
        let diff = source.diff_between(prev, current, path)?;
        let summary = rules.summarize(&decode_lossy(&diff));
        let record = LabelRecord::new(current, summary);
        on_record(&record);
        records.push(record);
        prev = current;
    }

    Ok(records)
}

/// Label every revision of `path` found in `source`.
///
/// # Errors
///
/// Fails on an empty history or on the first failing query.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use labelgen_history::git::GitHistory;
/// use labelgen_report::{generate_labels, render};
/// use labelgen_rules::RuleSet;
///
/// let history = GitHistory::open(Path::new(".")).unwrap();
/// let rules = RuleSet::builtin().unwrap();
/// let records = generate_labels(&history, "index.html", &rules).unwrap();
/// println!("{}", render(&records));
/// ```
pub fn generate_labels<S>(
    source: &S,
    path: &str,
    rules: &RuleSet,
) -> Result<Vec<LabelRecord>, LabelError>
where
    S: RevisionSource + ?Sized,
{
    let revisions = list_history(source, path)?;
    label_revisions(source, &revisions, path, rules, |_| {})
}
