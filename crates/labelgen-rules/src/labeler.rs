use crate::rules::RuleSet;

/// Summary used when no rule matches.
pub const DEFAULT_SUMMARY: &str = "tweak";

/// Summary of the oldest revision, which has nothing to diff against.
pub const INITIAL_SUMMARY: &str = "initial version";

/// Joins distinct labels within one summary.
pub const LABEL_SEPARATOR: &str = ", ";

/// Label a diff by checking every rule in `rules`, in order.
///
/// Labels of matching rules are appended once each, so two rules sharing a
/// label contribute it a single time. The result follows rule order, not the
/// order keywords appear in the text. Returns [`DEFAULT_SUMMARY`] when
/// nothing matches.
///
/// # Examples
///
/// ```
/// use labelgen_rules::{summarize, KeywordRule, RuleSet};
///
/// let rules = RuleSet::new(vec![
///     KeywordRule::new("firebase", false, "firebase update").unwrap(),
///     KeywordRule::new("style", false, "style update").unwrap(),
/// ]);
/// assert_eq!(
///     summarize("+style\n+firebase\n", &rules),
///     "firebase update, style update"
/// );
/// ```
pub fn summarize(diff_text: &str, rules: &RuleSet) -> String {
    let mut labels: Vec<&str> = Vec::new();
    for rule in rules.rules() {
        if rule.is_match(diff_text) && !labels.contains(&rule.label()) {
            labels.push(rule.label());
        }
    }

    if labels.is_empty() {
        DEFAULT_SUMMARY.to_string()
    } else {
        labels.join(LABEL_SEPARATOR)
    }
}
