use labelgen_core::LabelError;
use regex::{Regex, RegexBuilder};

use crate::labeler;

/// Built-in table: pattern, case-insensitive flag, label.
const BUILTIN_RULES: &[(&str, bool, &str)] = &[
    ("og:", false, "social meta update"),
    ("twitter:", false, "social meta update"),
    ("gesture|touch|mobile", true, "gesture/mobile update"),
    ("firebase", true, "firebase update"),
    ("firestore", true, "firestore update"),
    ("auth|login", true, "authentication update"),
    ("modal", true, "modal update"),
    ("controls", true, "controls update"),
    ("drag", true, "drag fix"),
    ("style", true, "style update"),
];

/// A compiled pattern and the label it contributes when found.
///
/// # Examples
///
/// ```
/// use labelgen_rules::KeywordRule;
///
/// let rule = KeywordRule::new("firebase", true, "firebase update").unwrap();
/// assert!(rule.is_match("+import Firebase from 'x'"));
/// assert_eq!(rule.label(), "firebase update");
/// ```
#[derive(Debug, Clone)]
pub struct KeywordRule {
    pattern: Regex,
    label: String,
}

impl KeywordRule {
    /// Compile `pattern`, optionally ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::Pattern`] if `pattern` is not a valid regex.
    pub fn new(
        pattern: &str,
        case_insensitive: bool,
        label: impl Into<String>,
    ) -> Result<Self, LabelError> {
        let compiled = RegexBuilder::new(pattern)
            .case_insensitive(case_insensitive)
            .build()
            .map_err(|e| LabelError::Pattern(format!("{pattern}: {e}")))?;
        Ok(Self {
            pattern: compiled,
            label: label.into(),
        })
    }

    /// Whether the pattern occurs anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Label appended to the summary when the pattern matches.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Ordered, immutable sequence of keyword rules.
///
/// Order decides how labels are concatenated, not which rule wins: every
/// rule is checked against every diff.
///
/// # Examples
///
/// ```
/// use labelgen_rules::RuleSet;
///
/// let rules = RuleSet::builtin().unwrap();
/// assert_eq!(rules.summarize("+<div class=\"modal\">"), "modal update");
/// assert_eq!(rules.summarize("+<p>hello</p>"), "tweak");
/// ```
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<KeywordRule>,
}

impl RuleSet {
    /// Build a set from `rules`, keeping their order.
    pub fn new(rules: Vec<KeywordRule>) -> Self {
        Self { rules }
    }

    /// The compiled-in keyword table.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::Pattern`] if a built-in pattern fails to compile.
    pub fn builtin() -> Result<Self, LabelError> {
        let rules = BUILTIN_RULES
            .iter()
            .map(|(pattern, case_insensitive, label)| {
                KeywordRule::new(pattern, *case_insensitive, *label)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(rules))
    }

    /// Rules in table order.
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// Number of rules, shown in verbose output.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Summarize `diff_text`; see [`labeler::summarize`].
    pub fn summarize(&self, diff_text: &str) -> String {
        labeler::summarize(diff_text, self)
    }
}
