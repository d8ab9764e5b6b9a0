//! Keyword rules and the diff labeler.
//!
//! A [`RuleSet`] is an ordered table of regex patterns and the label each one
//! contributes. [`labeler::summarize`] checks every rule against a diff and
//! joins the distinct matched labels in table order.

pub mod labeler;
pub mod rules;

pub use labeler::{summarize, DEFAULT_SUMMARY, INITIAL_SUMMARY, LABEL_SEPARATOR};
pub use rules::{KeywordRule, RuleSet};
