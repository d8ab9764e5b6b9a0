//! Report generation: walk the tracked path's history, label each
//! revision, and write the result as plain text.

pub mod pipeline;
pub mod writer;

pub use pipeline::{generate_labels, label_revisions, list_history};
pub use writer::{render, write_report};
