//! Revision history and pairwise diffs for a single tracked path.
//!
//! [`RevisionSource`] is the narrow seam the report pipeline depends on;
//! [`git::GitHistory`] backs it with git2. Diff bytes are turned into text
//! with [`decode::decode_lossy`], which never fails.

pub mod decode;
pub mod git;
mod source;

pub use source::RevisionSource;
