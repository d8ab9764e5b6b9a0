//! History and diff queries via git2.
//!
//! Mirrors `git log --reverse -- <path>` for enumeration and
//! `git diff <base> <target> -- <path>` for the pairwise patch.

use std::collections::HashSet;
use std::path::Path;

use git2::{Commit, DiffFormat, DiffOptions, ErrorCode, Oid, Repository, Sort, Tree};
use labelgen_core::{LabelError, RevisionId};

use crate::source::RevisionSource;

/// A git repository opened for path-scoped history queries.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use labelgen_history::git::GitHistory;
/// use labelgen_history::RevisionSource;
///
/// let history = GitHistory::open(Path::new(".")).unwrap();
/// let revisions = history.list_revisions_touching("index.html").unwrap();
/// for r in &revisions {
///     println!("{}", r.short());
/// }
/// ```
pub struct GitHistory {
    repo: Repository,
}

impl GitHistory {
    /// Open the repository containing `repo_path`, searching parent
    /// directories like `git` does.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::Git`] if no repository encloses `repo_path`.
    pub fn open(repo_path: &Path) -> Result<Self, LabelError> {
        let repo = Repository::discover(repo_path)
            .map_err(|e| LabelError::Git(format!("failed to open repository: {e}")))?;
        Ok(Self { repo })
    }

    fn find_tree(&self, id: &RevisionId) -> Result<Tree<'_>, LabelError> {
        let oid = Oid::from_str(id.as_str())
            .map_err(|e| LabelError::Git(format!("invalid revision id '{id}': {e}")))?;
        let commit = self
            .repo
            .find_commit(oid)
            .map_err(|e| LabelError::Git(format!("failed to find commit {id}: {e}")))?;
        commit
            .tree()
            .map_err(|e| LabelError::Git(format!("failed to get tree of {id}: {e}")))
    }

    /// Commits `git log -- <path>` would show, following git's default
    /// history simplification.
    ///
    /// A commit whose entry at `path` matches one of its parents is hidden,
    /// and the walk continues through that parent only. Side branches a
    /// merge discarded are never visited.
    fn simplified_history(&self, path: &Path) -> Result<HashSet<Oid>, LabelError> {
        let head = self
            .repo
            .head()
            .and_then(|reference| reference.peel_to_commit())
            .map_err(|e| LabelError::Git(format!("failed to resolve HEAD: {e}")))?;

        let mut pending = vec![head.id()];
        let mut visited = HashSet::new();
        let mut touching = HashSet::new();

        while let Some(oid) = pending.pop() {
            if !visited.insert(oid) {
                continue;
            }
            let commit = self
                .repo
                .find_commit(oid)
                .map_err(|e| LabelError::Git(format!("failed to find commit: {e}")))?;
            let tree = commit
                .tree()
                .map_err(|e| LabelError::Git(format!("failed to get commit tree: {e}")))?;
            let current = entry_at(&tree, path)?;

            let parents: Vec<Commit<'_>> = commit.parents().collect();
            if parents.is_empty() {
                if current.is_some() {
                    touching.insert(oid);
                }
                continue;
            }

            let mut same_as = None;
            for parent in &parents {
                let parent_tree = parent
                    .tree()
                    .map_err(|e| LabelError::Git(format!("failed to get parent tree: {e}")))?;
                if entry_at(&parent_tree, path)? == current {
                    same_as = Some(parent.id());
                    break;
                }
            }

            match same_as {
                Some(parent) => pending.push(parent),
                None => {
                    touching.insert(oid);
                    pending.extend(parents.iter().map(Commit::id));
                }
            }
        }

        Ok(touching)
    }
}

/// Blob id and file mode at `path`, or `None` if absent.
fn entry_at(tree: &Tree<'_>, path: &Path) -> Result<Option<(Oid, i32)>, LabelError> {
    match tree.get_path(path) {
        Ok(entry) => Ok(Some((entry.id(), entry.filemode()))),
        Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
        Err(e) => Err(LabelError::Git(format!(
            "failed to look up {}: {e}",
            path.display()
        ))),
    }
}

impl RevisionSource for GitHistory {
    fn list_revisions_touching(&self, path: &str) -> Result<Vec<RevisionId>, LabelError> {
        let mut revwalk = self
            .repo
            .revwalk()
            .map_err(|e| LabelError::Git(format!("failed to create revwalk: {e}")))?;

        revwalk
            .set_sorting(Sort::TOPOLOGICAL | Sort::TIME | Sort::REVERSE)
            .map_err(|e| LabelError::Git(format!("failed to set revwalk order: {e}")))?;
        revwalk
            .push_head()
            .map_err(|e| LabelError::Git(format!("failed to push HEAD: {e}")))?;

        let touching = self.simplified_history(Path::new(path))?;
        let mut revisions = Vec::with_capacity(touching.len());

        for oid_result in revwalk {
            let oid = oid_result.map_err(|e| LabelError::Git(format!("revwalk error: {e}")))?;
            if touching.contains(&oid) {
                revisions.push(RevisionId::new(oid.to_string()));
            }
        }

        Ok(revisions)
    }

    fn diff_between(
        &self,
        base: &RevisionId,
        target: &RevisionId,
        path: &str,
    ) -> Result<Vec<u8>, LabelError> {
        let base_tree = self.find_tree(base)?;
        let target_tree = self.find_tree(target)?;

        let mut diff_opts = DiffOptions::new();
        diff_opts.pathspec(path).disable_pathspec_match(true);

        let diff = self
            .repo
            .diff_tree_to_tree(Some(&base_tree), Some(&target_tree), Some(&mut diff_opts))
            .map_err(|e| LabelError::Git(format!("failed to compute diff: {e}")))?;

        let mut patch = Vec::new();
        diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
            // Content lines come without their +/-/space marker.
            if matches!(line.origin(), '+' | '-' | ' ') {
                patch.push(line.origin() as u8);
            }
            patch.extend_from_slice(line.content());
            true
        })
        .map_err(|e| LabelError::Git(format!("failed to print diff: {e}")))?;

        Ok(patch)
    }
}
