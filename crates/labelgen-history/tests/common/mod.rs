use std::path::Path;

use git2::{Commit, Oid, Repository, Signature, Time};
use tempfile::TempDir;

/// Throwaway repository with a deterministic commit clock.
pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
    clock: i64,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        Self {
            dir,
            repo,
            clock: 1_700_000_000,
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` to `rel` and commit it on HEAD.
    pub fn commit_file(&mut self, rel: &str, content: &[u8], message: &str) -> Oid {
        let full = self.dir.path().join(rel);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&full, content).unwrap();

        let mut index = self.repo.index().unwrap();
        index.add_path(Path::new(rel)).unwrap();
        index.write().unwrap();
        self.commit_index(message)
    }

    /// Delete `rel` and commit the removal on HEAD.
    pub fn remove_file(&mut self, rel: &str, message: &str) -> Oid {
        std::fs::remove_file(self.dir.path().join(rel)).unwrap();

        let mut index = self.repo.index().unwrap();
        index.remove_path(Path::new(rel)).unwrap();
        index.write().unwrap();
        self.commit_index(message)
    }

    /// Commit a single top-level file on explicit `parents`.
    ///
    /// HEAD moves only when `update_head` is set, so side branches and
    /// merges can be built without touching the working tree.
    pub fn commit_on(
        &mut self,
        parents: &[Oid],
        rel: &str,
        content: &[u8],
        update_head: bool,
    ) -> Oid {
        self.clock += 60;
        let sig = Signature::new("Test", "test@example.com", &Time::new(self.clock, 0)).unwrap();

        let blob = self.repo.blob(content).unwrap();
        let mut builder = self.repo.treebuilder(None).unwrap();
        builder.insert(rel, blob, 0o100644).unwrap();
        let tree = self.repo.find_tree(builder.write().unwrap()).unwrap();

        let parent_commits: Vec<Commit> = parents
            .iter()
            .map(|oid| self.repo.find_commit(*oid).unwrap())
            .collect();
        let parent_refs: Vec<&Commit> = parent_commits.iter().collect();

        let update_ref = update_head.then_some("HEAD");
        self.repo
            .commit(update_ref, &sig, &sig, "commit", &tree, &parent_refs)
            .unwrap()
    }

    fn commit_index(&mut self, message: &str) -> Oid {
        self.clock += 60;
        let sig = Signature::new("Test", "test@example.com", &Time::new(self.clock, 0)).unwrap();

        let mut index = self.repo.index().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();

        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.target())
            .map(|oid| self.repo.find_commit(oid).unwrap());
        let parents: Vec<&Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }
}
