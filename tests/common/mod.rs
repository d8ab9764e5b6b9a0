use std::path::Path;
use std::process::{Command, Output};

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

    /// Write `content` to `rel`, commit it, and return the full hex id.
    pub fn commit_file(&mut self, rel: &str, content: &str) -> String {
        let full = self.dir.path().join(rel);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&full, content).unwrap();

        let mut index = self.repo.index().unwrap();
        index.add_path(Path::new(rel)).unwrap();
        index.write().unwrap();
        self.commit_index(&format!("update {rel}")).to_string()
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

    /// Run the labelgen binary inside the repository.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_labelgen"))
            .args(args)
            .current_dir(self.path())
            .env("NO_COLOR", "1")
            .output()
            .unwrap()
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.path().join(rel)).unwrap()
    }
}

/// An HTML page whose head and tail are far enough apart that a diff
/// touching one never shows the other as context.
pub fn page(head: &[&str], tail: &[&str]) -> String {
    let mut lines: Vec<String> = head.iter().map(|l| l.to_string()).collect();
    lines.extend((1..=8).map(|n| format!("<p>filler {n}</p>")));
    lines.extend(tail.iter().map(|l| l.to_string()));
    lines.join("\n") + "\n"
}

pub fn short(id: &str) -> &str {
    &id[..7]
}
