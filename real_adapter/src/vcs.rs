//! Version control state of the checkout a binary is built from.
//!
//! Compiled into the build script, which bakes the settings into the binary.

use std::path::{Path, PathBuf};
use std::process::Command;

pub struct GitCheckout {
    work_tree: PathBuf,
    git_dir: PathBuf,
}

impl GitCheckout {
    /// `None` outside a git work tree or without a `git` executable.
    pub fn discover(directory: &Path) -> Option<Self> {
        let work_tree = git(directory, &["rev-parse", "--show-toplevel"])?;
        let git_dir = git(directory, &["rev-parse", "--absolute-git-dir"])?;
        Some(Self {
            work_tree: PathBuf::from(work_tree.trim()),
            git_dir: PathBuf::from(git_dir.trim()),
        })
    }

    /// The `vcs*` build settings, empty while `HEAD` names no commit.
    pub fn settings(&self) -> Vec<(String, String)> {
        let Some(revision) = self
            .git(&["rev-parse", "HEAD"])
            .filter(|revision| !revision.trim().is_empty())
        else {
            return vec![];
        };
        let time = self
            .git(&["log", "-1", "--format=%cI"])
            .unwrap_or_default();
        let status = self.status().unwrap_or_default();
        vcs_settings(revision.trim(), time.trim(), &status)
    }

    /// Every path whose change can alter [`GitCheckout::settings`]: the branch refs,
    /// all tracked files and whatever `git status` currently reports.
    ///
    /// Excludes the index, which git may rewrite while reporting status.
    pub fn watched_paths(&self) -> Vec<PathBuf> {
        let mut paths = vec![self.git_dir.join("HEAD"), self.git_dir.join("refs/heads")];
        let packed_refs = self.git_dir.join("packed-refs");
        if packed_refs.exists() {
            paths.push(packed_refs);
        }
        if let Some(tracked) = self.git(&["ls-files", "-z"]) {
            paths.extend(
                tracked
                    .split('\0')
                    .filter(|path| !path.is_empty())
                    .map(|path| self.work_tree.join(path)),
            );
        }
        if let Some(status) = self.status() {
            paths.extend(
                status_paths(&status)
                    .into_iter()
                    .map(|path| self.work_tree.join(path)),
            );
        }
        paths.sort();
        paths.dedup();
        paths
    }

    fn status(&self) -> Option<String> {
        self.git(&["--no-optional-locks", "status", "--porcelain", "-z"])
    }

    fn git(&self, args: &[&str]) -> Option<String> {
        git(&self.work_tree, args)
    }
}

fn vcs_settings(revision: &str, time: &str, status: &str) -> Vec<(String, String)> {
    let mut settings = vec![
        ("vcs".to_string(), "git".to_string()),
        ("vcs.revision".to_string(), revision.to_string()),
    ];
    if !time.is_empty() {
        settings.push(("vcs.time".to_string(), time.to_string()));
    }
    let modified = !status.is_empty();
    settings.push(("vcs.modified".to_string(), modified.to_string()));
    settings
}

/// Paths of `git status --porcelain -z` output, renames and copies report their origin too.
fn status_paths(status: &str) -> Vec<&str> {
    let mut paths = vec![];
    let mut entries = status.split('\0').filter(|entry| !entry.is_empty());
    while let Some(entry) = entries.next() {
        let Some(path) = entry.get(3..) else {
            continue;
        };
        paths.push(path);
        if entry.starts_with(['R', 'C']) {
            if let Some(origin) = entries.next() {
                paths.push(origin);
            }
        }
    }
    paths
}

/// Raw stdout, untrimmed since leading spaces in status output are significant.
fn git(directory: &Path, args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .current_dir(directory)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use test_temp_dir::test_temp_dir;

    fn setting<'a>(settings: &'a [(String, String)], key: &str) -> Option<&'a str> {
        settings
            .iter()
            .rev()
            .find(|(setting_key, _)| setting_key == key)
            .map(|(_, value)| value.as_str())
    }

    fn git_available() -> bool {
        Command::new("git")
            .arg("--version")
            .output()
            .is_ok_and(|output| output.status.success())
    }

    fn run_git(directory: &Path, args: &[&str]) {
        let output = Command::new("git")
            .args([
                "-c",
                "user.name=Build Info",
                "-c",
                "user.email=buildinfo@example.com",
                "-c",
                "commit.gpgsign=false",
            ])
            .args(args)
            .current_dir(directory)
            .output()
            .unwrap();
        assert!(
            output.status.success(),
            "git {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    #[test]
    fn clean_settings() {
        let settings = vcs_settings(
            "6e31ad65dcfcb9f0908cea7d17e17b5d78d1f0a8",
            "2023-01-10T12:00:00+01:00",
            "",
        );
        assert_eq!(
            settings,
            vec![
                ("vcs".to_string(), "git".to_string()),
                (
                    "vcs.revision".to_string(),
                    "6e31ad65dcfcb9f0908cea7d17e17b5d78d1f0a8".to_string()
                ),
                ("vcs.time".to_string(), "2023-01-10T12:00:00+01:00".to_string()),
                ("vcs.modified".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn dirty_settings_without_time() {
        let settings = vcs_settings("6e31ad65dcfc", "", " M logic/src/help.rs\0");
        assert_eq!(setting(&settings, "vcs.time"), None);
        assert_eq!(setting(&settings, "vcs.modified"), Some("true"));
    }

    #[test]
    fn paths_of_status_entries() {
        let status = " M logic/src/help.rs\0?? notes/\0R  src/new.rs\0src/old.rs\0D  removed.txt\0";
        assert_eq!(
            status_paths(status),
            vec![
                "logic/src/help.rs",
                "notes/",
                "src/new.rs",
                "src/old.rs",
                "removed.txt"
            ]
        );
        assert!(status_paths("").is_empty());
    }

    #[test]
    fn settings_follow_the_work_tree() {
        if !git_available() {
            return;
        }
        let temp_dir = test_temp_dir!();
        let root = temp_dir.as_path_untracked();
        run_git(root, &["init", "--quiet"]);
        fs::write(root.join("main.rs"), "fn main() {}\n").unwrap();
        run_git(root, &["add", "main.rs"]);
        run_git(root, &["commit", "--quiet", "-m", "initial"]);

        let checkout = GitCheckout::discover(root).unwrap();
        let clean = checkout.settings();
        assert_eq!(setting(&clean, "vcs"), Some("git"));
        assert_eq!(setting(&clean, "vcs.modified"), Some("false"));
        let revision = setting(&clean, "vcs.revision").unwrap();
        assert!(!revision.is_empty());
        assert!(revision.chars().all(|c| c.is_ascii_hexdigit()));

        let watched = checkout.watched_paths();
        assert!(watched.iter().any(|path| path.ends_with("main.rs")));
        assert!(watched.contains(&checkout.git_dir.join("HEAD")));
        assert!(!watched.contains(&checkout.git_dir.join("index")));

        fs::write(root.join("main.rs"), "fn main() { println!(); }\n").unwrap();
        let dirty = checkout.settings();
        assert_eq!(setting(&dirty, "vcs.modified"), Some("true"));
        assert_eq!(setting(&dirty, "vcs.revision"), Some(revision));
    }

    #[test]
    fn untracked_files_are_watched_and_dirty() {
        if !git_available() {
            return;
        }
        let temp_dir = test_temp_dir!();
        let root = temp_dir.as_path_untracked();
        run_git(root, &["init", "--quiet"]);
        fs::write(root.join("main.rs"), "fn main() {}\n").unwrap();
        run_git(root, &["add", "main.rs"]);
        run_git(root, &["commit", "--quiet", "-m", "initial"]);
        fs::write(root.join("notes.txt"), "draft\n").unwrap();

        let checkout = GitCheckout::discover(root).unwrap();
        assert_eq!(setting(&checkout.settings(), "vcs.modified"), Some("true"));
        assert!(
            checkout
                .watched_paths()
                .iter()
                .any(|path| path.ends_with("notes.txt"))
        );
    }

    #[test]
    fn status_leaves_the_index_alone() {
        if !git_available() {
            return;
        }
        let temp_dir = test_temp_dir!();
        let root = temp_dir.as_path_untracked();
        run_git(root, &["init", "--quiet"]);
        fs::write(root.join("main.rs"), "fn main() {}\n").unwrap();
        run_git(root, &["add", "main.rs"]);
        run_git(root, &["commit", "--quiet", "-m", "initial"]);
        fs::write(root.join("main.rs"), "fn main() { println!(); }\n").unwrap();

        let checkout = GitCheckout::discover(root).unwrap();
        let index = checkout.git_dir.join("index");
        let before = fs::metadata(&index).unwrap().modified().unwrap();
        checkout.settings();
        checkout.watched_paths();
        let after = fs::metadata(&index).unwrap().modified().unwrap();
        assert_eq!(before, after);
    }
}
