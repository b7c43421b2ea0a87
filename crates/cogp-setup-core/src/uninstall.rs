//! Best-effort removal of installed artifacts.

use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of one candidate-path removal attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// The artifact existed and was deleted.
    Removed(PathBuf),
    /// Nothing (or no regular file) at the candidate path.
    NotFound(PathBuf),
    /// Deletion was attempted and failed; the sweep continued regardless.
    Failed { path: PathBuf, reason: String },
}

/// Sweep every candidate path, collecting one outcome per path.
///
/// Individual failures never abort the sweep; callers decide how to render
/// the outcomes.
#[must_use]
pub fn remove_artifacts(candidates: &[PathBuf]) -> Vec<RemovalOutcome> {
    candidates.iter().map(|path| remove_one(path)).collect()
}

fn remove_one(path: &Path) -> RemovalOutcome {
    if !path.is_file() {
        return RemovalOutcome::NotFound(path.to_path_buf());
    }
    match fs::remove_file(path) {
        Ok(()) => RemovalOutcome::Removed(path.to_path_buf()),
        Err(e) => RemovalOutcome::Failed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let artifact = dir.path().join("cogp");
        fs::write(&artifact, b"binary").expect("write artifact");

        let outcomes = remove_artifacts(&[artifact.clone()]);
        assert_eq!(outcomes, vec![RemovalOutcome::Removed(artifact.clone())]);
        assert!(!artifact.exists());
    }

    #[test]
    fn missing_file_reports_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let artifact = dir.path().join("cogp");

        let outcomes = remove_artifacts(&[artifact.clone()]);
        assert_eq!(outcomes, vec![RemovalOutcome::NotFound(artifact)]);
    }

    #[test]
    fn directory_at_candidate_path_counts_as_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("cogp");
        fs::create_dir(&blocker).expect("create dir");

        let outcomes = remove_artifacts(&[blocker.clone()]);
        assert_eq!(outcomes, vec![RemovalOutcome::NotFound(blocker.clone())]);
        assert!(blocker.is_dir());
    }

    #[test]
    fn mixed_list_processes_every_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let first = dir.path().join("cogp");
        let missing = dir.path().join("gone").join("cogp");
        let second = dir.path().join("cogp-old");
        fs::write(&first, b"a").expect("write first");
        fs::write(&second, b"b").expect("write second");

        let outcomes = remove_artifacts(&[first.clone(), missing.clone(), second.clone()]);
        assert_eq!(
            outcomes,
            vec![
                RemovalOutcome::Removed(first.clone()),
                RemovalOutcome::NotFound(missing),
                RemovalOutcome::Removed(second.clone()),
            ]
        );
        assert!(!first.exists());
        assert!(!second.exists());
    }

    #[test]
    fn empty_candidate_list_yields_no_outcomes() {
        assert!(remove_artifacts(&[]).is_empty());
    }
}
