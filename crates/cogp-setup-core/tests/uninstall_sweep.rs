//! Uninstall sweep behavior over candidate path lists.

use std::fs;
#[cfg(unix)]
use std::path::Path;

use cogp_setup_core::{RemovalOutcome, run_uninstall};

#[cfg(unix)]
fn set_dir_mode(path: &Path, mode: u32) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).expect("set permissions");
}

#[test]
fn uninstall_removes_installed_artifact() {
    let bin = tempfile::tempdir().expect("bin dir");
    let artifact = bin.path().join("cogp");
    fs::write(&artifact, b"binary").expect("write artifact");

    let outcomes = run_uninstall(&[artifact.clone()]);
    assert_eq!(outcomes, vec![RemovalOutcome::Removed(artifact.clone())]);
    assert!(!artifact.exists());
}

#[test]
fn repeated_uninstall_reports_not_found() {
    let bin = tempfile::tempdir().expect("bin dir");
    let artifact = bin.path().join("cogp");
    fs::write(&artifact, b"binary").expect("write artifact");

    let first = run_uninstall(&[artifact.clone()]);
    assert_eq!(first, vec![RemovalOutcome::Removed(artifact.clone())]);

    // Running again must stay safe and merely report the absence.
    let second = run_uninstall(&[artifact.clone()]);
    assert_eq!(second, vec![RemovalOutcome::NotFound(artifact)]);
}

#[test]
fn sweep_processes_every_candidate_independently() {
    let bin = tempfile::tempdir().expect("bin dir");
    let present = bin.path().join("cogp");
    let missing = bin.path().join("nested").join("cogp");
    let also_present = bin.path().join("cogp-legacy");
    fs::write(&present, b"a").expect("write artifact");
    fs::write(&also_present, b"b").expect("write legacy artifact");

    let outcomes = run_uninstall(&[present.clone(), missing.clone(), also_present.clone()]);

    assert_eq!(
        outcomes,
        vec![
            RemovalOutcome::Removed(present.clone()),
            RemovalOutcome::NotFound(missing),
            RemovalOutcome::Removed(also_present.clone()),
        ]
    );
    assert!(!present.exists());
    assert!(!also_present.exists());
}

#[test]
#[cfg(unix)]
fn sweep_continues_past_undeletable_artifact() {
    let root = tempfile::tempdir().expect("root dir");
    let locked = root.path().join("locked");
    fs::create_dir(&locked).expect("create locked dir");
    let undeletable = locked.join("cogp");
    fs::write(&undeletable, b"binary").expect("write artifact");
    let removable = root.path().join("cogp-legacy");
    fs::write(&removable, b"binary").expect("write legacy artifact");

    // Unlinking needs write permission on the parent directory.
    set_dir_mode(&locked, 0o555);
    if cogp_setup_core::paths::verify_writable(&locked).is_ok() {
        set_dir_mode(&locked, 0o755);
        return; // removal is not denied in this environment
    }

    let outcomes = run_uninstall(&[undeletable.clone(), removable.clone()]);
    set_dir_mode(&locked, 0o755);

    match &outcomes[0] {
        RemovalOutcome::Failed { path, reason } => {
            assert_eq!(path, &undeletable);
            assert!(!reason.is_empty());
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(outcomes[1], RemovalOutcome::Removed(removable.clone()));
    assert!(undeletable.is_file());
    assert!(!removable.exists());
}

#[test]
fn empty_target_list_is_a_clean_no_op() {
    assert!(run_uninstall(&[]).is_empty());
}
