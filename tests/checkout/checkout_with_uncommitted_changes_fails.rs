use crate::common::command::{init_repository_dir, lgit_commit_all, run_lgit_command, stderr_of_failure};
use crate::common::file::{FileSpec, read_file, write_file};
use crate::common::{read_head, read_index_bytes};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

/// Repository on `master` with a `feature` branch one commit ahead
#[fixture]
fn diverged_repository_dir(init_repository_dir: TempDir) -> TempDir {
    let dir = init_repository_dir.path();
    run_lgit_command(dir, &["branch", "feature"])
        .assert()
        .success();
    run_lgit_command(dir, &["checkout", "feature"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.join("a/2.txt"), "dos".to_string()));
    lgit_commit_all(dir, "Feature work");
    run_lgit_command(dir, &["checkout", "master"])
        .assert()
        .success();

    init_repository_dir
}

#[rstest]
fn checkout_with_unstaged_changes_fails(
    diverged_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = diverged_repository_dir.path();
    write_file(FileSpec::new(dir.join("1.txt"), "uncommitted".to_string()));
    let index_before = read_index_bytes(dir);

    let stderr = stderr_of_failure(&mut run_lgit_command(dir, &["checkout", "feature"]));

    assert_eq!(
        stderr,
        "fatal: Your local changes to the following files would be overwritten by checkout:\n\
         \t1.txt\n\
         Please commit your changes or stash them before you switch branches.\n\
         Aborting\n"
    );
    assert_eq!(read_index_bytes(dir), index_before);
    assert_eq!(read_file(&dir.join("1.txt")), "uncommitted");
    assert_eq!(read_file(&dir.join("a/2.txt")), "two");
    assert_eq!(read_head(dir), "ref: refs/heads/master\n");

    Ok(())
}

#[rstest]
fn checkout_with_staged_changes_fails(
    diverged_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = diverged_repository_dir.path();
    write_file(FileSpec::new(dir.join("a/b/3.txt"), "tres".to_string()));
    run_lgit_command(dir, &["add", "a/b/3.txt"])
        .assert()
        .success();
    let index_before = read_index_bytes(dir);

    let stderr = stderr_of_failure(&mut run_lgit_command(dir, &["checkout", "feature"]));

    assert!(stderr.contains("\ta/b/3.txt\n"), "{}", stderr);
    assert_eq!(read_index_bytes(dir), index_before);
    assert_eq!(read_file(&dir.join("a/b/3.txt")), "tres");

    Ok(())
}

#[rstest]
fn checkout_reports_every_dirty_path(
    diverged_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = diverged_repository_dir.path();
    write_file(FileSpec::new(dir.join("1.txt"), "uno".to_string()));
    write_file(FileSpec::new(dir.join("a/2.txt"), "deux".to_string()));

    let stderr = stderr_of_failure(&mut run_lgit_command(dir, &["checkout", "feature"]));

    assert!(stderr.contains("\t1.txt\n\ta/2.txt\n"), "{}", stderr);

    Ok(())
}

#[rstest]
fn checkout_with_deleted_tracked_file_fails(
    diverged_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = diverged_repository_dir.path();
    std::fs::remove_file(dir.join("1.txt"))?;
    let index_before = read_index_bytes(dir);

    let stderr = stderr_of_failure(&mut run_lgit_command(dir, &["checkout", "feature"]));

    assert_eq!(
        stderr,
        "fatal: Your local changes to the following files would be overwritten by checkout:\n\
         \t1.txt\n\
         Please commit your changes or stash them before you switch branches.\n\
         Aborting\n"
    );
    assert_eq!(read_index_bytes(dir), index_before);
    assert!(!dir.join("1.txt").exists());
    assert_eq!(read_head(dir), "ref: refs/heads/master\n");

    Ok(())
}

#[rstest]
fn checkout_with_removed_file_fails(
    diverged_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = diverged_repository_dir.path();
    run_lgit_command(dir, &["rm", "a/2.txt"])
        .assert()
        .success();
    std::fs::remove_file(dir.join("1.txt"))?;
    let index_before = read_index_bytes(dir);

    let stderr = stderr_of_failure(&mut run_lgit_command(dir, &["checkout", "feature"]));

    assert!(stderr.contains("\t1.txt\n\ta/2.txt\n"), "{}", stderr);
    assert_eq!(read_index_bytes(dir), index_before);
    assert!(!dir.join("a/2.txt").exists());
    assert_eq!(read_file(&dir.join("a/b/3.txt")), "three");
    assert_eq!(read_head(dir), "ref: refs/heads/master\n");

    Ok(())
}
