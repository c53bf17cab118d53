use crate::common::command::{init_repository_dir, run_lgit_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::read_index_paths;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn stale_lock_is_reported(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    std::fs::write(dir.join(".lgit/lgit.lock"), "424242\n")?;
    write_file(FileSpec::new(dir.join("4.txt"), "four".to_string()));

    run_lgit_command(dir, &["add", "4.txt"])
        .assert()
        .success()
        .stderr(predicate::str::contains("stale repository lock"))
        .stderr(predicate::str::contains("424242"));

    assert_eq!(
        read_index_paths(dir),
        vec!["1.txt", "a/2.txt", "a/b/3.txt", "4.txt"]
    );
    assert!(!dir.join(".lgit/lgit.lock").exists());

    Ok(())
}

#[rstest]
fn empty_lock_file_is_not_reported(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    std::fs::write(dir.join(".lgit/lgit.lock"), "")?;

    run_lgit_command(dir, &["status"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    Ok(())
}
