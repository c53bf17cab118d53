use crate::common::command::{init_repository_dir, run_lgit_command};
use crate::common::read_index_paths;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn removing_a_tracked_file_successfully(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_lgit_command(dir, &["rm", "1.txt"]).assert().success();

    assert!(!dir.join("1.txt").exists());
    assert_eq!(read_index_paths(dir), vec!["a/2.txt", "a/b/3.txt"]);

    Ok(())
}

#[rstest]
fn removing_the_last_file_of_a_directory_prunes_it(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_lgit_command(dir, &["rm", "a/b/3.txt"]).assert().success();

    assert!(!dir.join("a/b").exists());
    assert!(dir.join("a/2.txt").is_file());
    assert_eq!(read_index_paths(dir), vec!["1.txt", "a/2.txt"]);

    Ok(())
}

#[rstest]
fn removed_file_is_reported_as_deleted_from_the_index(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_lgit_command(dir, &["rm", "1.txt"]).assert().success();

    let output = run_lgit_command(dir, &["status", "--porcelain"])
        .assert()
        .success();
    assert_eq!(
        String::from_utf8(output.get_output().stdout.clone())?,
        "D  1.txt\n"
    );

    Ok(())
}
