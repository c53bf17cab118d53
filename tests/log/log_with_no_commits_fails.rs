use crate::common::command::{empty_repository_dir, run_lgit_command, stderr_of_failure};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn log_with_no_commits_fails(
    empty_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let stderr = stderr_of_failure(&mut run_lgit_command(empty_repository_dir.path(), &["log"]));

    assert_eq!(
        stderr,
        "fatal: not a valid object name: 'master' has no commits yet\n"
    );

    Ok(())
}
