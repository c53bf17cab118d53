use crate::common::command::{empty_repository_dir, run_lgit_command, stderr_of_failure};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn create_branch_without_commits(
    empty_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = empty_repository_dir.path();

    let stderr = stderr_of_failure(&mut run_lgit_command(dir, &["branch", "feature"]));

    assert!(stderr.contains("has no commits yet"), "{}", stderr);
    assert!(!dir.join(".lgit/refs/heads/feature").exists());

    Ok(())
}
