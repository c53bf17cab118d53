use crate::common::command::{repository_dir, run_lgit_command, stderr_of_failure};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case(&["status"])]
#[case(&["add", "."])]
#[case(&["log"])]
#[case(&["branch"])]
fn commands_outside_a_repository_fail(
    repository_dir: TempDir,
    #[case] args: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
    let stderr = stderr_of_failure(&mut run_lgit_command(repository_dir.path(), args));

    assert!(
        stderr.starts_with("fatal: not a lgit repository"),
        "unexpected stderr: {}",
        stderr
    );

    Ok(())
}
