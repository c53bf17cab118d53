use crate::common::command::{empty_repository_dir, init_repository_dir, run_lgit_command, stdout_of};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn list_branches_marks_the_current_one(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    for name in ["zeta", "feature/x", "alpha"] {
        run_lgit_command(dir, &["branch", name]).assert().success();
    }

    let listing = stdout_of(&mut run_lgit_command(dir, &["branch"]));
    assert_eq!(listing, "  alpha\n  feature/x\n* master\n  zeta\n");

    run_lgit_command(dir, &["checkout", "zeta"])
        .assert()
        .success();

    let listing = stdout_of(&mut run_lgit_command(dir, &["branch"]));
    assert_eq!(listing, "  alpha\n  feature/x\n  master\n* zeta\n");

    Ok(())
}

#[rstest]
fn list_branches_before_the_first_commit(
    empty_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let listing = stdout_of(&mut run_lgit_command(empty_repository_dir.path(), &["branch"]));

    assert_eq!(listing, "");

    Ok(())
}
