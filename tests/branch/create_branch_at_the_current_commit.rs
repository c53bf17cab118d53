use crate::common::command::{init_repository_dir, run_lgit_command};
use crate::common::read_branch_ref;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn create_branch_at_the_current_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_lgit_command(dir, &["branch", "feature"])
        .assert()
        .success();

    assert_eq!(
        read_branch_ref(dir, "feature"),
        read_branch_ref(dir, "master")
    );
    assert_eq!(
        crate::common::read_head(dir),
        "ref: refs/heads/master\n",
        "creating a branch does not switch to it"
    );

    Ok(())
}

#[rstest]
#[case("feature/login")]
#[case("release/v1.0/hotfix")]
fn create_branch_with_hierarchical_name(
    init_repository_dir: TempDir,
    #[case] name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_lgit_command(dir, &["branch", name]).assert().success();

    assert!(dir.join(".lgit/refs/heads").join(name).is_file());
    assert_eq!(read_branch_ref(dir, name), read_branch_ref(dir, "master"));

    Ok(())
}
