use crate::common::command::{AUTHOR, empty_repository_dir, lgit_commit_all, run_lgit_command, stdout_of};
use crate::common::file::{FileSpec, write_file};
use crate::common::read_branch_ref;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn message_resembling_a_parent_line_is_kept(
    empty_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = empty_repository_dir.path();
    write_file(FileSpec::new(dir.join("1.txt"), "one".to_string()));
    lgit_commit_all(dir, "fix\n\nparent 20200101000000.000000");
    let commit_id = read_branch_ref(dir, "master");

    let log = stdout_of(&mut run_lgit_command(dir, &["log"]));

    assert_eq!(
        log,
        format!(
            "commit {commit_id}\n\
             Author: {AUTHOR}\n\
             Date:   Fri Mar 1 12:00:00 2024\n\
             \n    fix\n    \n    parent 20200101000000.000000\n"
        )
    );

    Ok(())
}
