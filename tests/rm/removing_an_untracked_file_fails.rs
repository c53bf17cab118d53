use crate::common::command::{init_repository_dir, run_lgit_command, stderr_of_failure};
use crate::common::file::{FileSpec, write_file};
use crate::common::read_index_bytes;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn removing_an_untracked_file_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("untracked.txt"), "loose".to_string()));
    let index_before = read_index_bytes(dir);

    let stderr = stderr_of_failure(&mut run_lgit_command(dir, &["rm", "untracked.txt"]));

    assert_eq!(
        stderr,
        "fatal: pathspec 'untracked.txt' did not match any files\n"
    );
    assert_eq!(read_index_bytes(dir), index_before);
    assert!(dir.join("untracked.txt").is_file());

    Ok(())
}

#[rstest]
fn a_failing_path_keeps_the_other_files(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let index_before = read_index_bytes(dir);

    stderr_of_failure(&mut run_lgit_command(dir, &["rm", "1.txt", "nope.txt"]));

    assert_eq!(read_index_bytes(dir), index_before);
    assert!(dir.join("1.txt").is_file());

    Ok(())
}
