use crate::common::command::{init_repository_dir, run_lgit_command};
use crate::common::read_index_paths;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn adding_a_deleted_tracked_file_removes_its_record(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    std::fs::remove_file(dir.join("1.txt"))?;

    run_lgit_command(dir, &["add", "1.txt"]).assert().success();

    assert_eq!(read_index_paths(dir), vec!["a/2.txt", "a/b/3.txt"]);

    Ok(())
}

#[rstest]
fn adding_a_directory_drops_records_of_deleted_files_inside_it(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    std::fs::remove_dir_all(dir.join("a/b"))?;

    run_lgit_command(dir, &["add", "a"]).assert().success();

    assert_eq!(read_index_paths(dir), vec!["1.txt", "a/2.txt"]);

    Ok(())
}
