use crate::common::command::{empty_repository_dir, run_lgit_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::{count_objects, read_index_bytes, read_index_paths};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn adding_unchanged_file_twice_changes_nothing(
    empty_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = empty_repository_dir.path();
    write_file(FileSpec::new(dir.join("hello.txt"), "hello".to_string()));

    run_lgit_command(dir, &["add", "hello.txt"])
        .assert()
        .success();
    let index_after_first_add = read_index_bytes(dir);
    let objects_after_first_add = count_objects(dir);

    run_lgit_command(dir, &["add", "hello.txt"])
        .assert()
        .success();

    assert_eq!(read_index_bytes(dir), index_after_first_add);
    assert_eq!(count_objects(dir), objects_after_first_add);

    Ok(())
}

#[rstest]
fn identical_contents_are_stored_once(
    empty_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = empty_repository_dir.path();
    write_file(FileSpec::new(dir.join("first.txt"), "same".to_string()));
    write_file(FileSpec::new(dir.join("copy/second.txt"), "same".to_string()));

    run_lgit_command(dir, &["add", "."]).assert().success();

    assert_eq!(count_objects(dir), 1);
    assert_eq!(read_index_paths(dir), vec!["copy/second.txt", "first.txt"]);

    Ok(())
}
