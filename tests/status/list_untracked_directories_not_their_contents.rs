use crate::common::command::{empty_repository_dir, run_lgit_command, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn list_untracked_directories_not_their_contents(
    empty_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = empty_repository_dir.path();
    write_file(FileSpec::new(dir.join("file.txt"), String::new()));
    write_file(FileSpec::new(
        dir.join("dir").join("another_file.txt"),
        String::new(),
    ));

    let porcelain = stdout_of(&mut run_lgit_command(dir, &["status", "--porcelain"]));

    assert_eq!(porcelain, "?? dir/\n?? file.txt\n");

    Ok(())
}

#[rstest]
fn list_untracked_directories_that_indirectly_contain_files(
    empty_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = empty_repository_dir.path();
    write_file(FileSpec::new(dir.join("outer/inner/file.txt"), String::new()));

    let porcelain = stdout_of(&mut run_lgit_command(dir, &["status", "--porcelain"]));

    assert_eq!(porcelain, "?? outer/\n");

    Ok(())
}
