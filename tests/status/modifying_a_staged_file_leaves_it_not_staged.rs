use crate::common::command::{empty_repository_dir, run_lgit_command, stdout_of};
use crate::common::file::{FileSpec, write_file};
use crate::common::{read_index_records, sha1_hex};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn modifying_a_staged_file_leaves_it_not_staged(
    empty_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = empty_repository_dir.path();
    write_file(FileSpec::new(dir.join("file.txt"), "hello".to_string()));
    run_lgit_command(dir, &["add", "file.txt"]).assert().success();

    write_file(FileSpec::new(dir.join("file.txt"), "hello, world".to_string()));

    let porcelain = stdout_of(&mut run_lgit_command(dir, &["status", "--porcelain"]));
    assert_eq!(porcelain, "AM file.txt\n");

    let record = &read_index_records(dir)[0];
    assert_eq!(record[1], sha1_hex(b"hello, world"), "working hash is refreshed");
    assert_eq!(record[2], sha1_hex(b"hello"), "staged hash is kept");

    Ok(())
}
